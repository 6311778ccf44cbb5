// src/cli.rs
use std::{
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::consts::REQUEST_PAUSE_MS;
use crate::config::options::{ExportFormat, RunOptions, Target};
use crate::core::net::HttpFetcher;
use crate::core::sanitize::file_stem_of;
use crate::file::{render, write_export};
use crate::progress::Progress;
use crate::scrape::{process, process_file, schedule, BoxScoreReport};
use crate::specs::schedule::date_key;
use crate::stats::StatCategory;

pub type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(RunOptions),
    Help,
}

pub fn run<I>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = String>,
{
    let opts = match parse_args(args)? {
        Command::Help => {
            eprintln!("{HELP}");
            return Ok(());
        }
        Command::Run(opts) => opts,
    };

    crate::log::init(&opts.log_file, opts.verbose)?;

    let job = Job::new(&opts.target, Utc::now());
    logf!("Run: {:?} {:?}", job, opts.categories);

    let reports = collect(&job, &opts)?;
    let failed = reports.iter().filter(|r| !r.is_ok()).count();

    if opts.export.out_path.is_some() {
        let stem = job.stem();
        for path in write_export(&reports, &opts.categories, &opts.export, &stem)? {
            eprintln!("Wrote {}", path.display());
        }
    } else {
        print!("{}", render(&reports, &opts.categories, &opts.export)?);
    }

    if failed > 0 {
        logw!("{failed} of {} games had missing stats", reports.len());
        eprintln!("Warning: {failed} of {} games had missing stats (see log)", reports.len());
    }
    Ok(())
}

/// `Target` with "yesterday" pinned to a date.
#[derive(Debug, PartialEq, Eq)]
enum Job<'a> {
    Page(&'a str),
    File(&'a Path),
    Day(NaiveDate),
}

impl<'a> Job<'a> {
    fn new(target: &'a Target, now: DateTime<Utc>) -> Self {
        match target {
            Target::Url(url) => Job::Page(url),
            Target::File(path) => Job::File(path),
            Target::Date(date) => Job::Day(*date),
            Target::Yesterday => Job::Day(schedule::yesterday(now)),
        }
    }

    /// Output file stem for a directory `-o`.
    fn stem(&self) -> String {
        match self {
            Job::Page(url) => file_stem_of(url),
            Job::File(path) => file_stem_of(&path.to_string_lossy()),
            Job::Day(date) => date_key(*date),
        }
    }
}

fn collect(job: &Job<'_>, opts: &RunOptions) -> CliResult<Vec<BoxScoreReport>> {
    let reports = match job {
        Job::File(path) => vec![process_file(path, &opts.categories, opts.penalties)],
        Job::Page(url) => {
            let fetcher = HttpFetcher::new()?;
            vec![process(&fetcher, url, &opts.categories, opts.penalties)]
        }
        Job::Day(date) => {
            let fetcher = HttpFetcher::new()?;
            let mut progress = StderrProgress::default();
            schedule::walk(
                &fetcher,
                *date,
                &opts.categories,
                opts.penalties,
                Duration::from_millis(REQUEST_PAUSE_MS),
                Some(&mut progress),
            )
        }
    };
    Ok(reports)
}

#[derive(Default)]
struct StderrProgress {
    total: usize,
    seen: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, url: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] {url}", self.seen, self.total);
    }
    fn item_failed(&mut self, url: &str, reason: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] {url} (incomplete: {reason})", self.seen, self.total);
    }
}

pub fn parse_args<I>(args: I) -> CliResult<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = RunOptions::default();
    let mut target: Option<Target> = None;
    let mut args = args.into_iter();

    let mut set_target = |t: Target| -> CliResult<()> {
        if target.replace(t).is_some() {
            return Err("Only one of --url, --file, --date, --yesterday may be given".into());
        }
        Ok(())
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => set_target(Target::Url(args.next().ok_or("Missing value for --url")?))?,
            "--file" => {
                let v = args.next().ok_or("Missing value for --file")?;
                set_target(Target::File(PathBuf::from(v)))?
            }
            "--date" => {
                let v = args.next().ok_or("Missing value for --date")?;
                set_target(Target::Date(parse_date(&v)?))?
            }
            "--yesterday" => set_target(Target::Yesterday)?,
            "--category" => {
                let v = args.next().ok_or("Missing value for --category")?;
                opts.categories = parse_categories(&v)?;
            }
            "--penalties" => opts.penalties = true,
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    "json" => ExportFormat::Json,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "-o" | "--out" => {
                opts.export.out_path = Some(PathBuf::from(args.next().ok_or("Missing output path")?))
            }
            "--include-headers" => opts.export.include_headers = true,
            "--no-headers" => opts.export.include_headers = false,
            "--log" => opts.log_file = PathBuf::from(args.next().ok_or("Missing value for --log")?),
            "-v" | "--verbose" => opts.verbose = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if let Some(t) = target {
        opts.target = t;
    }
    Ok(Command::Run(opts))
}

fn parse_date(s: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|_| format!("Invalid date: {} (expected YYYYMMDD)", s).into())
}

fn parse_categories(s: &str) -> CliResult<Vec<StatCategory>> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if part.eq_ignore_ascii_case("all") {
            out.extend(StatCategory::ALL);
            continue;
        }
        out.push(StatCategory::from_str(part)?);
    }
    if out.is_empty() {
        return Err("No category given".into());
    }
    let mut seen = Vec::with_capacity(out.len());
    out.retain(|c| if seen.contains(c) { false } else { seen.push(*c); true });
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliResult<Command> {
        parse_args(args.iter().map(|a| s!(*a)))
    }

    fn opts(args: &[&str]) -> RunOptions {
        match parse(args).unwrap() {
            Command::Run(o) => o,
            Command::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn no_args_means_yesterdays_skaters() {
        assert_eq!(opts(&[]), RunOptions::default());
    }

    #[test]
    fn date_accepts_both_shapes() {
        let want = NaiveDate::from_ymd_opt(2017, 5, 12).unwrap();
        assert_eq!(opts(&["--date", "20170512"]).target, Target::Date(want));
        assert_eq!(opts(&["--date", "2017-05-12"]).target, Target::Date(want));
        assert!(parse(&["--date", "May 12"]).is_err());
    }

    #[test]
    fn categories_are_listed_once_in_order() {
        let o = opts(&["--category", "goalie,all"]);
        assert_eq!(o.categories, vec![StatCategory::Goalie, StatCategory::Skater]);
        assert!(parse(&["--category", "referee"]).is_err());
    }

    #[test]
    fn two_targets_are_rejected() {
        assert!(parse(&["--url", "https://x/1.html", "--yesterday"]).is_err());
    }

    #[test]
    fn export_flags() {
        let o = opts(&["--format", "json", "-o", "out/", "--no-headers", "--penalties", "-v"]);
        assert_eq!(o.export.format, ExportFormat::Json);
        assert_eq!(o.export.out_path, Some(PathBuf::from("out/")));
        assert!(!o.export.include_headers);
        assert!(o.penalties);
        assert!(o.verbose);
    }

    #[test]
    fn yesterday_is_pinned_once() {
        use chrono::TimeZone;
        let now = Utc.with_ymd_and_hms(2017, 5, 13, 12, 0, 0).unwrap();
        let job = Job::new(&Target::Yesterday, now);
        assert_eq!(job, Job::Day(NaiveDate::from_ymd_opt(2017, 5, 12).unwrap()));
        assert_eq!(job.stem(), "20170512");

        let url = Target::Url(s!("https://www.hockey-reference.com/boxscores/201705120ANA.html"));
        assert_eq!(Job::new(&url, now).stem(), "201705120ANA");
        let file = Target::File(PathBuf::from("saved/game one.html"));
        assert_eq!(Job::new(&file, now).stem(), "game_one");
    }

    #[test]
    fn help_and_unknown() {
        assert_eq!(parse(&["--help"]).unwrap(), Command::Help);
        assert!(parse(&["--frobnicate"]).is_err());
        assert!(parse(&["--url"]).is_err());
    }
}
