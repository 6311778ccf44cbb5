// tests/boxscore_page.rs
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use pl_scrape::scrape::{aggregate, process_document};
use pl_scrape::specs::summary::parse_penalties;
use pl_scrape::stats::{Stat, StatCategory, StatTable};

const PAGE: &str = include_str!("fixtures/boxscore_nsh_ana.html");
const URL: &str = "https://www.hockey-reference.com/boxscores/201705120ANA.html";

fn overtime_page() -> String {
    PAGE.replace("3rd Period", "1st OT Period")
}

fn stat(table: &StatTable, player: &str, stat: Stat) -> u32 {
    table
        .get(player)
        .unwrap_or_else(|| panic!("{player} missing"))
        .get(stat)
        .unwrap_or_else(|| panic!("{player} has no {stat}"))
}

#[test]
fn skaters_from_both_teams_with_points_and_pims() {
    let t = aggregate(PAGE, StatCategory::Skater).unwrap();
    assert_eq!(t.len(), 9);

    assert_eq!(stat(&t, "Austin Watson", Stat::Goals), 1);
    assert_eq!(stat(&t, "Austin Watson", Stat::Pims), 2);
    assert_eq!(stat(&t, "Ryan Johansen", Stat::Assists), 1);
    assert_eq!(stat(&t, "Mattias Ekholm", Stat::Assists), 1);
    assert_eq!(stat(&t, "Filip Forsberg", Stat::Goals), 1);
    assert_eq!(stat(&t, "Roman Josi", Stat::Assists), 1);
    assert_eq!(stat(&t, "Colton Sissons", Stat::Goals), 1);
    assert_eq!(stat(&t, "Colton Sissons", Stat::Pims), 0);
    assert_eq!(stat(&t, "Chris Wagner", Stat::Pims), 2);
    assert!(t.get("Corey Perry").is_some_and(|l| l.is_default()));

    let ot_points: u32 = t.players().map(|(_, l)| {
        l.get(Stat::OtGoals).unwrap_or(0) + l.get(Stat::OtAssists).unwrap_or(0)
    }).sum();
    assert_eq!(ot_points, 0);
}

#[test]
fn goalies_get_starts_and_a_regulation_shutout() {
    let t = aggregate(PAGE, StatCategory::Goalie).unwrap();
    assert_eq!(t.len(), 3);

    assert_eq!(stat(&t, "Pekka Rinne", Stat::Starts), 1);
    assert_eq!(stat(&t, "Pekka Rinne", Stat::RegSo), 1);
    assert_eq!(stat(&t, "Pekka Rinne", Stat::RegW), 0);
    assert_eq!(stat(&t, "John Gibson", Stat::Starts), 1);
    assert_eq!(stat(&t, "John Gibson", Stat::RegL), 1);
    assert!(t.get("Jonathan Bernier").is_some_and(|l| l.is_default()));
}

#[test]
fn overtime_goal_moves_points_and_decisions() {
    let page = overtime_page();

    let skaters = aggregate(&page, StatCategory::Skater).unwrap();
    assert_eq!(stat(&skaters, "Colton Sissons", Stat::Goals), 0);
    assert_eq!(stat(&skaters, "Colton Sissons", Stat::OtGoals), 1);
    assert_eq!(stat(&skaters, "Austin Watson", Stat::Goals), 1);

    let goalies = aggregate(&page, StatCategory::Goalie).unwrap();
    assert_eq!(stat(&goalies, "Pekka Rinne", Stat::OtSo), 1);
    assert_eq!(stat(&goalies, "Pekka Rinne", Stat::RegSo), 0);
    assert_eq!(stat(&goalies, "John Gibson", Stat::OtL), 1);
    assert_eq!(stat(&goalies, "John Gibson", Stat::RegL), 0);
}

#[test]
fn penalties_read_from_their_own_section() {
    let p = parse_penalties(PAGE);
    let text: Vec<&str> = p.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(text, ["Chris Wagner: 2 min for Slashing", "Austin Watson: 2 min for Roughing"]);
    assert!(p.iter().all(|e| !e.overtime));
}

#[test]
fn page_without_goalie_tables_fails_only_that_category() {
    let cut = PAGE.find("<div id=\"all_NSH_goalies\"").unwrap();
    let no_goalies: String = PAGE[..cut]
        .lines()
        .chain(PAGE[cut..].lines().filter(|l| !l.contains("_goalies")))
        .collect::<Vec<_>>()
        .join("\n");

    let r = process_document(URL, &no_goalies, &StatCategory::ALL, false);
    assert_eq!(r.failures.len(), 1);
    assert!(r.failures[0].starts_with("goalie"));
    assert_eq!(r.table(StatCategory::Skater).map(StatTable::len), Some(9));
    assert!(r.table(StatCategory::Goalie).is_some_and(StatTable::is_empty));
}

#[test]
fn reparsing_gives_the_same_report() {
    let a = process_document(URL, PAGE, &StatCategory::ALL, true);
    let b = process_document(URL, PAGE, &StatCategory::ALL, true);
    assert!(a.is_ok());
    assert_eq!(a, b);
}

/// Log sink for checking what a run reported.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn one_team_score_empties_goalies_and_is_logged() {
    let one_score: String = PAGE
        .lines()
        .filter(|l| !l.contains("<div class=\"score\">0</div>"))
        .collect::<Vec<_>>()
        .join("\n");

    let log = Captured::default();
    let sink = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || sink.clone())
        .finish();

    let r = tracing::subscriber::with_default(subscriber, || {
        process_document(URL, &one_score, &StatCategory::ALL, false)
    });

    assert_eq!(r.failures.len(), 1);
    assert!(r.failures[0].starts_with("goalie"));
    assert!(r.table(StatCategory::Goalie).is_some_and(StatTable::is_empty));
    assert_eq!(r.table(StatCategory::Skater).map(StatTable::len), Some(9));
    assert!(log.text().contains("incomplete score map"));
}
