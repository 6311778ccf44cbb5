// src/file.rs
//! Shaping reports into output tables and writing them out.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::core::sanitize::file_stem_of;
use crate::csv::to_export_string;
use crate::error::Result;
use crate::scrape::BoxScoreReport;
use crate::stats::StatCategory;

/// One output table: a name for file stems, headers, rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataSet {
    pub name: String,
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

/// One `DataSet` per category (every game stacked, `Game` column first),
/// plus a `penalties` set when any report carries penalties.
pub fn datasets(reports: &[BoxScoreReport], categories: &[StatCategory]) -> Vec<DataSet> {
    let mut out: Vec<DataSet> = categories
        .iter()
        .map(|&category| {
            let mut headers = vec![s!("Game")];
            let mut rows = Vec::new();
            for report in reports {
                let Some(table) = report.table(category) else { continue };
                if headers.len() == 1 {
                    headers.extend(table.headers());
                }
                let game = file_stem_of(&report.source);
                rows.extend(table.to_rows().into_iter().map(|r| {
                    std::iter::once(game.clone()).chain(r).collect::<Vec<String>>()
                }));
            }
            if headers.len() == 1 {
                headers.extend(crate::stats::StatTable::new(category).headers());
            }
            DataSet { name: s!(category.as_str()), headers: Some(headers), rows }
        })
        .collect();

    if reports.iter().any(|r| r.penalties.is_some()) {
        let rows = reports
            .iter()
            .flat_map(|r| {
                let game = file_stem_of(&r.source);
                r.penalties.iter().flatten().map(move |p| {
                    vec![game.clone(), p.description.clone(), s!(if p.overtime { "OT" } else { "" })]
                })
            })
            .collect();
        out.push(DataSet {
            name: s!("penalties"),
            headers: Some(vec![s!("Game"), s!("Penalty"), s!("OT")]),
            rows,
        });
    }
    out
}

pub fn render_json(reports: &[BoxScoreReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

/// Everything as one printable string. Row formats separate tables with a blank line.
pub fn render(
    reports: &[BoxScoreReport],
    categories: &[StatCategory],
    export: &ExportOptions,
) -> Result<String> {
    let Some(sep) = export.format.delim() else {
        return render_json(reports);
    };
    let blocks: Vec<String> = datasets(reports, categories)
        .iter()
        .map(|ds| to_export_string(&ds.headers, &ds.rows, export.include_headers, sep))
        .collect();
    Ok(blocks.join("\n"))
}

/// Write to `export.out_path`. JSON is one file; row formats write one file
/// per table, suffixed with the table name when there is more than one.
/// Returns the paths written.
pub fn write_export(
    reports: &[BoxScoreReport],
    categories: &[StatCategory],
    export: &ExportOptions,
    default_stem: &str,
) -> Result<Vec<PathBuf>> {
    let Some(path) = export.resolve_out_path(default_stem) else {
        return Ok(Vec::new());
    };

    if export.format == ExportFormat::Json {
        write_text(&path, &render_json(reports)?)?;
        return Ok(vec![path]);
    }

    let sep = export.format.delim().unwrap_or(',');
    let sets = datasets(reports, categories);
    let mut written = Vec::with_capacity(sets.len());
    for ds in &sets {
        let target = if sets.len() == 1 { path.clone() } else { suffixed(&path, &ds.name) };
        write_text(&target, &to_export_string(&ds.headers, &ds.rows, export.include_headers, sep))?;
        written.push(target);
    }
    Ok(written)
}

/// `out/stats.csv` + `goalie` → `out/stats_goalie.csv`
fn suffixed(path: &Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}_{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{suffix}"),
    };
    path.with_file_name(name)
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    logf!("Wrote {}", path.display());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
