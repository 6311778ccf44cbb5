// src/config/options.rs
use std::path::PathBuf;

use chrono::NaiveDate;

use super::consts::*;
use crate::stats::StatCategory;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub target: Target,
    pub categories: Vec<StatCategory>,
    pub penalties: bool,
    pub export: ExportOptions,
    pub log_file: PathBuf,
    pub verbose: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            target: Target::Yesterday,
            categories: vec![StatCategory::Skater],
            penalties: false,
            export: ExportOptions::default(),
            log_file: PathBuf::from(LOG_FILE),
            verbose: false,
        }
    }
}

/// What to scrape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// One box-score page.
    Url(String),
    /// A saved box-score page on disk.
    File(PathBuf),
    /// Every box score listed for this date.
    Date(NaiveDate),
    /// Every box score listed for yesterday (US Eastern).
    Yesterday,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator for the row formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// `None` writes to stdout.
    pub out_path: Option<PathBuf>,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { format: ExportFormat::Csv, out_path: None, include_headers: true }
    }
}

impl ExportOptions {
    /// Resolve `-o` into a file path. A directory hint gets `<stem>.<ext>` appended.
    pub fn resolve_out_path(&self, stem: &str) -> Option<PathBuf> {
        let p = self.out_path.as_ref()?;
        if p.is_dir() || crate::file::looks_like_dir_hint(p) {
            Some(p.join(join!(stem, ".", self.format.ext())))
        } else {
            Some(p.clone())
        }
    }
}
