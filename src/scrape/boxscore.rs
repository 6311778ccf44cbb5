// src/scrape/boxscore.rs
//! One game, end to end: fetch the page, build each requested stat table.

use std::path::Path;

use serde::Serialize;

use crate::core::net::{fetch_or_empty, Fetch};
use crate::specs::summary::{parse_penalties, PenaltyEvent};
use crate::stats::{StatCategory, StatTable};

use super::players::aggregate;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoxScoreReport {
    /// URL or file the page came from.
    pub source: String,
    /// One table per requested category, in request order. A failed
    /// category is present and empty.
    pub tables: Vec<StatTable>,
    /// Why each failed category has no stats.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalties: Option<Vec<PenaltyEvent>>,
}

impl BoxScoreReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn table(&self, category: StatCategory) -> Option<&StatTable> {
        self.tables.iter().find(|t| t.category() == category)
    }
}

/// Fetch `url` and parse it. Transport failures become an empty page, so the
/// report comes back with empty tables rather than an error.
pub fn process(
    fetcher: &dyn Fetch,
    url: &str,
    categories: &[StatCategory],
    with_penalties: bool,
) -> BoxScoreReport {
    logf!("Box score: {url}");
    let html = fetch_or_empty(fetcher, url);
    process_document(url, &html, categories, with_penalties)
}

/// Same as `process` for a page saved on disk.
pub fn process_file(path: &Path, categories: &[StatCategory], with_penalties: bool) -> BoxScoreReport {
    let source = path.display().to_string();
    let html = std::fs::read_to_string(path).unwrap_or_else(|e| {
        loge!("Failed to read {source}: {e}");
        s!()
    });
    process_document(&source, &html, categories, with_penalties)
}

pub fn process_document(
    source: &str,
    html: &str,
    categories: &[StatCategory],
    with_penalties: bool,
) -> BoxScoreReport {
    let t = std::time::Instant::now();
    let mut tables = Vec::with_capacity(categories.len());
    let mut failures = Vec::new();

    for &category in categories {
        match aggregate(html, category) {
            Ok(table) => tables.push(table),
            Err(e) => {
                failures.push(format!("{category}: {e}"));
                tables.push(StatTable::new(category));
            }
        }
    }

    let penalties = with_penalties.then(|| parse_penalties(html));
    logd!("Parsed {source} in {:?}", t.elapsed());

    BoxScoreReport { source: s!(source), tables, failures, penalties }
}
