// src/scrape/schedule.rs
use std::{thread, time::Duration};

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc};

use crate::config::consts::{BASE_URL, BOXSCORE_INDEX_PATH, YESTERDAY_OFFSET_HOURS};
use crate::core::net::{fetch_or_empty, Fetch};
use crate::progress::Progress;
use crate::specs::schedule::{boxscore_urls, date_key};
use crate::stats::StatCategory;

use super::boxscore::{process, BoxScoreReport};

/// Yesterday's date in US Eastern time as seen from `now`.
pub fn yesterday(now: DateTime<Utc>) -> NaiveDate {
    (now - TimeDelta::hours(YESTERDAY_OFFSET_HOURS)).date_naive()
}

/// Index page listing the box scores played on `date`.
pub fn index_url(date: NaiveDate) -> String {
    format!(
        "{BASE_URL}{BOXSCORE_INDEX_PATH}?month={}&day={}&year={}",
        date.month(),
        date.day(),
        date.year()
    )
}

/// Every game listed for `date`, one after another, `pause` apart.
/// A failed game is reported and skipped; it never stops the walk.
pub fn walk(
    fetcher: &dyn Fetch,
    date: NaiveDate,
    categories: &[StatCategory],
    with_penalties: bool,
    pause: Duration,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<BoxScoreReport> {
    let key = date_key(date);
    let index = fetch_or_empty(fetcher, &index_url(date));
    let urls = boxscore_urls(&index, &key);
    logf!("{} box scores listed for {key}", urls.len());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(urls.len());
        if urls.is_empty() {
            p.log(&format!("No box scores found for {key}"));
        }
    }

    let mut reports = Vec::with_capacity(urls.len());
    for (i, url) in urls.iter().enumerate() {
        if i > 0 && !pause.is_zero() {
            thread::sleep(pause); // be polite
        }

        let report = process(fetcher, url, categories, with_penalties);
        if let Some(p) = progress.as_deref_mut() {
            if report.is_ok() {
                p.item_done(url);
            } else {
                p.item_failed(url, &report.failures.join("; "));
            }
        }
        reports.push(report);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    reports
}
