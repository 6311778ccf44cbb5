// src/specs/schedule.rs
//! Box-score links on the daily index page (`/boxscores/`).
//!
//! Each game row links to `/boxscores/<YYYYMMDD><n><HOME>.html`, so the date
//! string alone identifies the day's games.

use chrono::NaiveDate;

use crate::config::consts::DATE_FMT;
use crate::core::net::absolute_url;

/// `NaiveDate` → `YYYYMMDD`, the form used in box-score URLs.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

/// Absolute URLs of every quoted link containing `date_key`, deduplicated
/// in page order.
pub fn boxscore_urls(index_html: &str, date_key: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    if date_key.is_empty() {
        return out;
    }

    for line in index_html.lines().filter(|l| l.contains(date_key)) {
        // odd pieces of a '"' split are the quoted values
        for href in line.split('"').skip(1).step_by(2) {
            if !href.contains(date_key) || href.contains(char::is_whitespace) {
                continue;
            }
            let url = absolute_url(href);
            if !out.contains(&url) {
                out.push(url);
            }
        }
    }
    out
}
