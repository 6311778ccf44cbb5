// src/specs/region.rs
//! Region locator: one team's stat table for one category.
//!
//! Skater tables open with `id="all_XXX_skaters` and end at the team's
//! `TOTAL` row. Goalie tables open with `id="all_XXX_goalies` and, having no
//! totals row, end at the table close. The region is the text strictly
//! between the two markers.

use crate::config::consts::{
    GOALIES_END, GOALIES_SUFFIX, REGION_ID_PREFIX, SKATERS_END, SKATERS_SUFFIX, TEAM_CODE_LEN,
};
use crate::core::html::code_after;
use crate::error::{Result, ScrapeError};
use crate::stats::StatCategory;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    /// Three-letter team code from the start marker.
    pub team: String,
    /// Absolute offset just past the start marker.
    pub start: usize,
    /// Absolute offset of the end marker. Always `> start`.
    pub end: usize,
}

impl Region {
    pub fn slice<'a>(&self, document: &'a str) -> &'a str {
        &document[self.start..self.end]
    }
}

fn markers(category: StatCategory) -> (&'static str, &'static str) {
    match category {
        StatCategory::Skater => (SKATERS_SUFFIX, SKATERS_END),
        StatCategory::Goalie => (GOALIES_SUFFIX, GOALIES_END),
    }
}

fn start_pattern(category: StatCategory) -> String {
    let (suffix, _) = markers(category);
    join!(REGION_ID_PREFIX, "XXX", suffix)
}

pub fn locate(document: &str, category: StatCategory) -> Result<Region> {
    locate_from(document, category, 0)
}

/// Like `locate`, searching only from byte offset `from` onward.
/// Offsets in the returned region are absolute.
pub fn locate_from(document: &str, category: StatCategory, from: usize) -> Result<Region> {
    let (suffix, end_marker) = markers(category);
    let hay = document
        .get(from..)
        .ok_or_else(|| ScrapeError::marker_not_found(start_pattern(category), ""))?;

    let (team, start) = find_start(hay, suffix)
        .ok_or_else(|| ScrapeError::marker_not_found(start_pattern(category), hay))?;

    let tail = &hay[start..];
    let len = tail
        .find(end_marker)
        .ok_or_else(|| ScrapeError::marker_not_found(end_marker, tail))?;
    if len == 0 {
        return Err(ScrapeError::EmptyRegion { category, offset: from + start });
    }

    logd!("{category} region for {team}: {}..{}", from + start, from + start + len);
    Ok(Region { team, start: from + start, end: from + start + len })
}

/// Team code and the offset just past the first `id="all_XXX<suffix>`.
fn find_start(hay: &str, suffix: &str) -> Option<(String, usize)> {
    let mut pos = 0usize;
    while let Some(i) = hay[pos..].find(REGION_ID_PREFIX) {
        let at = pos + i;
        let code_end = at + REGION_ID_PREFIX.len() + TEAM_CODE_LEN;
        if let Some(code) = code_after(&hay[at..], REGION_ID_PREFIX, TEAM_CODE_LEN) {
            if hay[code_end..].starts_with(suffix) {
                return Some((s!(code), code_end + suffix.len()));
            }
        }
        pos = at + REGION_ID_PREFIX.len();
    }
    None
}
