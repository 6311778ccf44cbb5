// src/specs/summary.rs
//! Scoring and penalty summaries.
//!
//! Both summaries list events period by period. A player-link line is one
//! event. Once an overtime period header has been seen, every later event is
//! an overtime event; the latch never resets.
//!
//! Layout of one goal in the scoring summary (whitespace is the site's):
//! ```text
//! <tr class='thead onecell'><th colspan="3">2nd Period</th></tr>
//! <tr>
//!     <td class="right">02:42</td>
//!     <td><a href="/teams/NSH/2017.html">NSH</a></td>
//!     <td>
//!         <a href="/players/w/watsoau01.html">Austin Watson</a> (1)
//!         <a href="/players/j/johanry01.html">Ryan Johansen</a>
//!         and <a href="/players/e/ekholma01.html">Mattias Ekholm</a>
//!     </td>
//! </tr>
//! ```
//! The goal scorer's line carries the `(goal count)`; assist lines do not.

use crate::config::consts::{PENALTY_SECTION, PLAYER_LINK, SCORING_SECTION, SECTION_END};
use crate::core::html::{outer_text, strip_tags};
use crate::core::sanitize::{clean_name, normalize_entities};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoringEvent {
    pub name: String,
    pub overtime: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PenaltyEvent {
    pub description: String,
    pub overtime: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoringSummary {
    pub goals: Vec<ScoringEvent>,
    pub assists: Vec<ScoringEvent>,
}

impl ScoringSummary {
    /// True when any goal was scored in overtime, i.e. the game was decided there.
    pub fn decided_in_overtime(&self) -> bool {
        self.goals.iter().any(|g| g.overtime)
    }
}

pub fn parse_scoring(document: &str) -> ScoringSummary {
    let text = section(document, SCORING_SECTION);
    let summary = scan_events(text, ScoringSummary::default(), |mut acc, line, overtime| {
        let name = clean_name(outer_text(line));
        if name.is_empty() {
            logw!("Scoring line without a player name: {}", line.trim());
            return acc;
        }
        let event = ScoringEvent { name, overtime };
        if line.contains('(') {
            acc.goals.push(event);
        } else {
            acc.assists.push(event);
        }
        acc
    });
    logd!("Goals: {:?}", summary.goals);
    logd!("Assists: {:?}", summary.assists);
    summary
}

pub fn parse_penalties(document: &str) -> Vec<PenaltyEvent> {
    let text = section(document, PENALTY_SECTION);
    let penalties = scan_events(text, Vec::new(), |mut acc, line, overtime| {
        let description = strip_tags(normalize_entities(outer_text(line)));
        acc.push(PenaltyEvent { description, overtime });
        acc
    });
    logd!("Penalties: {:?}", penalties);
    penalties
}

/// The summary table opened by `marker`, or the whole document without one.
fn section<'a>(document: &'a str, marker: &str) -> &'a str {
    let Some(at) = document.find(marker) else {
        return document;
    };
    let rest = &document[at..];
    match rest.find(SECTION_END) {
        Some(end) => &rest[..end],
        None => rest,
    }
}

/// Overtime period header: visible text with the word `OT` (`2OT` too) or
/// `Overtime`, in any cell tag, or alone on its line when the header is
/// split. Player lines never count.
pub fn is_overtime_marker(line: &str) -> bool {
    if line.contains(PLAYER_LINK) {
        return false;
    }
    strip_tags(line).split(|c: char| !c.is_ascii_alphanumeric()).any(|w| {
        let w = w.trim_start_matches(|c: char| c.is_ascii_digit());
        w == "OT" || w.eq_ignore_ascii_case("overtime")
    })
}

/// Fold over the lines of `text`, threading the overtime latch and handing
/// each player-link line to `emit` with the latch value at that line.
fn scan_events<A>(text: &str, init: A, mut emit: impl FnMut(A, &str, bool) -> A) -> A {
    let (_, acc) = text.lines().fold((false, init), |(overtime, acc), line| {
        let overtime = overtime || is_overtime_marker(line);
        let acc = if line.contains(PLAYER_LINK) { emit(acc, line, overtime) } else { acc };
        (overtime, acc)
    });
    acc
}
