// src/specs/score.rs
//! Final score per team, read off the scorebox at the top of the page.
//!
//! ```text
//! <strong>
//!     <a itemprop="name" href="/teams/NSH/2017.html">Nashville Predators</a>
//! </strong>
//! </div>
//! <div class="scores">
//!     <div class="score">3</div>
//! ```

use crate::config::consts::{
    SCORE_FIELD, SCORE_MARKER, SCORE_NAME_LOOKBACK, TEAM_CODE_LEN, TEAM_LINK, TEAM_NAME_FIELD,
};
use crate::core::html::{code_after, extract_value};
use crate::core::sanitize::clean_name;
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamScore {
    pub name: String,
    /// Three-letter code, when the name links to `/teams/XXX/`.
    pub code: Option<String>,
    pub goals: u32,
}

/// Team name → final goals, in page order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameScore {
    teams: Vec<TeamScore>,
}

/// Decided game: who won, who lost, and whether the loser was shut out.
#[derive(Debug, PartialEq, Eq)]
pub struct Outcome<'a> {
    pub winner: &'a TeamScore,
    pub loser: &'a TeamScore,
    pub shutout: bool,
}

impl GameScore {
    /// Insert or replace the entry for `score.name`.
    pub fn insert(&mut self, score: TeamScore) {
        match self.teams.iter_mut().find(|t| t.name == score.name) {
            Some(existing) => *existing = score,
            None => self.teams.push(score),
        }
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Both teams found.
    pub fn is_complete(&self) -> bool {
        self.teams.len() >= 2
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.teams.iter().find(|t| t.name == name).map(|t| t.goals)
    }

    pub fn teams(&self) -> &[TeamScore] {
        &self.teams
    }

    pub fn outcome(&self) -> Result<Outcome<'_>> {
        let [a, b, rest @ ..] = self.teams.as_slice() else {
            return Err(ScrapeError::IncompleteScoreMap { found: self.teams.len() });
        };
        if !rest.is_empty() {
            logw!("Found {} team scores, using the first two", self.teams.len());
        }

        let shutout = a.goals == 0 || b.goals == 0;
        let (winner, loser) = match a.goals.cmp(&b.goals) {
            std::cmp::Ordering::Greater => (a, b),
            std::cmp::Ordering::Less => (b, a),
            std::cmp::Ordering::Equal => return Err(ScrapeError::TiedScore { score: a.goals }),
        };
        Ok(Outcome { winner, loser, shutout })
    }
}

pub fn extract_scores(document: &str) -> GameScore {
    let lines: Vec<&str> = document.lines().collect();
    let mut scores = GameScore::default();

    for (i, line) in lines.iter().enumerate() {
        if !line.contains(SCORE_MARKER) {
            continue;
        }

        let raw = match extract_value(line, SCORE_FIELD) {
            Ok(v) => v,
            Err(e) => {
                logw!("Score line unreadable: {e}");
                continue;
            }
        };
        let Ok(goals) = raw.trim().parse::<u32>() else {
            logw!("Score `{raw}` is not a number: {}", line.trim());
            continue;
        };

        let from = i.saturating_sub(SCORE_NAME_LOOKBACK);
        let Some(context) = lines[from..i].iter().rev().find(|l| l.contains(TEAM_NAME_FIELD)) else {
            logw!("No team name within {SCORE_NAME_LOOKBACK} lines above score at line {}", i + 1);
            continue;
        };
        let name = match extract_value(context, TEAM_NAME_FIELD) {
            Ok(n) => clean_name(&n),
            Err(e) => {
                logw!("Team name unreadable: {e}");
                continue;
            }
        };
        if name.is_empty() {
            logw!("Empty team name near line {}", i + 1);
            continue;
        }

        let code = code_after(context, TEAM_LINK, TEAM_CODE_LEN).map(|c| s!(c));
        scores.insert(TeamScore { name, code, goals });
    }

    logd!("Scores: {:?}", scores.teams);
    scores
}
