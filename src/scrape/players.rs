// src/scrape/players.rs
//! Per-player stat table for one category of one game.
//!
//! Table rows give the roster and penalty minutes. Goals and assists only
//! exist in the scoring summary, which is not split by team, so it is read
//! once for the whole page. Goalie decisions come from the final score.

use crate::config::consts::{PIM_FIELD, PLAYER_FIELD, PLAYER_LINK};
use crate::core::html::extract_value;
use crate::core::sanitize::{clean_name, parse_count};
use crate::error::Result;
use crate::specs::region::{locate, locate_from, Region};
use crate::specs::score::{extract_scores, GameScore, TeamScore};
use crate::specs::summary::{parse_scoring, ScoringSummary};
use crate::stats::{Stat, StatCategory, StatTable};

/// Build the stat table for `category`. Any failure (a missing region,
/// unusable scores) fails the whole game; no partial table is returned.
pub fn aggregate(document: &str, category: StatCategory) -> Result<StatTable> {
    build(document, category).inspect_err(|e| loge!("No {category} stats for this game: {e}"))
}

fn build(document: &str, category: StatCategory) -> Result<StatTable> {
    let regions = locate_teams(document, category)?;

    let mut table = StatTable::new(category);
    let rosters: Vec<Vec<String>> = regions.iter().map(|r| read_roster(document, r, &mut table)).collect();

    let summary = parse_scoring(document);

    match category {
        StatCategory::Skater => credit_points(&mut table, &summary),
        StatCategory::Goalie => {
            let scores = extract_scores(document);
            credit_decisions(&mut table, &regions, &rosters, &summary, &scores)?;
        }
    }

    logf!("{} {category} lines built", table.len());
    Ok(table)
}

/// A game always has two teams; their tables appear one after the other.
fn locate_teams(document: &str, category: StatCategory) -> Result<[Region; 2]> {
    let first = locate(document, category)?;
    let second = locate_from(document, category, first.end)?;
    Ok([first, second])
}

/// Add every player row of `region` to `table` with only PIMS set.
/// Returns the names in table order.
fn read_roster(document: &str, region: &Region, table: &mut StatTable) -> Vec<String> {
    let mut names = Vec::new();

    for line in region.slice(document).lines().filter(|l| l.contains(PLAYER_LINK)) {
        // the link to the player page holds the display name
        let name = match extract_value(line, PLAYER_FIELD) {
            Ok(raw) => clean_name(&raw),
            Err(e) => {
                logw!("{e}");
                continue;
            }
        };
        if name.is_empty() {
            logw!("Empty player name in {} table: {}", region.team, line.trim());
            continue;
        }

        let pims = match extract_value(line, PIM_FIELD) {
            Ok(raw) => parse_count(&raw),
            Err(e) => {
                logd!("{e}");
                0
            }
        };

        table.insert_player(name.as_str()).set(Stat::Pims, pims);
        names.push(name);
    }

    logd!("{}: {} players", region.team, names.len());
    names
}

fn credit_points(table: &mut StatTable, summary: &ScoringSummary) {
    let buckets = [
        (&summary.goals, Stat::Goals, Stat::OtGoals),
        (&summary.assists, Stat::Assists, Stat::OtAssists),
    ];
    for (events, regulation, overtime) in buckets {
        for event in events {
            let stat = if event.overtime { overtime } else { regulation };
            match table.get_mut(&event.name) {
                Some(line) => {
                    line.add(stat, 1);
                }
                None => logw!("{stat} for {} who is not in either skater table", event.name),
            }
        }
    }
}

/// Starts for each team's first listed goalie, then the win/loss decision.
fn credit_decisions(
    table: &mut StatTable,
    regions: &[Region; 2],
    rosters: &[Vec<String>],
    summary: &ScoringSummary,
    scores: &GameScore,
) -> Result<()> {
    let outcome = scores.outcome()?;
    let overtime = summary.decided_in_overtime();

    let starters: Vec<Option<&String>> = rosters.iter().map(|r| r.first()).collect();
    for (region, starter) in regions.iter().zip(&starters) {
        match starter.and_then(|name| table.get_mut(name)) {
            Some(line) => {
                line.set(Stat::Starts, 1);
            }
            None => logw!("No goalie listed for {}", region.team),
        }
    }

    let win = match (overtime, outcome.shutout) {
        (false, false) => Stat::RegW,
        (false, true) => Stat::RegSo,
        (true, false) => Stat::OtW,
        (true, true) => Stat::OtSo,
    };
    let loss = if overtime { Stat::OtL } else { Stat::RegL };

    for (team, stat) in [(outcome.winner, win), (outcome.loser, loss)] {
        let starter = team_index(team, regions, scores).and_then(|i| starters.get(i).copied().flatten());
        match starter.and_then(|name| table.get_mut(name)) {
            Some(line) => {
                line.add(stat, 1);
            }
            None => logw!("{stat} for {} has no goalie to credit", team.name),
        }
    }
    Ok(())
}

/// Which region belongs to `team`: by team code, else by page order.
fn team_index(team: &TeamScore, regions: &[Region; 2], scores: &GameScore) -> Option<usize> {
    if let Some(code) = &team.code {
        if let Some(i) = regions.iter().position(|r| &r.team == code) {
            return Some(i);
        }
    }
    scores.teams().iter().position(|t| t.name == team.name).filter(|i| *i < regions.len())
}
