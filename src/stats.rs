// src/stats.rs
//! Stat categories, templates and per-player stat records.
//!
//! A `StatLine` is always created from its category's template, so every
//! player in a table carries exactly the template's key set. Lines are plain
//! values: two players never share storage.

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::ScrapeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatCategory {
    Skater,
    Goalie,
}

impl StatCategory {
    pub const ALL: [StatCategory; 2] = [StatCategory::Skater, StatCategory::Goalie];
    pub const NAMES: &'static [&'static str] = &["skater", "goalie"];

    pub fn as_str(self) -> &'static str {
        match self {
            StatCategory::Skater => "skater",
            StatCategory::Goalie => "goalie",
        }
    }

    /// Ordered key set every player of this category starts from.
    pub fn template(self) -> &'static [Stat] {
        use Stat::*;
        match self {
            StatCategory::Skater => &[Pims, Goals, Assists, OtGoals, OtAssists],
            StatCategory::Goalie => &[Pims, Starts, RegW, OtW, RegSo, OtSo, OtL, RegL],
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatCategory {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skater" | "skaters" => Ok(StatCategory::Skater),
            "goalie" | "goalies" => Ok(StatCategory::Goalie),
            _ => Err(ScrapeError::InvalidCategory { value: s!(s), valid: StatCategory::NAMES }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stat {
    Pims,
    Goals,
    Assists,
    OtGoals,
    OtAssists,
    Starts,
    RegW,
    OtW,
    RegSo,
    OtSo,
    OtL,
    RegL,
}

impl Stat {
    /// Column label used in every output format.
    pub fn label(self) -> &'static str {
        match self {
            Stat::Pims => "PIMS",
            Stat::Goals => "Goals",
            Stat::Assists => "Assists",
            Stat::OtGoals => "OT Goals",
            Stat::OtAssists => "OT Assists",
            Stat::Starts => "Starts",
            Stat::RegW => "Reg W",
            Stat::OtW => "OT W",
            Stat::RegSo => "Reg SO",
            Stat::OtSo => "OT SO",
            Stat::OtL => "OT L",
            Stat::RegL => "Reg L",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One player's stats for one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatLine {
    category: StatCategory,
    values: Vec<u32>, // parallel to category.template()
}

impl StatLine {
    pub fn new(category: StatCategory) -> Self {
        Self { category, values: vec![0; category.template().len()] }
    }

    pub fn category(&self) -> StatCategory {
        self.category
    }

    fn slot(&self, stat: Stat) -> Option<usize> {
        self.category.template().iter().position(|s| *s == stat)
    }

    /// `None` when the stat is not part of this category's template.
    pub fn get(&self, stat: Stat) -> Option<u32> {
        self.slot(stat).map(|i| self.values[i])
    }

    /// Returns false (and changes nothing) for a stat outside the template.
    pub fn set(&mut self, stat: Stat, value: u32) -> bool {
        match self.slot(stat) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn add(&mut self, stat: Stat, by: u32) -> bool {
        match self.slot(stat) {
            Some(i) => {
                self.values[i] = self.values[i].saturating_add(by);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, u32)> + '_ {
        self.category.template().iter().copied().zip(self.values.iter().copied())
    }

    /// True when every field still holds its template default.
    pub fn is_default(&self) -> bool {
        self.values.iter().all(|v| *v == 0)
    }
}

impl Serialize for StatLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (stat, value) in self.iter() {
            map.serialize_entry(stat.label(), &value)?;
        }
        map.end()
    }
}

/// Player name → stat line, for one category of one game, in the order the
/// page lists the players.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StatTable {
    category: StatCategory,
    #[serde(serialize_with = "players_in_order")]
    players: Vec<(String, StatLine)>,
}

fn players_in_order<S: Serializer>(players: &[(String, StatLine)], serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(players.len()))?;
    for (name, line) in players {
        map.serialize_entry(name, line)?;
    }
    map.end()
}

impl StatTable {
    pub fn new(category: StatCategory) -> Self {
        Self { category, players: Vec::new() }
    }

    pub fn category(&self) -> StatCategory {
        self.category
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Start `name` from a fresh template. A repeated name is reset in place
    /// and keeps its first position.
    pub fn insert_player(&mut self, name: impl Into<String>) -> &mut StatLine {
        let name = name.into();
        let fresh = StatLine::new(self.category);
        let i = match self.players.iter().position(|(n, _)| *n == name) {
            Some(i) => {
                self.players[i].1 = fresh;
                i
            }
            None => {
                self.players.push((name, fresh));
                self.players.len() - 1
            }
        };
        &mut self.players[i].1
    }

    pub fn get(&self, name: &str) -> Option<&StatLine> {
        self.players.iter().find(|(n, _)| n == name).map(|(_, l)| l)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut StatLine> {
        self.players.iter_mut().find(|(n, _)| n == name).map(|(_, l)| l)
    }

    pub fn players(&self) -> impl Iterator<Item = (&str, &StatLine)> {
        self.players.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `Player` followed by the template labels.
    pub fn headers(&self) -> Vec<String> {
        std::iter::once(s!("Player"))
            .chain(self.category.template().iter().map(|s| s!(s.label())))
            .collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.players
            .iter()
            .map(|(name, line)| {
                std::iter::once(name.clone())
                    .chain(line.iter().map(|(_, v)| v.to_string()))
                    .collect()
            })
            .collect()
    }
}
