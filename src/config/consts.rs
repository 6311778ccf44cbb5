// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.hockey-reference.com";
pub const BOXSCORE_INDEX_PATH: &str = "/boxscores/";
pub const USER_AGENT: &str = "pl_scrape/0.3";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const MAX_REDIRECTS: usize = 10;

// Schedule walking
pub const REQUEST_PAUSE_MS: u64 = 1_000; // be polite
pub const DATE_FMT: &str = "%Y%m%d";
/// "Yesterday" is taken in US Eastern time: UTC minus one day and five hours.
pub const YESTERDAY_OFFSET_HOURS: i64 = 24 + 5;

// Logging
pub const LOG_FILE: &str = "peoples.log";

// Page markers. hockey-reference changing any of these breaks extraction.
pub const REGION_ID_PREFIX: &str = "id=\"all_";
pub const TEAM_CODE_LEN: usize = 3;
pub const SKATERS_SUFFIX: &str = "_skaters";
pub const GOALIES_SUFFIX: &str = "_goalies";
/// Team totals exist for skaters only.
pub const SKATERS_END: &str = "TOTAL";
/// Goalie tables have no totals row, so the table close ends them.
pub const GOALIES_END: &str = "/table";

pub const PLAYER_LINK: &str = "/players/";
pub const PLAYER_FIELD: &str = "players";
pub const PIM_FIELD: &str = "pen_min";

pub const SCORING_SECTION: &str = "id=\"scoring\"";
pub const PENALTY_SECTION: &str = "id=\"penalty\"";
pub const SECTION_END: &str = "</table>";

pub const SCORE_MARKER: &str = "div class=\"score\"";
pub const SCORE_FIELD: &str = "score";
pub const TEAM_NAME_FIELD: &str = "itemprop=\"name\"";
pub const TEAM_LINK: &str = "/teams/";
/// How far above its score line the scorebox puts the team name.
pub const SCORE_NAME_LOOKBACK: usize = 6;
