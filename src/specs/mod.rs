// src/specs/mod.rs
//! # Page readers
//!
//! Each module here knows *where the ground truth lives* in one kind of
//! hockey-reference markup and how to pull it out with plain substring
//! scanning.
//!
//! ## What lives here
//! - **Pure text extraction** from a page already in memory: table regions,
//!   the scoring and penalty summaries, the scorebox, index-page links.
//! - **Marker choice** (all markers are constants in `config::consts`).
//! - **Small result types** (`Region`, `ScoringSummary`, `GameScore`, …).
//!
//! ## What does **not** live here
//! - **Networking**: callers hand in the document text.
//! - **Cross-section business logic**: turning regions, summaries and scores
//!   into per-player stat lines is `scrape::players`.
//! - **Output formatting.**
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::schedule / scrape::boxscore → scrape::players::aggregate
//!                                            ↘ specs::{region, summary, score}
//! ```
//!
//! ## Conventions
//! - Line-oriented: a "field" is the text between the `>` and `<` nearest a
//!   marker on one line.
//! - No panics on odd markup; failures are `ScrapeError`s or skipped lines
//!   with a log entry.
//! - Testable offline against synthetic snippets shaped like the real page.
pub mod region;
pub mod schedule;
pub mod score;
pub mod summary;
