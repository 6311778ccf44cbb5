// src/scrape/mod.rs
pub mod boxscore;
pub mod players;
pub mod schedule;

pub use boxscore::{process, process_document, process_file, BoxScoreReport};
pub use players::aggregate;
pub use schedule::walk;
