// src/error.rs
//! Error taxonomy for box-score extraction.
//!
//! Every variant is recoverable: the aggregator turns it into "no stats for
//! this game" and the caller moves on to the next game.

use std::fmt;

use thiserror::Error;

use crate::stats::StatCategory;

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// How long the excerpt of searched text carried by an error may get.
const EXCERPT_CHARS: usize = 120;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("marker `{marker}` not found in: {context}")]
    MarkerNotFound { marker: String, context: String },

    #[error("no field name `{field}` in: {line}")]
    FieldNotFound { field: String, line: String },

    #[error("empty {category} region at offset {offset}")]
    EmptyRegion { category: StatCategory, offset: usize },

    #[error("invalid stat category `{value}`, valid values are {valid:?}")]
    InvalidCategory { value: String, valid: &'static [&'static str] },

    #[error("incomplete score map: found {found} of 2 team scores")]
    IncompleteScoreMap { found: usize },

    #[error("tied final score {score}-{score}, no winner to credit")]
    TiedScore { score: u32 },

    #[error("request to {url} failed: {kind}")]
    Transport { url: String, kind: TransportKind },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportKind {
    Timeout,
    Status(u16),
    TooManyRedirects,
    Request(String),
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Timeout => write!(f, "connection timed out"),
            TransportKind::Status(code) => write!(f, "HTTP status {code}"),
            TransportKind::TooManyRedirects => write!(f, "too many redirects"),
            TransportKind::Request(msg) => write!(f, "request error: {msg}"),
        }
    }
}

impl ScrapeError {
    pub fn marker_not_found(marker: impl Into<String>, searched: &str) -> Self {
        Self::MarkerNotFound { marker: marker.into(), context: excerpt(searched) }
    }

    pub fn field_not_found(field: impl Into<String>, line: &str) -> Self {
        Self::FieldNotFound { field: field.into(), line: excerpt(line.trim()) }
    }

    pub fn transport(url: impl Into<String>, kind: TransportKind) -> Self {
        Self::Transport { url: url.into(), kind }
    }
}

/// Bounded, char-safe prefix of `s` for error messages.
fn excerpt(s: &str) -> String {
    if s.is_empty() {
        return s!("<empty>");
    }
    match s.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => join!(&s[..cut], "…"),
        None => s!(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_is_bounded_and_char_safe() {
        let long = "é".repeat(500);
        let e = ScrapeError::marker_not_found("TOTAL", &long);
        let msg = e.to_string();
        assert!(msg.ends_with('…'));
        assert!(msg.chars().count() < 200);
    }

    #[test]
    fn empty_text_is_labelled() {
        let e = ScrapeError::marker_not_found("TOTAL", "");
        assert_eq!(e.to_string(), "marker `TOTAL` not found in: <empty>");
    }

    #[test]
    fn transport_kinds_render() {
        let e = ScrapeError::transport("https://x", TransportKind::Status(503));
        assert_eq!(e.to_string(), "request to https://x failed: HTTP status 503");
    }
}
