// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&mdash;", "—")
        .replace("&ndash;", "–")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Canonical form of a scraped player or team name.
/// Table rows and summary lines must agree on it for lookups to hit.
pub fn clean_name(raw: &str) -> String {
    normalize_ws(&normalize_entities(raw))
}

/// Integer cell value, e.g. `"12"` or `" 4 "`. Anything unparsable is 0.
pub fn parse_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Filesystem-safe stem from a URL or path: last segment, extension dropped.
pub fn file_stem_of(url: &str) -> String {
    let last = url.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    let stem = last.split('.').next().unwrap_or("");
    let out: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if out.is_empty() { s!("boxscore") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_name_decodes_and_squashes() {
        assert_eq!(clean_name("  Ryan&nbsp;O&#39;Reilly \n"), "Ryan O'Reilly");
    }

    #[test]
    fn parse_count_defaults_to_zero() {
        assert_eq!(parse_count(" 4 "), 4);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("x"), 0);
    }

    #[test]
    fn file_stem_of_urls() {
        assert_eq!(file_stem_of("https://www.hockey-reference.com/boxscores/201705120ANA.html"), "201705120ANA");
        assert_eq!(file_stem_of(""), "boxscore");
    }
}
