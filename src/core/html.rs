// src/core/html.rs
//! Line-oriented markup helpers. No DOM: everything here is substring
//! scanning over a single line or a known slice of the page.

use crate::error::{Result, ScrapeError};

/// Text content of the tag holding `field_name`.
///
/// `<td class="right " data-stat="goals_against" >2</td>` with
/// `"goals_against"` gives `"2"`: the slice between the first `>` after the
/// field name and the first `<` after it. When the `>` comes after the `<`
/// (or either is missing) the value is empty.
pub fn extract_value(line: &str, field_name: &str) -> Result<String> {
    let offset = line
        .find(field_name)
        .ok_or_else(|| ScrapeError::field_not_found(field_name, line))?;

    let rest = &line[offset..];
    let start = rest.find('>').map(|i| i + 1);
    let end = rest.find('<');

    Ok(match (start, end) {
        (Some(s), Some(e)) if s <= e => s!(&rest[s..e]),
        _ => s!(),
    })
}

/// Text between the first `>` and the last `<` of a line.
///
/// `<a href="/players/w/watsoau01.html">Austin Watson</a> (1)` gives
/// `Austin Watson`. Used for summary lines where a link is followed by
/// annotations.
pub fn outer_text(line: &str) -> &str {
    match (line.find('>'), line.rfind('<')) {
        (Some(open), Some(close)) if open < close => &line[open + 1..close],
        _ => "",
    }
}

/// `XXX` from a `/teams/XXX/` style link, when `XXX` is three uppercase letters.
pub fn code_after<'a>(line: &'a str, prefix: &str, len: usize) -> Option<&'a str> {
    let at = line.find(prefix)? + prefix.len();
    let code = line.get(at..at + len)?;
    code.bytes().all(|b| b.is_ascii_uppercase()).then_some(code)
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_value_round_trip() {
        assert_eq!(extract_value(r#"<td data-stat="X" >VALUE</td>"#, "X").unwrap(), "VALUE");
    }

    #[test]
    fn extract_value_first_occurrence_wins() {
        let line = r#"<td data-stat="pen_min" >4</td><td data-stat="pen_min" >9</td>"#;
        assert_eq!(extract_value(line, "pen_min").unwrap(), "4");
    }

    #[test]
    fn extract_value_player_link() {
        let line = r#"<th scope="row" class="left " data-stat="player" ><a href="/players/w/watsoau01.html">Austin Watson</a></th><td class="right " data-stat="pen_min" >2</td>"#;
        assert_eq!(extract_value(line, "players").unwrap(), "Austin Watson");
        assert_eq!(extract_value(line, "pen_min").unwrap(), "2");
    }

    #[test]
    fn extract_value_missing_field() {
        let err = extract_value("<td>1</td>", "goals").unwrap_err();
        assert!(matches!(err, ScrapeError::FieldNotFound { ref field, .. } if field == "goals"));
    }

    #[test]
    fn extract_value_close_before_open_is_empty() {
        // the next `<` comes before the tag's `>`
        assert_eq!(extract_value(r#"score <b>3"#, "score").unwrap(), "");
        assert_eq!(extract_value("score", "score").unwrap(), "");
    }

    #[test]
    fn outer_text_keeps_inner_markup_span() {
        assert_eq!(outer_text(r#"  <a href="/players/w/watsoau01.html">Austin Watson</a> (1)"#), "Austin Watson");
        assert_eq!(outer_text(r#"and <a href="/players/e/ekholma01.html">Mattias Ekholm</a>"#), "Mattias Ekholm");
        assert_eq!(outer_text("no tags"), "");
        assert_eq!(outer_text("<>"), "");
    }

    #[test]
    fn code_after_requires_uppercase() {
        assert_eq!(code_after(r#"<a href="/teams/NSH/2017.html">"#, "/teams/", 3), Some("NSH"));
        assert_eq!(code_after(r#"<a href="/teams/nsh/2017.html">"#, "/teams/", 3), None);
        assert_eq!(code_after(r#"/teams/NS"#, "/teams/", 3), None);
    }
}
