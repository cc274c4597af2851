//! Canonical display format for a counted inventory entry:
//! `"<label> (×<raw>[,<adjusted>])"`.
//!
//! The engine both produces this format (item extraction) and consumes it
//! (category tallies re-read previously rendered columns), so the grammar
//! lives here rather than as ad-hoc string splitting at each call site.

use regex::Regex;
use std::sync::LazyLock;

static ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*) \(×(\d+)(?:,[^)]*)?\)$").unwrap());

/// A parsed encoded entry.
///
/// The adjusted component is never read back; tallies recompute it from the
/// raw count and the current alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedEntry {
    pub label: String,
    pub count: i64,
}

/// Parse an encoded entry, returning `None` for free-form strings.
pub fn parse_entry(s: &str) -> Option<EncodedEntry> {
    let caps = ENTRY_RE.captures(s)?;
    let label = caps.get(1)?.as_str().to_string();
    let count = caps.get(2)?.as_str().parse().ok()?;
    Some(EncodedEntry { label, count })
}

/// Render a labeled entry, with the adjusted component when present.
pub fn format_labeled(label: &str, count: &str, adjusted: Option<&str>) -> String {
    match adjusted {
        Some(adj) => format!("{} (×{},{})", label, count, adj),
        None => format!("{} (×{})", label, count),
    }
}

/// Render a bare (label-less) entry, used for capacity-only slots.
pub fn format_bare(count: &str, adjusted: Option<&str>) -> String {
    match adjusted {
        Some(adj) => format!("(×{},{})", count, adj),
        None => format!("(×{})", count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pair_form() {
        let entry = parse_entry("rtx6000_8way (×45,35)").unwrap();
        assert_eq!(entry.label, "rtx6000_8way");
        assert_eq!(entry.count, 45);
    }

    #[test]
    fn parses_raw_only_form() {
        let entry = parse_entry("h200_4way (×14)").unwrap();
        assert_eq!(entry.label, "h200_4way");
        assert_eq!(entry.count, 14);
    }

    #[test]
    fn parses_empty_label() {
        let entry = parse_entry(" (×5)").unwrap();
        assert_eq!(entry.label, "");
        assert_eq!(entry.count, 5);
    }

    #[test]
    fn rejects_free_form_strings() {
        assert!(parse_entry("32 nodes, liquid cooled").is_none());
        assert!(parse_entry("rtx6000_8way").is_none());
        assert!(parse_entry("tray (×4.5)").is_none());
        assert!(parse_entry("(×14PiB)").is_none());
    }

    #[test]
    fn format_and_parse_round_trip() {
        let rendered = format_labeled("l40s_8way", "45", Some("22"));
        assert_eq!(rendered, "l40s_8way (×45,22)");
        let entry = parse_entry(&rendered).unwrap();
        assert_eq!(entry.label, "l40s_8way");
        assert_eq!(entry.count, 45);

        let rendered = format_labeled("l40s_8way", "45", None);
        let entry = parse_entry(&rendered).unwrap();
        assert_eq!(entry.count, 45);
    }

    #[test]
    fn format_bare_has_no_label() {
        assert_eq!(format_bare("14PiB", Some("7.0PiB")), "(×14PiB,7.0PiB)");
        assert_eq!(format_bare("14PiB", None), "(×14PiB)");
    }
}
