/// How a category recognizes its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMatch {
    /// The label must equal this string exactly.
    Exact(&'static str),
    /// The label must start with this prefix (case-sensitive).
    Prefix(&'static str),
}

impl LabelMatch {
    pub fn matches(&self, label: &str) -> bool {
        match self {
            LabelMatch::Exact(want) => label == *want,
            LabelMatch::Prefix(prefix) => label.starts_with(prefix),
        }
    }
}

/// Scan behavior once a category finds a matching item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// Stop at the first match across both slots, in scan order.
    FirstMatch,
    /// Fold in every match.
    SumAll,
}

/// Per-category tally configuration.
///
/// Missing `gpu_count` resolves differently per category: 0 lanes for the
/// b200/h200 families, 8 for the rtx6000/l40s families. Encoded entries
/// never carry a lane count, so each category also declares what to assume
/// for them; `None` means encoded entries are not recognized at all.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub matcher: LabelMatch,
    /// Lanes assumed for a structured item without `gpu_count`.
    pub item_default_lanes: i64,
    /// Lanes assumed for an encoded entry, or `None` to skip them.
    pub encoded_lanes: Option<i64>,
    pub scan: Scan,
}

pub const B200: Category = Category {
    name: "b200",
    matcher: LabelMatch::Exact("b200_8way"),
    item_default_lanes: 0,
    encoded_lanes: None,
    scan: Scan::FirstMatch,
};

pub const H200: Category = Category {
    name: "h200",
    matcher: LabelMatch::Prefix("h200_"),
    item_default_lanes: 0,
    encoded_lanes: Some(8),
    scan: Scan::FirstMatch,
};

pub const RTX6000: Category = Category {
    name: "rtx6000",
    matcher: LabelMatch::Prefix("rtx6000_"),
    item_default_lanes: 8,
    encoded_lanes: Some(8),
    scan: Scan::SumAll,
};

pub const L40S: Category = Category {
    name: "l40s",
    matcher: LabelMatch::Prefix("l40s_"),
    item_default_lanes: 8,
    encoded_lanes: Some(8),
    scan: Scan::SumAll,
};

/// The four fixed GPU families, in summary column order.
pub fn builtin_categories() -> [Category; 4] {
    [B200, H200, RTX6000, L40S]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_strict() {
        assert!(B200.matcher.matches("b200_8way"));
        assert!(!B200.matcher.matches("b200_8way_v2"));
        assert!(!B200.matcher.matches("b200_4way"));
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        assert!(RTX6000.matcher.matches("rtx6000_8way"));
        assert!(RTX6000.matcher.matches("rtx6000_dense"));
        assert!(!RTX6000.matcher.matches("RTX6000_8way"));
    }

    #[test]
    fn builtins_follow_column_order() {
        let names: Vec<_> = builtin_categories().iter().map(|c| c.name).collect();
        assert_eq!(names, ["b200", "h200", "rtx6000", "l40s"]);
    }
}
