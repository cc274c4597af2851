use rfptally_types::{Alpha, Count, Rendered, Slot, encoded};

/// Byte-scale unit marker carried by capacity counts (`"14PiB"`).
const CAPACITY_UNIT: &str = "PiB";

/// Which rendering rules apply to a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode {
    /// Ordinary unit counts; adjusted values floor to integers.
    Counts,
    /// Byte-scale capacities; adjusted values keep one decimal and the unit.
    Capacity,
}

/// Render one slot to its canonical display form.
///
/// Lists map element-wise in order. Every parse failure degrades to the
/// most literal rendering available; this function cannot fail.
pub fn extract_entries(slot: &Slot, alpha: Option<&Alpha>, mode: ExtractMode) -> Rendered {
    match slot {
        Slot::Empty => Rendered::Empty,
        Slot::Item(item) => {
            let label = item.label.as_deref().unwrap_or("");
            match &item.count {
                Some(count) if !count.is_falsy() => render_counted(label, count, alpha, mode),
                _ => Rendered::One(label.to_string()),
            }
        }
        Slot::Text(text) if mode == ExtractMode::Capacity && text.contains(CAPACITY_UNIT) => {
            render_bare_capacity(text, alpha)
        }
        Slot::List(items) => Rendered::Many(
            items
                .iter()
                .map(|item| extract_entries(item, alpha, mode))
                .collect(),
        ),
        _ => Rendered::Empty,
    }
}

fn render_counted(label: &str, count: &Count, alpha: Option<&Alpha>, mode: ExtractMode) -> Rendered {
    let Some(alpha) = alpha else {
        return Rendered::One(encoded::format_labeled(label, &count.to_string(), None));
    };

    if mode == ExtractMode::Capacity {
        if let Some(text) = count.as_str() {
            if text.contains(CAPACITY_UNIT) {
                let rendered = match capacity_number(text) {
                    Some(value) => {
                        let adjusted =
                            format!("{:.1}{}", alpha.scale_capacity(value), CAPACITY_UNIT);
                        encoded::format_labeled(label, text, Some(&adjusted))
                    }
                    None => encoded::format_labeled(label, text, None),
                };
                return Rendered::One(rendered);
            }
        }
    }

    let rendered = match count.as_f64() {
        Some(value) => {
            let adjusted = alpha.scale_floor(value).to_string();
            encoded::format_labeled(label, &count.to_string(), Some(&adjusted))
        }
        None => encoded::format_labeled(label, &count.to_string(), None),
    };
    Rendered::One(rendered)
}

fn render_bare_capacity(text: &str, alpha: Option<&Alpha>) -> Rendered {
    match capacity_number(text) {
        Some(value) => {
            let adjusted = alpha
                .map(|alpha| format!("{:.1}{}", alpha.scale_capacity(value), CAPACITY_UNIT));
            Rendered::One(encoded::format_bare(text, adjusted.as_deref()))
        }
        None => Rendered::One(text.to_string()),
    }
}

/// Numeric portion of a capacity string, digits and at most one decimal
/// point (`"14PiB"` -> 14.0). A second decimal point fails the parse.
fn capacity_number(text: &str) -> Option<f64> {
    let numeric: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    numeric.parse().ok()
}
