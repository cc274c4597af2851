use crate::category::{Category, Scan};
use rfptally_types::{Alpha, ItemSpec, Slot, Tally, parse_entry};

/// Accumulate one category's raw and adjusted totals across up to two slots.
///
/// Slots scan in order, list elements in order. Malformed entries and
/// non-matching labels contribute nothing; this function cannot fail.
pub fn tally_category(
    category: &Category,
    slot_a: &Slot,
    slot_b: &Slot,
    alpha: Option<&Alpha>,
) -> Tally {
    let mut raw_total: i64 = 0;
    let mut adjusted_total: i64 = 0;

    'slots: for slot in [slot_a, slot_b] {
        for entry in slot.entries() {
            let Some((lanes, count)) = match_entry(category, entry) else {
                continue;
            };

            raw_total += (lanes as f64 * count).floor() as i64;
            if let Some(alpha) = alpha {
                adjusted_total += lanes * alpha.scale_floor(count);
            }

            if category.scan == Scan::FirstMatch {
                break 'slots;
            }
        }
    }

    if raw_total == 0 {
        Tally::Raw(0)
    } else if alpha.is_some() {
        Tally::Scaled {
            raw: raw_total,
            adjusted: adjusted_total,
        }
    } else {
        Tally::Raw(raw_total)
    }
}

/// Check one entry against the category; `Some((lanes, count))` on a match.
fn match_entry(category: &Category, entry: &Slot) -> Option<(i64, f64)> {
    match entry {
        Slot::Item(item) => match_item(category, item),
        Slot::Text(text) => {
            let lanes = category.encoded_lanes?;
            let parsed = parse_entry(text)?;
            if !category.matcher.matches(&parsed.label) {
                return None;
            }
            Some((lanes, parsed.count as f64))
        }
        _ => None,
    }
}

fn match_item(category: &Category, item: &ItemSpec) -> Option<(i64, f64)> {
    let label = item.label.as_deref()?;
    if !category.matcher.matches(label) {
        return None;
    }
    let lanes = item.gpu_count.unwrap_or(category.item_default_lanes);
    // A matching item with a missing or unparseable count still counts as a
    // match (it can stop a first-match scan); it just contributes zero.
    let count = item
        .count
        .as_ref()
        .and_then(|count| count.as_f64())
        .unwrap_or(0.0);
    Some((lanes, count))
}
