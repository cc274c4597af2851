use crate::schema::RfpSection;
use rfptally_types::{Count, ItemSpec, Proposal, Slot};
use serde_yaml::Value;

/// Map one raw YAML value to a slot by shape.
///
/// Null and unrecognized scalars become `Empty`; mappings become items with
/// whichever recognized fields they carry; sequences map element-wise.
pub fn slot_from_value(value: &Value) -> Slot {
    match value {
        Value::Null => Slot::Empty,
        Value::String(s) => Slot::Text(s.clone()),
        Value::Sequence(items) => Slot::List(items.iter().map(slot_from_value).collect()),
        Value::Mapping(_) => Slot::Item(ItemSpec {
            label: value
                .get("item_label")
                .and_then(Value::as_str)
                .map(str::to_string),
            count: value.get("item_count").and_then(count_from_value),
            gpu_count: value.get("gpu_count").and_then(Value::as_i64),
        }),
        _ => Slot::Empty,
    }
}

fn count_from_value(value: &Value) -> Option<Count> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(Count::Int(i)),
            None => n.as_f64().map(Count::Float),
        },
        Value::String(s) => Some(Count::Text(s.clone())),
        _ => None,
    }
}

/// Lossy scalar-to-string for identity fields authored as strings or numbers.
fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn price_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn proposal_from_section(section: &RfpSection) -> Proposal {
    Proposal {
        rfp_no: scalar_to_string(&section.rfp_no),
        lead_org: scalar_to_string(&section.lead_org),
        tier1: slot_from_value(&section.t1),
        tier2: slot_from_value(&section.t2),
        head_nodes: slot_from_value(&section.hn),
        compute_nodes: slot_from_value(&section.cn),
        hot_storage: slot_from_value(&section.hs),
        cold_storage: slot_from_value(&section.cs),
        storage_nodes: slot_from_value(&section.sn),
        storage_stack: scalar_to_string(&section.sstack),
        total_price: price_from_value(&section.total_price),
    }
}
