use serde::{Deserialize, Serialize};
use std::fmt;

/// One named field of a vendor proposal holding inventory data.
///
/// Proposal documents are hand-authored and inconsistently shaped: the same
/// field may hold a single item mapping, a list, a pre-rendered display
/// string, or nothing at all. `Slot` closes that open set so downstream code
/// can match exhaustively. Unrecognized scalars map to `Empty` at ingestion.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Slot {
    /// Absent, null, or unrecognized value.
    #[default]
    Empty,
    /// A single structured inventory item.
    Item(ItemSpec),
    /// An ordered sequence of further slots.
    List(Vec<Slot>),
    /// A free-form or previously rendered display string.
    Text(String),
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Iterate the entries of this slot one level deep: the slot itself, or
    /// each element of a list. Aggregation never recurses further.
    pub fn entries(&self) -> std::slice::Iter<'_, Slot> {
        match self {
            Slot::List(items) => items.iter(),
            other => std::slice::from_ref(other).iter(),
        }
    }
}

/// A structured inventory item as authored in a proposal document.
///
/// All fields are optional; tolerance to partially filled mappings is part
/// of the contract, not an accident.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemSpec {
    /// Item label, e.g. `"rtx6000_8way"` (wire key `item_label`).
    #[serde(default, rename = "item_label")]
    pub label: Option<String>,
    /// Unit count; a string for byte-scale capacities (wire key `item_count`).
    #[serde(default, rename = "item_count")]
    pub count: Option<Count>,
    /// Accelerator lanes per unit (wire key `gpu_count`).
    #[serde(default)]
    pub gpu_count: Option<i64>,
}

/// An item count exactly as authored: integer, float, or string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Count {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Count {
    /// Zero and empty counts render as a bare label, like absent ones.
    pub fn is_falsy(&self) -> bool {
        match self {
            Count::Int(n) => *n == 0,
            Count::Float(v) => *v == 0.0,
            Count::Text(s) => s.is_empty(),
        }
    }

    /// Numeric value, if the count parses as one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Count::Int(n) => Some(*n as f64),
            Count::Float(v) => Some(*v),
            Count::Text(s) => s.trim().parse().ok(),
        }
    }

    /// The authored string, for counts that carry a unit suffix.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Count::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Int(n) => write!(f, "{}", n),
            Count::Float(v) => write!(f, "{}", v),
            Count::Text(s) => write!(f, "{}", s),
        }
    }
}
