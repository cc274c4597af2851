use crate::Slot;
use serde::Serialize;
use std::fmt;

/// Output of item extraction: nothing, one rendered entry, or an ordered
/// sequence mirroring a list slot (never flattened, never sorted).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Rendered {
    Empty,
    One(String),
    Many(Vec<Rendered>),
}

impl Rendered {
    pub fn is_empty(&self) -> bool {
        match self {
            Rendered::Empty => true,
            Rendered::One(s) => s.is_empty(),
            Rendered::Many(items) => items.iter().all(Rendered::is_empty),
        }
    }

    /// Feed rendered output back into the engine as a slot.
    ///
    /// Category tallies over previously rendered columns rely on this round
    /// trip: the strings produced here parse back as encoded entries.
    pub fn to_slot(&self) -> Slot {
        match self {
            Rendered::Empty => Slot::Empty,
            Rendered::One(s) => Slot::Text(s.clone()),
            Rendered::Many(items) => Slot::List(items.iter().map(Rendered::to_slot).collect()),
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Empty => Ok(()),
            Rendered::One(s) => write!(f, "{}", s),
            Rendered::Many(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}
