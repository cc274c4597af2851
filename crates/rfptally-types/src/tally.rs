use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Accumulated total for one category, or the grand total.
///
/// A scaled total carries the raw/adjusted pair through every step and
/// renders as `"<raw>,<adjusted>"`; a bare raw total appears when no alpha
/// was supplied or nothing matched. The rendered forms parse back via
/// `FromStr` — downstream steps re-read the engine's own output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Tally {
    Raw(i64),
    Scaled { raw: i64, adjusted: i64 },
}

impl Tally {
    pub fn raw(&self) -> i64 {
        match self {
            Tally::Raw(n) => *n,
            Tally::Scaled { raw, .. } => *raw,
        }
    }

    /// Adjusted component, with a bare raw total counting as zero.
    pub fn adjusted_or_zero(&self) -> i64 {
        match self {
            Tally::Raw(_) => 0,
            Tally::Scaled { adjusted, .. } => *adjusted,
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tally::Raw(n) => write!(f, "{}", n),
            Tally::Scaled { raw, adjusted } => write!(f, "{},{}", raw, adjusted),
        }
    }
}

impl FromStr for Tally {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once(',') {
            Some((raw, adjusted)) => {
                let raw = raw
                    .trim()
                    .parse()
                    .map_err(|_| format!("invalid total: {}", s))?;
                let adjusted = adjusted
                    .trim()
                    .parse()
                    .map_err(|_| format!("invalid total: {}", s))?;
                Ok(Tally::Scaled { raw, adjusted })
            }
            None => s
                .parse()
                .map(Tally::Raw)
                .map_err(|_| format!("invalid total: {}", s)),
        }
    }
}
