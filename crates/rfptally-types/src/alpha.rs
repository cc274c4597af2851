use std::fmt;
use std::str::FromStr;

/// Price-derived scaling ratio applied to raw inventory counts.
///
/// Carried between components as a percentage with one decimal place
/// (`"42.3%"`). The stored ratio is quantized to that precision, so
/// formatting and re-parsing the percentage is lossless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alpha(f64);

impl Alpha {
    /// Parse an already-formatted percentage string such as `"42.3%"`.
    ///
    /// Returns `None` for anything that does not parse to a positive,
    /// finite percentage.
    pub fn from_percent(s: &str) -> Option<Self> {
        let body = s.trim().trim_end_matches('%');
        let pct: f64 = body.trim().parse().ok()?;
        if !pct.is_finite() || pct <= 0.0 {
            return None;
        }
        Some(Alpha(pct / 100.0))
    }

    /// Derive a proposal's alpha from the caller's target price:
    /// `(target / proposal price) × 100`, quantized to one decimal place.
    ///
    /// Missing, zero, or negative prices yield no alpha.
    pub fn from_target_price(target: f64, price: f64) -> Option<Self> {
        if !target.is_finite() || !price.is_finite() || target <= 0.0 || price <= 0.0 {
            return None;
        }
        let pct = target / price * 100.0;
        // Quantize through the one-decimal rendering so every consumer sees
        // exactly the ratio printed in the alpha column.
        let quantized: f64 = format!("{:.1}", pct).parse().ok()?;
        if quantized <= 0.0 {
            return None;
        }
        Some(Alpha(quantized / 100.0))
    }

    pub fn ratio(&self) -> f64 {
        self.0
    }

    /// Adjusted integral count: `floor(count × alpha)`.
    pub fn scale_floor(&self, count: f64) -> i64 {
        (count * self.0).floor() as i64
    }

    /// Adjusted capacity value, left fractional for one-decimal rendering.
    pub fn scale_capacity(&self, value: f64) -> f64 {
        value * self.0
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

impl FromStr for Alpha {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alpha::from_percent(s).ok_or_else(|| format!("invalid percentage: {}", s))
    }
}

impl serde::Serialize for Alpha {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_percent_strings() {
        let alpha = Alpha::from_percent("50.0%").unwrap();
        assert_eq!(alpha.ratio(), 0.5);

        assert!(Alpha::from_percent("nope").is_none());
        assert!(Alpha::from_percent("-3.0%").is_none());
        assert!(Alpha::from_percent("0%").is_none());
    }

    #[test]
    fn derives_from_target_price() {
        let alpha = Alpha::from_target_price(1.7, 3.4).unwrap();
        assert_eq!(alpha.to_string(), "50.0%");

        // 1.7 / 3.0 = 56.666..% quantizes to the printed precision
        let alpha = Alpha::from_target_price(1.7, 3.0).unwrap();
        assert_eq!(alpha.to_string(), "56.7%");

        assert!(Alpha::from_target_price(1.7, 0.0).is_none());
        assert!(Alpha::from_target_price(1.7, -2.0).is_none());
    }

    #[test]
    fn floors_adjusted_counts() {
        let alpha = Alpha::from_percent("50.0%").unwrap();
        assert_eq!(alpha.scale_floor(45.0), 22);
        assert_eq!(alpha.scale_floor(14.0), 7);
    }

    #[test]
    fn survives_ratios_above_one() {
        let alpha = Alpha::from_percent("150.0%").unwrap();
        assert_eq!(alpha.scale_floor(10.0), 15);
    }

    #[test]
    fn percent_round_trips_through_display() {
        let alpha = Alpha::from_target_price(1.7, 3.0).unwrap();
        let reparsed: Alpha = alpha.to_string().parse().unwrap();
        assert_eq!(alpha, reparsed);
    }
}
