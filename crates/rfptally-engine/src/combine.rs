use rfptally_types::Tally;

/// Componentwise sum of category totals into the grand total.
///
/// A bare raw total counts zero toward the adjusted component. The result
/// is always the scaled pair, even when every adjusted component was zero.
pub fn combine_tallies(parts: &[Tally]) -> Tally {
    let raw: i64 = parts.iter().map(Tally::raw).sum();
    let adjusted: i64 = parts.iter().map(Tally::adjusted_or_zero).sum();
    Tally::Scaled { raw, adjusted }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_componentwise() {
        let parts = [
            Tally::Scaled {
                raw: 10,
                adjusted: 5,
            },
            Tally::Raw(0),
            Tally::Scaled {
                raw: 3,
                adjusted: 1,
            },
            Tally::Scaled {
                raw: 7,
                adjusted: 2,
            },
        ];
        assert_eq!(combine_tallies(&parts).to_string(), "20,8");
    }

    #[test]
    fn all_zero_inputs_still_render_as_a_pair() {
        let parts = [Tally::Raw(0); 4];
        assert_eq!(combine_tallies(&parts).to_string(), "0,0");
    }

    #[test]
    fn bare_raw_inputs_count_zero_adjusted() {
        let parts = [Tally::Raw(12), Tally::Raw(8)];
        assert_eq!(combine_tallies(&parts).to_string(), "20,0");
    }
}
