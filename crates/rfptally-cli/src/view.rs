use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use rfptally_engine::ProposalSummary;
use std::fmt;

/// Console rendering of summary rows: a header line plus one line per
/// proposal with its alpha and category totals.
pub struct SummaryListView<'a> {
    summaries: &'a [ProposalSummary],
    target_price: f64,
    color: bool,
}

impl<'a> SummaryListView<'a> {
    pub fn new(summaries: &'a [ProposalSummary], target_price: f64) -> Self {
        Self {
            summaries,
            target_price,
            color: std::io::stdout().is_terminal(),
        }
    }
}

impl fmt::Display for SummaryListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} proposal(s) at target price {}",
            self.summaries.len(),
            self.target_price
        )?;
        for summary in self.summaries {
            let alpha = summary
                .alpha
                .map(|a| a.to_string())
                .unwrap_or_else(|| "-".to_string());
            let org = if self.color {
                format!("{}", summary.lead_org.yellow())
            } else {
                summary.lead_org.clone()
            };
            writeln!(
                f,
                "{} {} alpha={} b200={} h200={} rtx6000={} l40s={} total={}",
                summary.rfp_no,
                org,
                alpha,
                summary.b200,
                summary.h200,
                summary.rtx6000,
                summary.l40s,
                summary.gpu_total
            )?;
        }
        Ok(())
    }
}
