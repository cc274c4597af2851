use crate::category::{B200, H200, L40S, RTX6000};
use crate::combine::combine_tallies;
use crate::extract::{ExtractMode, extract_entries};
use crate::tally::tally_category;
use rfptally_types::{Alpha, Proposal, Rendered, Slot, Tally};
use serde::Serialize;

/// One proposal's summary row: rendered inventory columns plus the four
/// category totals and their grand total.
#[derive(Debug, Clone, Serialize)]
pub struct ProposalSummary {
    pub rfp_no: String,
    pub lead_org: String,
    pub tier1: Rendered,
    pub tier2: Rendered,
    pub head_nodes: Rendered,
    pub compute_nodes: Rendered,
    pub hot_storage: Rendered,
    pub cold_storage: Rendered,
    pub storage_nodes: Rendered,
    pub storage_stack: String,
    pub total_price: Option<f64>,
    pub alpha: Option<Alpha>,
    pub b200: Tally,
    pub h200: Tally,
    pub rtx6000: Tally,
    pub l40s: Tally,
    pub gpu_total: Tally,
}

/// Build the summary row for one proposal.
///
/// The b200/h200 tallies read the structured tier slots; the rtx6000/l40s
/// tallies read the tier columns after rendering, re-reading the encoded
/// entries the extractor just produced (the round trip `Rendered::to_slot`
/// exists for).
pub fn summarize_proposal(proposal: &Proposal, alpha: Option<&Alpha>) -> ProposalSummary {
    let b200 = tally_category(&B200, &proposal.tier1, &Slot::Empty, alpha);
    let h200 = tally_category(&H200, &proposal.tier1, &proposal.tier2, alpha);

    let tier1 = extract_entries(&proposal.tier1, alpha, ExtractMode::Counts);
    let tier2 = extract_entries(&proposal.tier2, alpha, ExtractMode::Counts);

    let tier1_encoded = tier1.to_slot();
    let tier2_encoded = tier2.to_slot();
    let rtx6000 = tally_category(&RTX6000, &tier1_encoded, &tier2_encoded, alpha);
    let l40s = tally_category(&L40S, &tier1_encoded, &tier2_encoded, alpha);

    let gpu_total = combine_tallies(&[b200, h200, rtx6000, l40s]);

    ProposalSummary {
        rfp_no: proposal.rfp_no.clone(),
        lead_org: proposal.lead_org.clone(),
        tier1,
        tier2,
        head_nodes: extract_entries(&proposal.head_nodes, alpha, ExtractMode::Counts),
        compute_nodes: extract_entries(&proposal.compute_nodes, None, ExtractMode::Counts),
        hot_storage: extract_entries(&proposal.hot_storage, alpha, ExtractMode::Capacity),
        cold_storage: extract_entries(&proposal.cold_storage, None, ExtractMode::Counts),
        storage_nodes: extract_entries(&proposal.storage_nodes, alpha, ExtractMode::Counts),
        storage_stack: proposal.storage_stack.clone(),
        total_price: proposal.total_price,
        alpha: alpha.copied(),
        b200,
        h200,
        rtx6000,
        l40s,
        gpu_total,
    }
}
