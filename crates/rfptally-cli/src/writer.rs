use anyhow::Result;
use rfptally_engine::ProposalSummary;
use std::path::Path;

/// Fixed column order of the summary CSV.
const COLUMNS: [&str; 18] = [
    "rfp_no",
    "lead_org",
    "tier1",
    "tier2",
    "head_nodes",
    "compute_nodes",
    "hot_storage",
    "cold_storage",
    "storage_nodes",
    "storage_stack",
    "total_price",
    "alpha",
    "b200",
    "h200",
    "rtx6000",
    "l40s",
    "gpu_total",
    "target_info",
];

/// Write summary rows as CSV. Multi-entry columns join with `"; "`.
pub fn write_summary_csv(
    path: &Path,
    summaries: &[ProposalSummary],
    target_price: f64,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(COLUMNS)?;

    let target_info = format!("target price is {}", target_price);
    for summary in summaries {
        writer.write_record([
            summary.rfp_no.clone(),
            summary.lead_org.clone(),
            summary.tier1.to_string(),
            summary.tier2.to_string(),
            summary.head_nodes.to_string(),
            summary.compute_nodes.to_string(),
            summary.hot_storage.to_string(),
            summary.cold_storage.to_string(),
            summary.storage_nodes.to_string(),
            summary.storage_stack.clone(),
            summary
                .total_price
                .map(|price| price.to_string())
                .unwrap_or_default(),
            summary
                .alpha
                .map(|alpha| alpha.to_string())
                .unwrap_or_default(),
            summary.b200.to_string(),
            summary.h200.to_string(),
            summary.rtx6000.to_string(),
            summary.l40s.to_string(),
            summary.gpu_total.to_string(),
            target_info.clone(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
