use crate::Slot;
use serde::Serialize;

/// One vendor proposal after ingestion: identity fields plus the fixed set
/// of inventory slots.
///
/// The tier slots hold GPU server configurations and feed both the item
/// extractor and the category tallies; the node and storage slots only ever
/// pass through the extractor.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Proposal {
    pub rfp_no: String,
    pub lead_org: String,
    /// Primary GPU tier (wire key `t1`).
    pub tier1: Slot,
    /// Secondary GPU tier (wire key `t2`).
    pub tier2: Slot,
    /// Head nodes (wire key `hn`).
    pub head_nodes: Slot,
    /// Compute nodes (wire key `cn`).
    pub compute_nodes: Slot,
    /// Hot storage capacity, byte-scale (wire key `hs`).
    pub hot_storage: Slot,
    /// Cold storage (wire key `cs`).
    pub cold_storage: Slot,
    /// Storage nodes (wire key `sn`).
    pub storage_nodes: Slot,
    /// Storage software stack (wire key `sstack`).
    pub storage_stack: String,
    pub total_price: Option<f64>,
}
