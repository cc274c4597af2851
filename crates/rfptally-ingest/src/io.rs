use crate::error::Result;
use crate::mapper::proposal_from_section;
use crate::schema::ProposalDoc;
use rfptally_types::Proposal;
use std::path::Path;

/// Read and map one proposal document.
///
/// Unreadable files and invalid YAML are the only errors this layer
/// surfaces; a document without an `rfp` section maps to an all-empty
/// proposal.
pub fn load_proposal(path: &Path) -> Result<Proposal> {
    let text = std::fs::read_to_string(path)?;
    let doc: ProposalDoc = serde_yaml::from_str(&text)?;
    Ok(match &doc.rfp {
        Some(section) => proposal_from_section(section),
        None => Proposal::default(),
    })
}
