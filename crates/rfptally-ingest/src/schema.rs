use serde::Deserialize;
use serde_yaml::Value;

/// Wire shape of one proposal document: a single top-level `rfp` mapping.
///
/// Every inventory field deserializes as a raw YAML value; shape
/// interpretation is deferred to the mapper so one malformed field degrades
/// instead of failing the whole document.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProposalDoc {
    #[serde(default)]
    pub rfp: Option<RfpSection>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RfpSection {
    #[serde(default)]
    pub rfp_no: Value,
    #[serde(default)]
    pub lead_org: Value,
    #[serde(default)]
    pub t1: Value,
    #[serde(default)]
    pub t2: Value,
    #[serde(default)]
    pub hn: Value,
    #[serde(default)]
    pub cn: Value,
    #[serde(default)]
    pub hs: Value,
    #[serde(default)]
    pub cs: Value,
    #[serde(default)]
    pub sn: Value,
    #[serde(default)]
    pub sstack: Value,
    #[serde(default)]
    pub total_price: Value,
}
