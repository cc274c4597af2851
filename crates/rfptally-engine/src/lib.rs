// Engine layer - pure functions from proposal slots to rendered columns.
// Sits between ingested domain values and CLI presentation; no IO, no state.

pub mod category;
pub mod combine;
pub mod extract;
pub mod summary;
pub mod tally;

pub use category::{B200, Category, H200, L40S, LabelMatch, RTX6000, Scan, builtin_categories};
pub use combine::combine_tallies;
pub use extract::{ExtractMode, extract_entries};
pub use summary::{ProposalSummary, summarize_proposal};
pub use tally::tally_category;
