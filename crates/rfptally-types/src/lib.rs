pub mod alpha;
pub mod encoded;
pub mod proposal;
pub mod rendered;
pub mod slot;
pub mod tally;

pub use alpha::Alpha;
pub use encoded::{EncodedEntry, format_bare, format_labeled, parse_entry};
pub use proposal::Proposal;
pub use rendered::Rendered;
pub use slot::{Count, ItemSpec, Slot};
pub use tally::Tally;
