//! Detection of the contacts between regions and their grouping into an
//! adjacency relation.

pub use self::adjacency_map::AdjacencyMap;
pub use self::contact::{detect_contacts, ContactCandidate, RawContacts};
pub use self::dedup::{deduplicate, ContactPair};

mod adjacency_map;
mod contact;
mod dedup;
