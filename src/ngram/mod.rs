pub mod collocation;
pub mod frequency;
pub mod types;

pub use self::collocation::{collocations, CollocationScorer};
pub use self::frequency::FrequencyTable;
pub use self::types::BigramRecord;
