// Service exports
pub mod aggregator;
pub mod fetcher;
pub mod preferences;

pub use aggregator::{Aggregator, SourceEndpoints};
pub use fetcher::{SourceError, SourceFetcher};
pub use preferences::{PreferenceError, PreferenceStore, PreferenceTable};
