//! Car Catalog - aggregated car catalog with preference-ranked results
//!
//! This library fetches manufacturers, categories and car models from three
//! sources concurrently, filters them on user criteria and ranks them by the
//! interest recorded in a persisted preference table.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Catalog, FilterCriteria, FilterError, SelectionError};
pub use models::{
    CarModel, Category, Comparison, InterestWeights, Manufacturer, Snapshot, Specifications,
};
pub use services::{
    Aggregator, PreferenceStore, PreferenceTable, SourceEndpoints, SourceError, SourceFetcher,
};
