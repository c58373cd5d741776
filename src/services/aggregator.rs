use crate::models::{CarModel, Category, Manufacturer, Snapshot};
use crate::services::fetcher::{SourceError, SourceFetcher};

/// Endpoints of the three catalog sources
#[derive(Debug, Clone)]
pub struct SourceEndpoints {
    pub manufacturers: String,
    pub models: String,
    pub categories: String,
}

/// Fans out one fetch per catalog source and merges the results
///
/// All three sources must succeed; there is no partial snapshot. When a
/// fetch fails the remaining in-flight fetches are dropped and the first
/// failure to complete is returned.
#[derive(Debug, Clone)]
pub struct Aggregator {
    fetcher: SourceFetcher,
    endpoints: SourceEndpoints,
}

impl Aggregator {
    pub fn new(fetcher: SourceFetcher, endpoints: SourceEndpoints) -> Self {
        Self { fetcher, endpoints }
    }

    /// Fetch a fresh snapshot from all three sources concurrently
    pub async fn fetch_snapshot(&self) -> Result<Snapshot, SourceError> {
        let (manufacturers, car_models, categories) = tokio::try_join!(
            self.fetcher.fetch::<Vec<Manufacturer>>(&self.endpoints.manufacturers),
            self.fetcher.fetch::<Vec<CarModel>>(&self.endpoints.models),
            self.fetcher.fetch::<Vec<Category>>(&self.endpoints.categories),
        )?;

        tracing::debug!(
            "Aggregated snapshot: {} manufacturers, {} models, {} categories",
            manufacturers.len(),
            car_models.len(),
            categories.len()
        );

        Ok(Snapshot {
            manufacturers,
            categories,
            car_models,
        })
    }
}
