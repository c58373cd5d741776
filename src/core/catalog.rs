use crate::core::{
    compare::{self, SelectionError},
    filters::{matches_criteria, FilterCriteria},
    ranker,
};
use crate::models::{Comparison, InterestWeights, Snapshot};
use crate::services::PreferenceTable;

/// Catalog operations over a snapshot and the preference table
///
/// # Interest signals
/// - Filtering records a soft bump for every surviving model
/// - Comparing records a hard bump for both selected models
/// - Ranking reads the accumulated weights
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    weights: InterestWeights,
}

impl Catalog {
    pub fn new(weights: InterestWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: InterestWeights::default(),
        }
    }

    pub fn weights(&self) -> InterestWeights {
        self.weights
    }

    /// Keep the models matching every supplied criterion
    ///
    /// Survivors keep snapshot order; manufacturers and categories pass
    /// through untouched. The `"All"` horsepower sentinel returns the
    /// snapshot as-is without recording interest.
    pub fn filter(
        &self,
        snapshot: Snapshot,
        criteria: &FilterCriteria,
        table: &mut PreferenceTable,
    ) -> Snapshot {
        if criteria.is_passthrough() {
            return snapshot;
        }

        let Snapshot {
            manufacturers,
            categories,
            car_models,
        } = snapshot;

        let reference = Snapshot {
            manufacturers,
            categories,
            car_models: Vec::new(),
        };

        let survivors: Vec<_> = car_models
            .into_iter()
            .filter(|model| matches_criteria(model, &reference, criteria))
            .collect();

        for model in &survivors {
            table.increment(&model.name, self.weights.soft);
        }

        tracing::debug!("Filter kept {} models", survivors.len());

        Snapshot {
            car_models: survivors,
            ..reference
        }
    }

    /// Order models by accumulated interest
    pub fn rank(&self, snapshot: &mut Snapshot, table: &mut PreferenceTable) {
        ranker::rank(snapshot, table);
    }

    /// Resolve two models for comparison and record hard interest
    pub fn select(
        &self,
        snapshot: &Snapshot,
        ids: &[String],
        table: &mut PreferenceTable,
    ) -> Result<Comparison, SelectionError> {
        compare::select(snapshot, ids, table, self.weights.hard)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
