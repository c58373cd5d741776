use crate::models::{CarModel, Comparison, Snapshot};
use crate::services::PreferenceTable;
use thiserror::Error;

/// Message shown to the user when the comparison form is filled wrongly
pub const SELECT_TWO_MESSAGE: &str = "You have to select 2 options";

/// Errors raised by user input to the comparison form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Expected 2 models to compare, got {0}")]
    WrongCount(usize),

    #[error("Cannot compare model {0} with itself")]
    Duplicate(String),
}

impl SelectionError {
    /// Text suitable for display next to the form
    pub fn user_message(&self) -> &'static str {
        SELECT_TWO_MESSAGE
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Resolve an id to its model, or the zero-value record when unmatched
fn resolve(snapshot: &Snapshot, raw: &str, id: Option<i64>) -> CarModel {
    id.and_then(|id| snapshot.model(id))
        .cloned()
        .unwrap_or_else(|| {
            tracing::debug!("No model with id {:?} in snapshot", raw);
            CarModel::default()
        })
}

/// Resolve exactly two distinct ids and record hard interest in both
///
/// Ids are distinct by numeric value, so `"1"` and `"01"` name the same
/// model. The table is untouched on error. An id with no match yields a
/// zero-value [`CarModel`], which receives no weight.
pub fn select(
    snapshot: &Snapshot,
    ids: &[String],
    table: &mut PreferenceTable,
    weight: f64,
) -> Result<Comparison, SelectionError> {
    let [first, second] = ids else {
        return Err(SelectionError::WrongCount(ids.len()));
    };

    let (left_id, right_id) = (parse_id(first), parse_id(second));
    let same = match (left_id, right_id) {
        (Some(left), Some(right)) => left == right,
        _ => first.trim() == second.trim(),
    };
    if same {
        return Err(SelectionError::Duplicate(first.clone()));
    }

    let comparison = Comparison {
        left: resolve(snapshot, first, left_id),
        right: resolve(snapshot, second, right_id),
    };

    for model in [&comparison.left, &comparison.right] {
        if !model.is_placeholder() {
            table.increment(&model.name, weight);
        }
    }

    Ok(comparison)
}
