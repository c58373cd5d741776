use serde::{Deserialize, Serialize};
use validator::Validate;

/// Filter form submitted to the catalog
///
/// Every field is optional; an empty value places no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub drivetrain: String,
    #[serde(default)]
    pub transmission: String,
    #[serde(default)]
    pub horsepower: String,
}

/// Comparison form: the model ids ticked by the user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompareRequest {
    #[validate(length(max = 64))]
    #[serde(alias = "option")]
    pub options: Vec<String>,
}
