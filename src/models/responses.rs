use serde::{Deserialize, Serialize};
use crate::models::domain::{CarModel, Category, Manufacturer, Snapshot};

/// Catalog view handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub manufacturers: Vec<Manufacturer>,
    pub categories: Vec<Category>,
    #[serde(rename = "carModels")]
    pub car_models: Vec<CarModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "isPopup")]
    pub is_popup: bool,
    #[serde(rename = "compareModels")]
    pub compare_models: Vec<CarModel>,
}

impl From<Snapshot> for CatalogResponse {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            manufacturers: snapshot.manufacturers,
            categories: snapshot.categories,
            car_models: snapshot.car_models,
            message: None,
            is_popup: false,
            compare_models: Vec::new(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
