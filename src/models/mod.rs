// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    compare_horsepower, CarModel, Category, Comparison, InterestWeights, Manufacturer,
    ManufacturerDetail, Snapshot, Specifications, UNKNOWN_CATEGORY, UNKNOWN_MANUFACTURER,
};
pub use requests::{CompareRequest, FilterRequest};
pub use responses::{CatalogResponse, ErrorResponse, HealthResponse};
