use crate::core::{Catalog, FilterCriteria};
use crate::models::{
    CatalogResponse, CompareRequest, ErrorResponse, FilterRequest, HealthResponse, Snapshot,
};
use crate::services::{Aggregator, PreferenceStore, PreferenceTable};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
    pub preferences: PreferenceStore,
    pub catalog: Catalog,
}

/// Configure all catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/catalog", web::get().to(list_catalog))
        .route("/catalog/filter", web::get().to(filter_catalog))
        .route("/catalog/compare", web::post().to(compare_models));
}

fn internal_error(error: &str, message: String) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 500,
    })
}

/// Persist the table, then rank the snapshot with it
///
/// A failed persist is logged and the ranked response still goes out.
async fn persist_and_rank(
    state: &AppState,
    table: &mut PreferenceTable,
    snapshot: &mut Snapshot,
) {
    if let Err(e) = state.preferences.persist(table).await {
        tracing::error!(
            "Failed to persist preferences to {}: {}",
            state.preferences.path().display(),
            e
        );
    }

    state.catalog.rank(snapshot, table);
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Full catalog, ranked by accumulated interest
///
/// GET /api/v1/catalog
async fn list_catalog(state: web::Data<AppState>) -> impl Responder {
    let mut snapshot = match state.aggregator.fetch_snapshot().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!("Failed to aggregate catalog: {}", e);
            return internal_error("Failed to fetch catalog", e.to_string());
        }
    };

    let mut table = state.preferences.lock().await;
    persist_and_rank(&state, &mut table, &mut snapshot).await;

    HttpResponse::Ok().json(CatalogResponse::from(snapshot))
}

/// Filtered catalog
///
/// GET /api/v1/catalog/filter?manufacturer=&category=&drivetrain=&transmission=&horsepower=
///
/// `horsepower` is either `min-max` or `All`; `All` skips filtering.
async fn filter_catalog(
    state: web::Data<AppState>,
    query: web::Query<FilterRequest>,
) -> impl Responder {
    let snapshot = match state.aggregator.fetch_snapshot().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!("Failed to aggregate catalog: {}", e);
            return internal_error("Failed to fetch catalog", e.to_string());
        }
    };

    let criteria = match FilterCriteria::from_request(&query) {
        Ok(criteria) => criteria,
        Err(e) => {
            tracing::error!("Rejected filter request: {}", e);
            return internal_error("Failed to filter catalog", e.to_string());
        }
    };

    tracing::info!("Filtering catalog: {:?}", criteria);

    let mut table = state.preferences.lock().await;
    let mut filtered = state.catalog.filter(snapshot, &criteria, &mut table);
    persist_and_rank(&state, &mut table, &mut filtered).await;

    HttpResponse::Ok().json(CatalogResponse::from(filtered))
}

/// Compare two models
///
/// POST /api/v1/catalog/compare
///
/// Request body:
/// ```json
/// {
///   "options": ["1", "4"]
/// }
/// ```
///
/// Anything other than two distinct ids yields a message instead of a
/// comparison.
async fn compare_models(
    state: web::Data<AppState>,
    req: web::Json<CompareRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let mut snapshot = match state.aggregator.fetch_snapshot().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!("Failed to aggregate catalog: {}", e);
            return internal_error("Failed to fetch catalog", e.to_string());
        }
    };

    let mut table = state.preferences.lock().await;
    let selection = state.catalog.select(&snapshot, &req.options, &mut table);
    persist_and_rank(&state, &mut table, &mut snapshot).await;
    drop(table);

    let mut response = CatalogResponse::from(snapshot);
    match selection {
        Ok(comparison) => {
            tracing::info!("Comparing {} with {}", comparison.left.name, comparison.right.name);
            response.is_popup = true;
            response.compare_models = comparison.into_vec();
        }
        Err(e) => {
            tracing::info!("Comparison rejected: {}", e);
            response.message = Some(e.user_message().to_string());
        }
    }

    HttpResponse::Ok().json(response)
}
