use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use car_catalog::config::{LoggingSettings, Settings};
use car_catalog::core::Catalog;
use car_catalog::models::InterestWeights;
use car_catalog::routes::{self, catalog::AppState};
use car_catalog::services::{Aggregator, PreferenceStore, SourceEndpoints, SourceFetcher};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST);
        HttpResponse::build(status).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(
    err: error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

/// Install the global subscriber; `LOG_LEVEL` and `LOG_FORMAT` override the
/// `[logging]` section
fn init_logging(logging: &LoggingSettings) {
    let logging = logging.clone().with_env_overrides();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&logging.level))
        .with_target(false)
        .with_level(true);

    if logging.is_pretty() {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn startup_error<E: std::fmt::Display>(context: &str, e: E) -> std::io::Error {
    error!("{}: {}", context, e);
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", context, e))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Logging is configured from the settings, so a bad configuration is
    // reported through a default subscriber
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            return Err(startup_error("Failed to load configuration", e));
        }
    };

    init_logging(&settings.logging);

    info!("Starting car catalog service...");
    info!("Configuration loaded successfully");

    // The preference record is required; there is no degraded mode without it
    let pref_path = &settings.preferences.path;
    if settings.preferences.clear_on_start {
        PreferenceStore::clear(pref_path)
            .map_err(|e| startup_error("Failed to clear preference record", e))?;
    }

    let preferences = PreferenceStore::load(pref_path)
        .map_err(|e| startup_error("Failed to load preference record", e))?;

    let fetcher = SourceFetcher::new(settings.sources.timeout());
    let endpoints = SourceEndpoints {
        manufacturers: settings.sources.manufacturers_url.clone(),
        models: settings.sources.models_url.clone(),
        categories: settings.sources.categories_url.clone(),
    };

    info!(
        "Catalog sources: {}, {}, {} (timeout: {}s)",
        endpoints.manufacturers,
        endpoints.models,
        endpoints.categories,
        settings.sources.timeout_secs
    );

    let aggregator = Arc::new(Aggregator::new(fetcher, endpoints));

    let weights = InterestWeights {
        soft: settings.interest.soft,
        hard: settings.interest.hard,
    };

    let catalog = Catalog::new(weights);

    info!("Catalog initialized with interest weights: {:?}", weights);

    // Build application state
    let app_state = AppState {
        aggregator,
        preferences,
        catalog,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Server is running on http://{}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
