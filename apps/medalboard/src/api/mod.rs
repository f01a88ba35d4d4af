//! # HTTP API
//!
//! The axum router serving the dashboard.
//!
//! ```text
//! GET /                          summary view (stat tiles + medal pie)
//! GET /country/{id}              detail view, or 303 -> /not-found
//! GET /select/{index}            pie slice click, 303 -> /country/{id} | /not-found
//! GET /not-found                 404 page
//! GET /api/stats                 aggregate statistics
//! GET /api/countries             countries with medal totals, chart order
//! GET /api/countries/{id}        one country's detail figures
//! GET /api/charts/medals         pie chart configuration
//! GET /api/countries/{id}/chart  line chart configuration
//! GET /assets/mock/olympic.json  the raw dataset
//! GET /health                    liveness
//! ```
//!
//! Every other path redirects to `/not-found`.

mod handlers;
pub mod render;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::source::DataSource;
use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use medalboard_core::ChartRegistry;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared, immutable router state.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<DataSource>,
    pub charts: Arc<ChartRegistry>,
}

impl AppState {
    /// The chart registry is built once by the caller and shared by every
    /// request.
    pub fn new(source: DataSource, charts: ChartRegistry) -> Self {
        Self {
            source: Arc::new(source),
            charts: Arc::new(charts),
        }
    }
}

/// Build the router with every dashboard route.
pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::home))
        .route("/country/{id}", get(handlers::detail))
        .route("/select/{index}", get(handlers::select))
        .route("/not-found", get(handlers::not_found))
        .route("/api/stats", get(handlers::api_stats))
        .route("/api/countries", get(handlers::api_countries))
        .route("/api/countries/{id}", get(handlers::api_country))
        .route("/api/charts/medals", get(handlers::api_medals_chart))
        .route("/api/countries/{id}/chart", get(handlers::api_country_chart))
        .route("/assets/mock/olympic.json", get(handlers::dataset_asset))
        .route("/health", get(handlers::health))
        .fallback(handlers::unknown_route)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    if !origins.is_empty() {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET]),
        );
    }

    router
}

/// Run the server until ctrl-c.
pub async fn serve(config: ServerConfig, charts: ChartRegistry) -> Result<(), AppError> {
    let state = AppState::new(config.data.clone(), charts);
    let app = build_router(state, &config.cors_origins);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, data = %config.data, "medalboard listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    info!("medalboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
