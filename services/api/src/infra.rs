use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use cover_advisor::config::CorsConfig;
use cover_advisor::error::AppError;
use cover_advisor::recommendation::{load_products, InMemoryCatalog};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn load_catalog(path: &Path) -> Result<InMemoryCatalog, AppError> {
    let products = load_products(path)?;
    let catalog = InMemoryCatalog::new(products);
    if catalog.is_empty() {
        warn!(path = %path.display(), "product catalog is empty; every request will be rejected");
    }
    info!(path = %path.display(), products = catalog.len(), "product catalog loaded");
    Ok(catalog)
}

/// Build the CORS layer, skipping origins that are not valid header values.
pub(crate) fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
