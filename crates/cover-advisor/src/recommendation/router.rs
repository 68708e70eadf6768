use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::error;

use super::catalog::ProductCatalog;
use super::domain::ProductId;
use super::service::{RecommendationError, RecommendationService};
use super::validation::RecommendationRequest;

const INTERNAL_ERROR_MESSAGE: &str = "Failed to get recommendations";

/// Router builder exposing the recommendation and catalog browsing endpoints.
pub fn recommendation_router<C>(service: Arc<RecommendationService<C>>) -> Router
where
    C: ProductCatalog + 'static,
{
    Router::new()
        .route("/api/v1/recommendation", post(recommend_handler::<C>))
        .route("/api/v1/products", get(list_products_handler::<C>))
        .route("/api/v1/products/:product_id", get(product_handler::<C>))
        .with_state(service)
}

pub(crate) async fn recommend_handler<C>(
    State(service): State<Arc<RecommendationService<C>>>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Response
where
    C: ProductCatalog + 'static,
{
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            let payload = json!({
                "error": format!("invalid request body: {}", rejection.body_text()),
            });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match service.recommend(&request).await {
        Ok(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_products_handler<C>(
    State(service): State<Arc<RecommendationService<C>>>,
) -> Response
where
    C: ProductCatalog + 'static,
{
    match service.products().await {
        Ok(products) => (StatusCode::OK, Json(json!({ "products": products }))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn product_handler<C>(
    State(service): State<Arc<RecommendationService<C>>>,
    Path(product_id): Path<String>,
) -> Response
where
    C: ProductCatalog + 'static,
{
    match service.product(&ProductId(product_id)).await {
        Ok(product) => (StatusCode::OK, Json(json!({ "product": product }))).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: RecommendationError) -> Response {
    match err {
        RecommendationError::Validation(error) => {
            let payload = json!({
                "error": error.to_string(),
                "fields": error.fields,
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        RecommendationError::NoEligibleProducts => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        RecommendationError::ProductNotFound(_) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        RecommendationError::Catalog(source) => {
            error!(error = %source, "catalog query failed");
            let payload = json!({ "error": INTERNAL_ERROR_MESSAGE });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
