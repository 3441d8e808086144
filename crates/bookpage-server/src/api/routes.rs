use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{appointments, businesses, health, public, services};
use crate::api::middleware::auth;
use crate::AppState;

async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": {
                "code": "not_found",
                "message": "The requested endpoint does not exist"
            }
        })),
    )
}

pub fn build(state: Arc<AppState>) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    let owner = Router::new()
        .route("/v1/business", get(businesses::get).post(businesses::create))
        .route("/v1/business/services", get(services::list).post(services::create))
        .route("/v1/business/services/:id/active", put(services::set_active))
        .route("/v1/business/appointments", get(appointments::list))
        .route(
            "/v1/business/appointments/:id/status",
            put(appointments::update_status),
        )
        .route_layer(from_fn(auth::middleware));

    let public = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/public/businesses/:id", get(public::get_business))
        .route("/v1/public/businesses/:id/services", get(public::list_services))
        .route(
            "/v1/public/businesses/:id/appointments",
            post(public::submit_booking),
        );

    owner
        .merge(public)
        .fallback(fallback)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(timeout))
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        )
}
