//! HTTP REST API routes

mod creature_routes;
pub mod error;
mod zone_routes;

#[cfg(test)]
mod api_tests;

use axum::{
    extract::Request,
    http::HeaderName,
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::infrastructure::state::AppState;
use error::{ApiError, RequestContext};

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Zone routes
        .route(
            "/api/zones",
            get(zone_routes::list_zones).post(zone_routes::create_zone),
        )
        .route("/api/zones/summary", get(zone_routes::list_zones))
        .route(
            "/api/zones/{id}",
            get(zone_routes::get_zone)
                .put(zone_routes::update_zone)
                .delete(zone_routes::delete_zone),
        )
        // Creature routes
        .route(
            "/api/creatures",
            get(creature_routes::list_creatures).post(creature_routes::create_creature),
        )
        .route(
            "/api/creatures/{id}",
            get(creature_routes::get_creature)
                .put(creature_routes::update_creature)
                .delete(creature_routes::delete_creature),
        )
}

/// Build the application with middleware and state
///
/// The request id is set (or kept from the caller) before any handler runs and
/// echoed on every response, so the error envelope and the logs agree on it.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(create_routes())
        .fallback(route_not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            MakeRequestUuid,
        ))
        .layer(middleware::map_request(discard_blank_request_id))
        .with_state(state)
}

/// Remove a blank or non-text `x-request-id` so a fresh one is generated
async fn discard_blank_request_id(mut request: Request) -> Request {
    let unusable = request
        .headers()
        .get("x-request-id")
        .is_some_and(|value| value.to_str().map_or(true, |id| id.trim().is_empty()));
    if unusable {
        request.headers_mut().remove("x-request-id");
    }
    request
}

async fn health_check() -> &'static str {
    "OK"
}

async fn route_not_found(ctx: RequestContext) -> ApiError {
    ctx.route_not_found()
}
