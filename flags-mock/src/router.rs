use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, TraceLayer};
use tracing::Level;

use crate::api::{FlagsError, StatusResponse};
use crate::store::FlagStore;
use crate::v2_endpoint;

#[derive(Clone)]
pub struct State {
    pub store: Arc<FlagStore>,
}

async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
    })
}

/// Catch-all for unrouted paths and for known paths hit with the wrong
/// method. Both cases answer with the same generic 404 body, so the only
/// status codes this service emits are 200/201/204/400/404.
async fn not_found() -> FlagsError {
    FlagsError::RouteNotFound
}

pub fn router(store: Arc<FlagStore>) -> Router {
    let state = State { store };

    // Permissive CORS. The layer answers any OPTIONS request with 200
    // before routing happens and stamps allow-origin on every response;
    // the two SetResponseHeaderLayer below put allow-methods and
    // allow-headers on every response as well, not just preflights.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/status", get(status).fallback(not_found))
        .route(
            "/api/v2/flags/:project_key",
            post(v2_endpoint::create_flag).fallback(not_found),
        )
        .route(
            "/api/v2/flags/:project_key/:flag_key",
            get(v2_endpoint::get_flag)
                .delete(v2_endpoint::delete_flag)
                .fallback(not_found),
        )
        .route(
            "/api/v2/flags/:project_key/:flag_key/archive",
            post(v2_endpoint::archive_flag).fallback(not_found),
        )
        .fallback(not_found)
        .layer(
            // INFO so the per-request method+path line shows up under the
            // binary's default fmt subscriber
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO)),
        )
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type, Authorization"),
        ))
        .with_state(state)
}
