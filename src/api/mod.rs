use axum::{Router, http::Request, routing::get};
use reqwest::Client;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::DocumentStore;
use crate::clock::Clock;
use crate::config::Config;

pub mod handlers;
pub mod models;

/// Immutable state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: DocumentStore,
    pub http: Client,
    pub passthrough_url: Arc<str>,
    pub clock: Clock,
}

impl AppState {
    pub fn new(config: &Config, http: Client, clock: Clock) -> Self {
        Self {
            store: DocumentStore::new(http.clone(), &config.db_addr, &config.movie_index),
            http,
            passthrough_url: config.passthrough_url.as_str().into(),
            clock,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Wildcards never match an empty tail, so the bare prefixes are routed too.
    // Without the trailing slash they fall short on segments and get a 400.
    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/g", get(handlers::passthrough_handler))
        .route("/movies/id", get(handlers::movie_by_id_handler))
        .route("/movies/id/", get(handlers::movie_by_id_handler))
        .route("/movies/id/*rest", get(handlers::movie_by_id_handler))
        .route("/autocomplete", get(handlers::autocomplete_handler))
        .route("/autocomplete/", get(handlers::autocomplete_handler))
        .route("/autocomplete/*rest", get(handlers::autocomplete_handler))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
}
