use axum::{
    extract::State,
    http::{StatusCode, Uri, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};

use crate::backend::{BackendError, fetch_external};
use crate::error::{ApiError, map_status};
use crate::query::SearchQuery;

use super::AppState;
use super::models::{AutocompletePath, MovieIdPath};

pub const ROOT_MESSAGE: &str = "Hi there, server UP!";

pub async fn root_handler() -> &'static str {
    ROOT_MESSAGE
}

/// `GET /g`: relay the configured external page.
pub async fn passthrough_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    let fetched = fetch_external(&state.http, &state.passthrough_url)
        .await
        .map_err(|e| {
            tracing::error!(url = %state.passthrough_url, error = %e, "external service call failed");
            match e {
                BackendError::Body(_) => ApiError::upstream(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error reading response body",
                ),
                _ => ApiError::upstream(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error calling external service",
                ),
            }
        })?;

    let mut response = fetched.body.into_response();
    if let Some(content_type) = fetched.content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}

/// `GET /movies/id/<id>`
///
/// Returns the stored document followed by the current time. The trailing
/// timestamp makes the body invalid JSON; existing consumers depend on it.
pub async fn movie_by_id_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<impl IntoResponse, ApiError> {
    let MovieIdPath { id } = MovieIdPath::parse(uri.path()).inspect_err(|e| {
        tracing::error!(path = uri.path(), "{e}");
    })?;

    let document = state.store.get_document(&id).await.map_err(|e| {
        tracing::error!(movie_id = %id, error = %e, "error getting movie document");
        match e {
            BackendError::Transport(_) => ApiError::upstream(
                map_status(StatusCode::INTERNAL_SERVER_ERROR),
                format!("Error getting movie ID={id}"),
            ),
            BackendError::Status(status) => {
                ApiError::upstream(map_status(status), format!("Error getting document ID={id}"))
            }
            _ => ApiError::upstream(
                map_status(StatusCode::INTERNAL_SERVER_ERROR),
                format!("Error getting document ID={id}"),
            ),
        }
    })?;

    let stamp = (state.clock)().to_string();
    let mut body = Vec::with_capacity(document.len() + stamp.len());
    body.extend_from_slice(&document);
    body.extend_from_slice(stamp.as_bytes());

    Ok(([(CONTENT_TYPE, "application/json")], body))
}

/// `GET /autocomplete/<query>`
///
/// Every backend failure, a 404 included, is reported as 500.
pub async fn autocomplete_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<impl IntoResponse, ApiError> {
    let AutocompletePath { query } = AutocompletePath::parse(uri.path()).inspect_err(|e| {
        tracing::error!(path = uri.path(), "{e}");
    })?;

    let results = state
        .store
        .search(&SearchQuery::simple(query.as_str()))
        .await
        .map_err(|e| {
            tracing::error!(%query, error = %e, "error searching movies");
            let message = match e {
                BackendError::Serialize(_) | BackendError::Request(_) | BackendError::Transport(_) => {
                    format!("Error getting movie by query={query}")
                }
                BackendError::Status(_) | BackendError::Body(_) => {
                    format!("Error getting document query={query}")
                }
            };
            ApiError::upstream(map_status(StatusCode::INTERNAL_SERVER_ERROR), message)
        })?;

    Ok(([(CONTENT_TYPE, "application/json")], results))
}
