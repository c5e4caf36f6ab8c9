use axum::body::Bytes;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use thiserror::Error;

use crate::query::SearchQuery;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to serialize search query: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to build request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to reach upstream: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream responded with {0}")]
    Status(StatusCode),

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// HTTP client for the document store holding the movie index.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    client: Client,
    base_url: String,
    index: String,
}

impl DocumentStore {
    pub fn new(client: Client, base_url: impl Into<String>, index: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            index: index.into(),
        }
    }

    /// The id is percent-encoded so `#` and `?` stay inside the path segment.
    pub fn document_url(&self, id: &str) -> String {
        format!(
            "{}/{}/_doc/{}?pretty",
            self.base_url,
            self.index,
            urlencoding::encode(id)
        )
    }

    pub fn search_url(&self) -> String {
        format!("{}/{}/_search/?pretty", self.base_url, self.index)
    }

    /// Fetch a single document by id. Only a 200 counts as success; the body
    /// is returned untouched.
    pub async fn get_document(&self, id: &str) -> Result<Bytes, BackendError> {
        let url = self.document_url(id);
        tracing::debug!(%url, "fetching document");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(BackendError::Transport)?;

        read_ok_body(response).await
    }

    /// Run a search against the movie index and return the raw result body.
    pub async fn search(&self, query: &SearchQuery) -> Result<Bytes, BackendError> {
        let body = serde_json::to_vec(query)?;

        let request = self
            .client
            .get(self.search_url())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .build()
            .map_err(BackendError::Request)?;

        tracing::debug!(url = %request.url(), query = query.text(), "searching documents");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(BackendError::Transport)?;

        read_ok_body(response).await
    }
}

/// Body and content type of a plain GET against an external service.
#[derive(Debug)]
pub struct ExternalResponse {
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

/// GET `url` and hand back whatever came back, regardless of status.
pub async fn fetch_external(client: &Client, url: &str) -> Result<ExternalResponse, BackendError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(BackendError::Transport)?;

    let content_type = response.headers().get(CONTENT_TYPE).cloned();
    let body = response.bytes().await.map_err(BackendError::Body)?;

    Ok(ExternalResponse { content_type, body })
}

async fn read_ok_body(response: Response) -> Result<Bytes, BackendError> {
    let status = response.status();
    if status != StatusCode::OK {
        return Err(BackendError::Status(status));
    }
    response.bytes().await.map_err(BackendError::Body)
}
