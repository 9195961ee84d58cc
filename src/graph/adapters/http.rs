//! reqwest-backed Graph client.

use crate::graph::ports::{
    GraphApi, GraphApiError, GraphApiResult, GraphBody, GraphMethod, GraphPayload, GraphRequest,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde_json::{Value, json};
use std::fmt;
use tracing::{debug, error};
use url::Url;

/// Builds per-user Graph clients sharing one connection pool.
#[derive(Debug, Clone)]
pub struct GraphClientFactory {
    http: reqwest::Client,
    base_url: String,
}

impl GraphClientFactory {
    /// Creates a factory for the Graph endpoint at `base_url`.
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: &Url) -> Self {
        Self {
            http,
            base_url: base_url.as_str().trim_end_matches('/').to_owned(),
        }
    }

    /// Returns a client authenticating with `bearer`.
    #[must_use]
    pub fn for_bearer(&self, bearer: &str) -> HttpGraphClient {
        HttpGraphClient {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            bearer: bearer.to_owned(),
        }
    }
}

/// Graph client authenticating every request with one bearer token.
#[derive(Clone)]
pub struct HttpGraphClient {
    http: reqwest::Client,
    base_url: String,
    bearer: String,
}

impl fmt::Debug for HttpGraphClient {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("HttpGraphClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

const fn reqwest_method(method: GraphMethod) -> reqwest::Method {
    match method {
        GraphMethod::Get => reqwest::Method::GET,
        GraphMethod::Post => reqwest::Method::POST,
        GraphMethod::Put => reqwest::Method::PUT,
        GraphMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl GraphApi for HttpGraphClient {
    async fn send(&self, request: GraphRequest) -> GraphApiResult<GraphPayload> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!(method = %request.method, url = %url, "Graph API request");

        let builder = self
            .http
            .request(reqwest_method(request.method), &url)
            .bearer_auth(&self.bearer)
            .query(&request.query);
        let builder = match request.body {
            GraphBody::Empty => builder,
            GraphBody::Json(body) => builder.json(&body),
            GraphBody::Bytes { content_type, data } => {
                builder.header(CONTENT_TYPE, content_type).body(data)
            }
        };

        let response = builder.send().await.map_err(|err| {
            error!(url = %url, error = %err, "Graph network error");
            GraphApiError::transport(err)
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %text, "Graph API error");
            let details = serde_json::from_str::<Value>(&text)
                .unwrap_or_else(|_| json!({"raw": text}));
            return Err(GraphApiError::new(
                status.as_u16(),
                format!("Graph API request failed: {status}"),
                Some(details),
            ));
        }
        if status == StatusCode::NO_CONTENT {
            return Ok(GraphPayload::Empty);
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("application/json"));
        let body = response.bytes().await.map_err(GraphApiError::transport)?;
        if is_json {
            serde_json::from_slice(&body)
                .map(GraphPayload::Json)
                .map_err(GraphApiError::decode)
        } else {
            Ok(GraphPayload::Bytes(body))
        }
    }
}
