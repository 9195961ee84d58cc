//! Generic Graph request port.

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Result type for Graph API calls.
pub type GraphApiResult<T> = Result<T, GraphApiError>;

/// HTTP verb of a Graph request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl fmt::Display for GraphMethod {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// Request body.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphBody {
    /// No body.
    Empty,
    /// JSON document.
    Json(Value),
    /// Raw bytes with an explicit content type.
    Bytes {
        /// `Content-Type` header value.
        content_type: String,
        /// Body bytes.
        data: Bytes,
    },
}

/// One request against the Graph base endpoint.
///
/// `path` is relative to the base endpoint, starts with `/`, and must already
/// be percent-encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphRequest {
    /// Verb.
    pub method: GraphMethod,
    /// Encoded path below the base endpoint.
    pub path: String,
    /// Query parameters, encoded by the adapter.
    pub query: Vec<(String, String)>,
    /// Body.
    pub body: GraphBody,
}

impl GraphRequest {
    fn new(method: GraphMethod, path: impl Into<String>, body: GraphBody) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body,
        }
    }

    /// Builds a `GET` request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(GraphMethod::Get, path, GraphBody::Empty)
    }

    /// Builds a `POST` request with a JSON body.
    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(GraphMethod::Post, path, GraphBody::Json(body))
    }

    /// Builds a `PUT` request with a JSON body.
    #[must_use]
    pub fn put_json(path: impl Into<String>, body: Value) -> Self {
        Self::new(GraphMethod::Put, path, GraphBody::Json(body))
    }

    /// Builds a `PUT` request with a raw body.
    #[must_use]
    pub fn put_bytes(path: impl Into<String>, content_type: impl Into<String>, data: Bytes) -> Self {
        Self::new(
            GraphMethod::Put,
            path,
            GraphBody::Bytes {
                content_type: content_type.into(),
                data,
            },
        )
    }

    /// Builds a `DELETE` request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(GraphMethod::Delete, path, GraphBody::Empty)
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Successful Graph response payload.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphPayload {
    /// `204 No Content`.
    Empty,
    /// JSON response.
    Json(Value),
    /// Any non-JSON response.
    Bytes(Bytes),
}

impl GraphPayload {
    /// Deserializes a JSON payload into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphApiError`] with status 502 when the payload is not JSON
    /// or does not match `T`.
    pub fn into_json<T: DeserializeOwned>(self) -> GraphApiResult<T> {
        match self {
            Self::Json(value) => serde_json::from_value(value).map_err(GraphApiError::decode),
            Self::Empty => Err(GraphApiError::unexpected("empty response")),
            Self::Bytes(_) => Err(GraphApiError::unexpected("non-JSON response")),
        }
    }

    /// Returns the raw bytes of the payload.
    ///
    /// JSON payloads are re-serialized; empty payloads yield no bytes.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        match self {
            Self::Empty => Bytes::new(),
            Self::Json(value) => Bytes::from(value.to_string()),
            Self::Bytes(bytes) => bytes,
        }
    }
}

/// Upstream-protocol error from Graph.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Graph API Error {status}: {message}")]
pub struct GraphApiError {
    /// HTTP status; 500 for transport failures.
    pub status: u16,
    /// Error summary.
    pub message: String,
    /// Parsed error body, or `{"raw": text}` when unparseable.
    pub details: Option<Value>,
}

impl GraphApiError {
    /// Status used for responses that could not be interpreted.
    pub const BAD_GATEWAY: u16 = 502;
    /// Status used for transport failures.
    pub const TRANSPORT: u16 = 500;

    /// Creates an error.
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            status,
            message: message.into(),
            details,
        }
    }

    /// Maps a transport failure.
    #[must_use]
    pub fn transport(err: impl fmt::Display) -> Self {
        Self::new(Self::TRANSPORT, format!("Network error: {err}"), None)
    }

    /// Maps a payload that does not match the expected shape.
    #[must_use]
    pub fn decode(err: impl fmt::Display) -> Self {
        Self::unexpected(&err.to_string())
    }

    fn unexpected(reason: &str) -> Self {
        Self::new(
            Self::BAD_GATEWAY,
            format!("Unexpected Graph response: {reason}"),
            None,
        )
    }
}

/// Authenticated Graph client bound to one user's token.
#[async_trait]
pub trait GraphApi: Send + Sync {
    /// Sends `request` and returns the response payload.
    async fn send(&self, request: GraphRequest) -> GraphApiResult<GraphPayload>;
}
