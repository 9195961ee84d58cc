//! Port contracts for Microsoft Graph access.

mod api;

pub use api::{
    GraphApi, GraphApiError, GraphApiResult, GraphBody, GraphMethod, GraphPayload, GraphRequest,
};
