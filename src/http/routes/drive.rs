//! OneDrive endpoints.

use crate::graph::{
    domain::{DriveFolder, FileItem, UploadName},
    services::DriveService,
};
use crate::http::{error::ApiError, session::CurrentSession, state::AppState};
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

/// Multipart field carrying the uploaded file.
const UPLOAD_FIELD: &str = "file";

/// Query of the file listing.
#[derive(Debug, Default, Deserialize)]
pub struct FolderQuery {
    /// Folder path below the root; `root` or absent for the root.
    pub folder: Option<String>,
}

/// `GET /api/v1/drive/files`.
///
/// # Errors
///
/// Returns 401 without a session, 400 for a folder path with dot segments,
/// or the Graph error.
pub async fn list(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    query: Result<Query<FolderQuery>, QueryRejection>,
) -> Result<Json<Vec<FileItem>>, ApiError> {
    let Query(query) = query?;
    let folder = query
        .folder
        .as_deref()
        .map_or(Ok(DriveFolder::Root), DriveFolder::parse)
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;
    let files = DriveService::new(state.graph_for(&session))
        .list_files(&folder)
        .await?;
    Ok(Json(files))
}

/// `GET /api/v1/drive/files/{item_id}/download`: raw file content.
///
/// # Errors
///
/// Returns 401 without a session, or the Graph error.
pub async fn download(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(item_id): Path<String>,
) -> Result<Response, ApiError> {
    let content = DriveService::new(state.graph_for(&session))
        .download_file(&item_id)
        .await?;
    Ok(([(CONTENT_TYPE, "application/octet-stream")], content).into_response())
}

/// `POST /api/v1/drive/files/upload`: uploads the multipart `file` field to
/// the drive root.
///
/// # Errors
///
/// Returns 401 without a session, 400 when the field or its file name is
/// missing, or the Graph error.
pub async fn upload(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    mut multipart: Multipart,
) -> Result<Json<FileItem>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let name = UploadName::new(field.file_name().unwrap_or_default())
            .map_err(|err| ApiError::BadRequest(err.to_string()))?;
        let content = field.bytes().await?;
        let item = DriveService::new(state.graph_for(&session))
            .upload_file(&name, content)
            .await?;
        return Ok(Json(item));
    }
    Err(ApiError::BadRequest(format!(
        "multipart field '{UPLOAD_FIELD}' is required"
    )))
}
