//! OneDrive service.

use super::{GraphServiceResult, segment};
use crate::graph::{
    domain::{Collection, DriveFolder, FileItem, UploadName},
    ports::{GraphApi, GraphRequest},
};
use bytes::Bytes;
use std::sync::Arc;
use tracing::info;

const OCTET_STREAM: &str = "application/octet-stream";

/// Lists, downloads, and uploads files in the signed-in user's drive.
pub struct DriveService<G: GraphApi> {
    api: Arc<G>,
}

impl<G: GraphApi> DriveService<G> {
    /// Creates the service.
    #[must_use]
    pub const fn new(api: Arc<G>) -> Self {
        Self { api }
    }

    /// Lists the children of `folder`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty or dot segments, or the Graph
    /// error unchanged.
    pub async fn list_files(&self, folder: &DriveFolder) -> GraphServiceResult<Vec<FileItem>> {
        let path = match folder {
            DriveFolder::Root => "/me/drive/root/children".to_owned(),
            DriveFolder::Path(segments) => {
                let encoded = segments
                    .iter()
                    .map(|s| segment(s))
                    .collect::<Result<Vec<_>, _>>()?;
                format!("/me/drive/root:/{}:/children", encoded.join("/"))
            }
        };
        let collection: Collection<FileItem> =
            self.api.send(GraphRequest::get(path)).await?.into_json()?;
        Ok(collection.value)
    }

    /// Downloads the content of an item.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty or dot-segment id, or the
    /// Graph error unchanged.
    pub async fn download_file(&self, item_id: &str) -> GraphServiceResult<Bytes> {
        let path = format!("/me/drive/items/{}/content", segment(item_id)?);
        Ok(self.api.send(GraphRequest::get(path)).await?.into_bytes())
    }

    /// Uploads `content` to the drive root under `name`.
    ///
    /// # Errors
    ///
    /// Returns the Graph error unchanged.
    pub async fn upload_file(
        &self,
        name: &UploadName,
        content: Bytes,
    ) -> GraphServiceResult<FileItem> {
        let size = content.len();
        let path = format!("/me/drive/root:/{}:/content", segment(name.as_str())?);
        let payload = self
            .api
            .send(GraphRequest::put_bytes(path, OCTET_STREAM, content))
            .await?;
        info!(name = name.as_str(), size, "file uploaded");
        Ok(payload.into_json()?)
    }
}
