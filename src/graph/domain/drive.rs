//! OneDrive items, folder addressing, and upload names.

use super::GraphDomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Drive item projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileItem {
    /// Item id.
    pub id: String,
    /// File or folder name.
    pub name: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
    /// Browser URL.
    #[serde(default)]
    pub web_url: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_date_time: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    #[serde(default)]
    pub last_modified_date_time: Option<DateTime<Utc>>,
    /// File facet, present for files.
    #[serde(default)]
    pub file: Option<Value>,
    /// Folder facet, present for folders.
    #[serde(default)]
    pub folder: Option<Value>,
}

/// Folder whose children are listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DriveFolder {
    /// The drive root.
    #[default]
    Root,
    /// A folder addressed by its path below the root.
    Path(Vec<String>),
}

impl DriveFolder {
    /// Parses a folder query value; empty values and `root` mean the root.
    ///
    /// # Errors
    ///
    /// Returns [`GraphDomainError::InvalidPathSegment`] when a segment is `.`
    /// or `..`.
    pub fn parse(value: &str) -> Result<Self, GraphDomainError> {
        let segments: Vec<String> = value
            .split('/')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned)
            .collect();
        if let Some(dot) = segments.iter().find(|segment| is_dot_segment(segment)) {
            return Err(GraphDomainError::InvalidPathSegment(dot.clone()));
        }
        Ok(match segments.as_slice() {
            [] => Self::Root,
            [only] if only == "root" => Self::Root,
            _ => Self::Path(segments),
        })
    }
}

/// File name used for a simple upload to the drive root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadName(String);

impl UploadName {
    /// Validates a file name.
    ///
    /// # Errors
    ///
    /// Returns [`GraphDomainError::InvalidFileName`] for empty names and
    /// names containing `/` or `\`.
    pub fn new(value: impl Into<String>) -> Result<Self, GraphDomainError> {
        let name = value.into().trim().to_owned();
        if name.is_empty() || name.contains(['/', '\\']) || is_dot_segment(&name) {
            return Err(GraphDomainError::InvalidFileName(name));
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns whether `segment` would be collapsed by URL path normalisation.
#[must_use]
pub fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}
