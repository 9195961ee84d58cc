//! Signed-in user profile.

use serde::{Deserialize, Serialize};

/// Profile returned by `GET /me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Directory object id.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Primary SMTP address.
    #[serde(default)]
    pub mail: Option<String>,
    /// User principal name.
    #[serde(default)]
    pub user_principal_name: Option<String>,
    /// Job title.
    #[serde(default)]
    pub job_title: Option<String>,
    /// Mobile phone number.
    #[serde(default)]
    pub mobile_phone: Option<String>,
    /// Office location.
    #[serde(default)]
    pub office_location: Option<String>,
}
