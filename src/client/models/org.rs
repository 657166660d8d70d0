//! Organization models

use serde::{Deserialize, Serialize};

/// Organization record as returned by `GET /orgs/{login}`
///
/// Only the fields the CLI works with are typed; everything else the API
/// returns is preserved in `extra` so raw-field lookup sees the whole record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Org {
    /// Organization login (URL slug)
    pub login: String,

    /// Numeric organization ID
    pub id: u64,

    /// URL of the repository listing for this organization
    pub repos_url: String,

    /// Display name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Organization description (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Number of public repositories (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_repos: Option<u64>,

    /// Remaining fields from the API response, kept verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
