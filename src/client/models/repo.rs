//! Repository models

use serde::{Deserialize, Serialize};

/// Repository record from an organization's repository listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repo {
    /// Repository name
    pub name: String,

    /// Full name including the owning organization (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,

    /// Web URL of the repository (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,

    /// Repository description (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// License information, absent for unlicensed repositories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

/// Software license attached to a repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct License {
    /// License key, e.g. "mit" or "apache-2.0"
    pub key: String,

    /// Human-readable license name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// SPDX identifier (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spdx_id: Option<String>,
}
