//! GitHub API client
//!
//! The [`GithubApi`] trait is the seam between the org client and the
//! transport: production code uses the reqwest-backed [`GithubClient`],
//! tests substitute [`mock::MockGithubClient`].

use async_trait::async_trait;

use crate::error::Result;

pub mod github;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod nested;
pub mod org;
pub mod parallel;

pub use github::{GithubClient, get_json};
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockGithubClient;
pub use models::{License, Org, Repo};
pub use nested::access_nested;
pub use org::GithubOrgClient;
pub use parallel::fetch_ordered;

/// Minimal GitHub API surface used by the org client
#[async_trait]
pub trait GithubApi: Send + Sync {
    /// Fetch the organization record for a login
    async fn get_org(&self, login: &str) -> Result<Org>;

    /// Fetch the repository listing at `repos_url`
    async fn list_repos(&self, repos_url: &str) -> Result<Vec<Repo>>;
}
