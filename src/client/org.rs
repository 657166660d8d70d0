//! Organization client with per-instance memoization
//!
//! [`GithubOrgClient`] wraps a [`GithubApi`] implementation for one
//! organization. The organization record and the repository payload are each
//! fetched at most once per client instance; repeated reads return the
//! cached value. Distinct instances have independent caches.

use tokio::sync::OnceCell;

use super::{GithubApi, Org, Repo};
use crate::error::Result;

/// Client for a single GitHub organization
pub struct GithubOrgClient<C: GithubApi> {
    api: C,
    login: String,
    org: OnceCell<Org>,
    repos: OnceCell<Vec<Repo>>,
}

impl<C: GithubApi> GithubOrgClient<C> {
    /// Create a client for the organization with the given login
    pub fn new(api: C, login: impl Into<String>) -> Self {
        Self {
            api,
            login: login.into(),
            org: OnceCell::new(),
            repos: OnceCell::new(),
        }
    }

    /// The organization login this client was constructed with
    pub fn login(&self) -> &str {
        &self.login
    }

    /// The underlying API client
    pub fn api(&self) -> &C {
        &self.api
    }

    /// The organization record, fetched on first read and cached after.
    pub async fn org(&self) -> Result<&Org> {
        self.org
            .get_or_try_init(|| self.api.get_org(&self.login))
            .await
    }

    /// The organization's repository listing URL, via the cached [`Self::org`] record.
    pub async fn repos_url(&self) -> Result<&str> {
        Ok(self.org().await?.repos_url.as_str())
    }

    /// The repository records, fetched once from [`Self::repos_url`] and cached.
    async fn repos(&self) -> Result<&[Repo]> {
        let records = self
            .repos
            .get_or_try_init(|| async {
                let url = self.repos_url().await?.to_string();
                self.api.list_repos(&url).await
            })
            .await?;
        Ok(records.as_slice())
    }

    /// Names of the organization's public repositories, in API order.
    ///
    /// With a license key given, only repositories whose `license.key`
    /// matches exactly are returned; repositories without a license are
    /// excluded from filtered results.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        let repos = self.repos().await?;
        Ok(repos
            .iter()
            .filter(|repo| license.is_none_or(|key| Self::has_license(repo, key)))
            .map(|repo| repo.name.clone())
            .collect())
    }

    /// Whether `repo` carries a license whose key equals `license_key`.
    ///
    /// A missing license field is "no match", never an error.
    pub fn has_license(repo: &Repo, license_key: &str) -> bool {
        repo.license
            .as_ref()
            .is_some_and(|license| license.key == license_key)
    }
}
