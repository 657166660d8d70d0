//! Mock GitHub API client for testing
//!
//! Implements [`GithubApi`] with configurable payloads, one-shot errors, and
//! per-method call counts so tests can assert how often the network was hit.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{GithubApi, Org, Repo};
use crate::error::{ApiError, Error, Result};

/// Mock API client for unit tests.
///
/// Configure responses via builder methods, then hand it to a
/// `GithubOrgClient` and inspect `call_counts()` afterwards.
#[derive(Default)]
pub struct MockGithubClient {
    /// Organization record to return from get_org
    org: Arc<Mutex<Option<Org>>>,
    /// Repositories to return from list_repos
    repos: Arc<Mutex<Vec<Repo>>>,
    /// Error to return on the next call, consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Per-method call counts for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Logins passed to get_org, in call order
    captured_logins: Arc<Mutex<Vec<String>>>,
    /// URLs passed to list_repos, in call order
    captured_urls: Arc<Mutex<Vec<String>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub get_org: usize,
    pub list_repos: usize,
}

impl MockGithubClient {
    /// Create a new mock client with empty responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the organization record to return from get_org.
    pub fn with_org(self, org: Org) -> Self {
        *self.org.lock().unwrap() = Some(org);
        self
    }

    /// Configure repositories to return from list_repos.
    pub fn with_repos(self, repos: Vec<Repo>) -> Self {
        *self.repos.lock().unwrap() = repos;
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().unwrap() = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().unwrap().clone()
    }

    /// Logins that were requested via get_org.
    pub async fn captured_logins(&self) -> Vec<String> {
        self.captured_logins.lock().unwrap().clone()
    }

    /// URLs that were requested via list_repos.
    pub async fn captured_urls(&self) -> Vec<String> {
        self.captured_urls.lock().unwrap().clone()
    }

    /// Take the pending one-shot error, if any.
    fn check_error(&self) -> Result<()> {
        match self.error.lock().unwrap().take() {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl GithubApi for MockGithubClient {
    async fn get_org(&self, login: &str) -> Result<Org> {
        self.captured_logins.lock().unwrap().push(login.to_string());
        self.check_error()?;

        self.call_count.lock().unwrap().get_org += 1;

        self.org
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Error::Other(format!("Mock has no org configured for {}", login)))
    }

    async fn list_repos(&self, repos_url: &str) -> Result<Vec<Repo>> {
        self.captured_urls
            .lock()
            .unwrap()
            .push(repos_url.to_string());
        self.check_error()?;

        self.call_count.lock().unwrap().list_repos += 1;

        Ok(self.repos.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org_fixture() -> Org {
        serde_json::from_value(serde_json::json!({
            "login": "test",
            "id": 1,
            "repos_url": "https://example.com/repos",
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_mock_client_default_empty_repos() {
        let mock = MockGithubClient::new();

        let repos = mock.list_repos("https://example.com/repos").await.unwrap();
        assert!(repos.is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_unconfigured_org_errors() {
        let mock = MockGithubClient::new();

        let result = mock.get_org("nobody").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mock_client_with_org() {
        let mock = MockGithubClient::new().with_org(org_fixture());

        let org = mock.get_org("test").await.unwrap();
        assert_eq!(org.login, "test");
    }

    #[tokio::test]
    async fn test_mock_client_with_error_is_one_shot() {
        let mock = MockGithubClient::new()
            .with_org(org_fixture())
            .with_error(ApiError::Network("refused".to_string()));

        assert!(mock.get_org("test").await.is_err());

        // Error is consumed, next call succeeds
        assert!(mock.get_org("test").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_call_counts() {
        let mock = MockGithubClient::new().with_org(org_fixture());

        mock.get_org("test").await.unwrap();
        mock.get_org("test").await.unwrap();
        mock.list_repos("https://example.com/repos").await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.get_org, 2);
        assert_eq!(counts.list_repos, 1);
    }

    #[tokio::test]
    async fn test_mock_client_captures_requests() {
        let mock = MockGithubClient::new().with_org(org_fixture());

        mock.get_org("google").await.unwrap();
        mock.list_repos("https://example.com/r1").await.unwrap();
        mock.list_repos("https://example.com/r2").await.unwrap();

        assert_eq!(mock.captured_logins().await, vec!["google"]);
        assert_eq!(mock.captured_urls().await, vec![
            "https://example.com/r1",
            "https://example.com/r2"
        ]);
    }
}
