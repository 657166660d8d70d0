//! GitHub API client implementation

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

use super::{GithubApi, Org, Repo};
use crate::error::{ApiError, Result};

/// GitHub REST API base URL
const API_BASE_URL: &str = "https://api.github.com";

/// Environment variable that overrides the API host (used by tests)
pub const API_HOST_ENV: &str = "GHORG_API_HOST";

/// Perform a single HTTP GET against `url` and decode the JSON body.
///
/// Exactly one request is issued: no retries, no backoff, no auth. Transport
/// failures and non-success statuses propagate as [`ApiError`].
pub async fn get_json<T: DeserializeOwned>(http: &HttpClient, url: &str) -> Result<T> {
    let response = http.get(url).send().await.map_err(ApiError::from)?;

    let status = response.status();
    match status {
        StatusCode::OK => {
            let data = response.json::<T>().await.map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
            })?;
            Ok(data)
        }
        StatusCode::NOT_FOUND => Err(ApiError::NotFound(url.to_string()).into()),
        status if status.is_server_error() => {
            let error_msg = response
                .text()
                .await
                .unwrap_or_else(|_| format!("Server error: {}", status));
            Err(ApiError::ServerError(error_msg).into())
        }
        status if status.is_client_error() => {
            let error_msg = response
                .text()
                .await
                .unwrap_or_else(|_| "Bad request".to_string());
            Err(ApiError::BadRequest(error_msg).into())
        }
        _ => {
            let error_msg = format!("Unexpected status code: {}", status);
            Err(ApiError::InvalidResponse(error_msg).into())
        }
    }
}

/// GitHub API client
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: HttpClient,
    base_url: String,
}

impl GithubClient {
    /// Create a new GitHub API client.
    ///
    /// The API host resolves in order: explicit `api_host`, the
    /// `GHORG_API_HOST` environment variable, then the public GitHub API.
    pub fn new(api_host: Option<&str>) -> Result<Self> {
        // GitHub rejects requests without a User-Agent header
        let http = HttpClient::builder()
            .user_agent(concat!("ghorg/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base_url = api_host
            .map(str::to_owned)
            .or_else(|| std::env::var(API_HOST_ENV).ok())
            .unwrap_or_else(|| API_BASE_URL.to_string());

        Ok(Self { http, base_url })
    }

    /// URL of the organization record for a login
    pub fn org_url(&self, login: &str) -> String {
        format!("{}/orgs/{}", self.base_url, login)
    }
}

#[async_trait]
impl GithubApi for GithubClient {
    async fn get_org(&self, login: &str) -> Result<Org> {
        let url = self.org_url(login);
        log::debug!("GET {}", url);
        get_json(&self.http, &url).await
    }

    async fn list_repos(&self, repos_url: &str) -> Result<Vec<Repo>> {
        log::debug!("GET {}", repos_url);
        get_json(&self.http, repos_url).await
    }
}
