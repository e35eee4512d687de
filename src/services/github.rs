use crate::error::{Error, Result};
use crate::models::github::{ActivityEvent, RepositorySummary, UserProfile};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use log::{debug, error, warn};
use std::time::Duration;

/// Raw outcome of the three upstream calls, each settled independently.
#[derive(Debug)]
pub struct FetchCycle {
    pub user: Result<UserProfile>,
    pub repos: Result<Vec<RepositorySummary>>,
    pub events: Result<Vec<ActivityEvent>>,
}

/// A fetch cycle whose required calls succeeded. Activity is best-effort and may be empty.
#[derive(Debug, Clone)]
pub struct LiveData {
    pub user: UserProfile,
    pub repos: Vec<RepositorySummary>,
    pub events: Vec<ActivityEvent>,
}

impl FetchCycle {
    pub fn into_live(self) -> Result<LiveData> {
        let user = self.user.map_err(|e| {
            Error::UpstreamUnavailable(format!("profile request failed: {}", e))
        })?;
        let repos = self.repos.map_err(|e| {
            Error::UpstreamUnavailable(format!("repository list request failed: {}", e))
        })?;
        let events = self.events.unwrap_or_else(|e| {
            warn!("Activity feed unavailable, continuing without it: {}", e);
            Vec::new()
        });

        Ok(LiveData { user, repos, events })
    }
}

pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.github.com";

    pub fn new(token: Option<String>, timeout: Duration) -> Result<Self> {
        Self::with_base_url(Self::DEFAULT_BASE_URL, token, timeout)
    }

    pub fn with_base_url(base_url: &str, token: Option<String>, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("showcase-api"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static("2022-11-28"));

        if let Some(t) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", t))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("GitHub request to {} failed: {}", path, e);
            Error::Network(e)
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("GitHub API error {} on {}: {}", status, path, error_text);
            return Err(Error::GitHubApi {
                status,
                endpoint: path.to_string(),
            });
        }

        Ok(response.json().await?)
    }

    pub async fn get_user(&self, handle: &str) -> Result<UserProfile> {
        self.get_json(&format!("/users/{}", handle)).await
    }

    /// Most recently updated first.
    pub async fn list_repos(&self, handle: &str, per_page: u32) -> Result<Vec<RepositorySummary>> {
        self.get_json(&format!("/users/{}/repos?sort=updated&per_page={}", handle, per_page))
            .await
    }

    pub async fn list_public_events(&self, handle: &str, per_page: u32) -> Result<Vec<ActivityEvent>> {
        self.get_json(&format!("/users/{}/events/public?per_page={}", handle, per_page))
            .await
    }

    /// Issues the profile, repository and activity requests concurrently and waits for all
    /// three to settle. No call is retried.
    pub async fn fetch_cycle(&self, handle: &str, repos_per_page: u32, events_per_page: u32) -> FetchCycle {
        let (user, repos, events) = tokio::join!(
            self.get_user(handle),
            self.list_repos(handle, repos_per_page),
            self.list_public_events(handle, events_per_page),
        );

        FetchCycle { user, repos, events }
    }
}
