use crate::error::{Error, Result};
use crate::services::github::GitHubClient;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_USERNAME: &str = "lou-16";
pub const DEFAULT_CACHE_FILE: &str = ".cache/github-data.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub github_username: String,
    pub github_token: Option<String>,
    pub github_api_url: String,
    pub repos_per_page: u32,
    pub events_per_page: u32,
    pub upstream_timeout: Duration,
    /// `None` when the cache layer is switched off with `CACHE_FILE=off`.
    pub cache_file: Option<PathBuf>,
    pub cache_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            github_username: DEFAULT_USERNAME.to_string(),
            github_token: None,
            github_api_url: GitHubClient::DEFAULT_BASE_URL.to_string(),
            repos_per_page: 100,
            events_per_page: 30,
            upstream_timeout: Duration::from_secs(10),
            cache_file: Some(PathBuf::from(DEFAULT_CACHE_FILE)),
            cache_ttl: Duration::from_secs(3600),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Unparseable numbers fall back to
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let github_username = lookup("GITHUB_USERNAME")
            .map(|v| v.trim().to_string())
            .unwrap_or(defaults.github_username);
        if github_username.is_empty() {
            return Err(Error::Config("GITHUB_USERNAME must not be empty".to_string()));
        }

        let github_token = lookup("GITHUB_TOKEN").filter(|t| !t.trim().is_empty());

        let cache_file = match lookup("CACHE_FILE") {
            Some(v) if v.eq_ignore_ascii_case("off") => None,
            Some(v) if !v.trim().is_empty() => Some(PathBuf::from(v)),
            _ => defaults.cache_file,
        };

        let parse_u32 = |key: &str, default: u32| {
            lookup(key)
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(default)
        };
        let parse_secs = |key: &str, default: Duration| {
            lookup(key)
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(default)
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            github_username,
            github_token,
            github_api_url: lookup("GITHUB_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.github_api_url),
            repos_per_page: parse_u32("REPOS_PER_PAGE", defaults.repos_per_page),
            events_per_page: parse_u32("EVENTS_PER_PAGE", defaults.events_per_page),
            upstream_timeout: parse_secs("UPSTREAM_TIMEOUT_SECS", defaults.upstream_timeout),
            cache_file,
            cache_ttl: parse_secs("CACHE_TTL_SECS", defaults.cache_ttl),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
