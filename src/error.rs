use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API error {status} on {endpoint}")]
    GitHubApi {
        status: reqwest::StatusCode,
        endpoint: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
