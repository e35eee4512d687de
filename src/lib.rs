pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Config;
pub use error::{Error, Result};
pub use handlers::showcase::AppState;
pub use services::{CacheStore, FileCache, GitHubClient, ShowcaseResolver};
