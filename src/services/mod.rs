pub mod cache;
pub mod github;
pub mod resolver;

pub use cache::{CacheStore, FileCache};
pub use github::GitHubClient;
pub use resolver::ShowcaseResolver;
