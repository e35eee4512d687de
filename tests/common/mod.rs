#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};
use showcase_api::models::showcase::{AggregateResult, Project};
use showcase_api::{CacheStore, Config, GitHubClient, ShowcaseResolver};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const HANDLE: &str = "lou-16";

/// In-memory stand-in for the file cache that counts writes.
#[derive(Default)]
pub struct MemoryCache {
    entry: Mutex<Option<AggregateResult>>,
    writes: AtomicUsize,
}

impl MemoryCache {
    pub fn with_entry(result: AggregateResult) -> Self {
        Self {
            entry: Mutex::new(Some(result)),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Option<AggregateResult> {
        self.entry.lock().unwrap().clone()
    }
}

impl CacheStore for MemoryCache {
    fn read(&self) -> Option<AggregateResult> {
        self.entry.lock().unwrap().clone()
    }

    fn write(&self, result: &AggregateResult) -> showcase_api::Result<()> {
        *self.entry.lock().unwrap() = Some(result.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn project(repo: &str) -> Project {
    Project {
        repo: repo.to_string(),
        featured: true,
        demo_url: None,
        custom_description: None,
        tags: Vec::new(),
    }
}

pub fn user_json() -> Value {
    json!({
        "login": HANDLE,
        "id": 1,
        "name": "Gurnoor Singh",
        "avatar_url": "https://avatars.githubusercontent.com/u/1",
        "bio": "kernels and things",
        "public_repos": 21,
        "followers": 7,
        "following": 4,
        "html_url": "https://github.com/lou-16"
    })
}

pub fn repo_json(name: &str) -> Value {
    json!({
        "id": 100,
        "name": name,
        "full_name": format!("{}/{}", HANDLE, name),
        "description": format!("{} description", name),
        "language": "C",
        "stargazers_count": 3,
        "forks_count": 1,
        "html_url": format!("https://github.com/{}/{}", HANDLE, name),
        "topics": ["os"],
        "updated_at": "2024-06-01T12:00:00Z"
    })
}

pub fn repos_json(names: &[&str]) -> Value {
    Value::Array(names.iter().map(|n| repo_json(n)).collect())
}

pub fn events_json(types: &[&str]) -> Value {
    Value::Array(
        types
            .iter()
            .enumerate()
            .map(|(i, t)| {
                json!({
                    "id": i.to_string(),
                    "type": t,
                    "repo": {"id": 1, "name": "lou-16/krnl"},
                    "created_at": "2024-06-01T12:00:00Z"
                })
            })
            .collect(),
    )
}

pub async fn mock_user(server: &mut ServerGuard, status: usize, body: Value) -> Mock {
    server
        .mock("GET", format!("/users/{}", HANDLE).as_str())
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

pub async fn mock_repos(server: &mut ServerGuard, status: usize, body: Value) -> Mock {
    server
        .mock("GET", format!("/users/{}/repos", HANDLE).as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("sort".into(), "updated".into()),
            Matcher::UrlEncoded("per_page".into(), "100".into()),
        ]))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

pub async fn mock_events(server: &mut ServerGuard, status: usize, body: Value) -> Mock {
    server
        .mock("GET", format!("/users/{}/events/public", HANDLE).as_str())
        .match_query(Matcher::UrlEncoded("per_page".into(), "30".into()))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

pub fn resolver(
    server: &ServerGuard,
    cache: Option<Arc<dyn CacheStore>>,
    projects: Vec<Project>,
) -> ShowcaseResolver {
    let github = GitHubClient::with_base_url(&server.url(), None, Duration::from_secs(5)).unwrap();
    ShowcaseResolver::new(github, cache, projects, &Config::default())
}
