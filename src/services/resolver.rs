use crate::config::Config;
use crate::models::github::{RepositorySummary, UserProfile};
use crate::models::showcase::{ActivitySummary, AggregateResult, Project, Resolution};
use crate::services::cache::CacheStore;
use crate::services::github::{GitHubClient, LiveData};
use chrono::Utc;
use log::{error, info, warn};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Number of recently updated repositories exposed in `repos`.
pub const DISPLAY_REPO_COUNT: usize = 6;

/// Maps every declared project to its entry in the fetched page, or `None` when the
/// repository was not among the fetched repositories.
pub fn resolve_project_repos(
    projects: &[Project],
    repos: &[RepositorySummary],
) -> BTreeMap<String, Option<RepositorySummary>> {
    let by_name: HashMap<&str, &RepositorySummary> =
        repos.iter().map(|r| (r.full_name.as_str(), r)).collect();

    projects
        .iter()
        .map(|p| (p.repo.clone(), by_name.get(p.repo.as_str()).map(|r| (*r).clone())))
        .collect()
}

/// Last-resort payload served when neither the API nor the cache can answer. Only the
/// identity fields follow `username`; the rest is the known static profile.
pub fn fallback_payload(username: &str, projects: &[Project]) -> AggregateResult {
    AggregateResult {
        user: UserProfile {
            login: username.to_string(),
            name: Some("Gurnoor Singh".to_string()),
            avatar_url: "/IMG_0133.jpg".to_string(),
            bio: Some(String::new()),
            public_repos: 20,
            followers: 5,
            following: 3,
            html_url: format!("https://github.com/{}", username),
        },
        repos: Vec::new(),
        project_repos: BTreeMap::new(),
        events: Vec::new(),
        activity: ActivitySummary::default(),
        projects: projects.to_vec(),
        timestamp: Utc::now().timestamp_millis(),
    }
}

pub struct ShowcaseResolver {
    github: GitHubClient,
    cache: Option<Arc<dyn CacheStore>>,
    projects: Vec<Project>,
    username: String,
    repos_per_page: u32,
    events_per_page: u32,
}

impl ShowcaseResolver {
    pub fn new(
        github: GitHubClient,
        cache: Option<Arc<dyn CacheStore>>,
        projects: Vec<Project>,
        config: &Config,
    ) -> Self {
        Self {
            github,
            cache,
            projects,
            username: config.github_username.clone(),
            repos_per_page: config.repos_per_page,
            events_per_page: config.events_per_page,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn assemble(&self, live: LiveData) -> AggregateResult {
        let project_repos = resolve_project_repos(&self.projects, &live.repos);
        let activity = ActivitySummary::from_events(&live.events);

        let mut repos = live.repos;
        repos.truncate(DISPLAY_REPO_COUNT);

        AggregateResult {
            user: live.user,
            repos,
            project_repos,
            events: live.events,
            activity,
            projects: self.projects.clone(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Walks live fetch, then cache, then the static payload. Never fails.
    pub async fn resolve(&self) -> Resolution {
        let cycle = self
            .github
            .fetch_cycle(&self.username, self.repos_per_page, self.events_per_page)
            .await;

        let err = match cycle.into_live() {
            Ok(live) => {
                let result = self.assemble(live);
                if let Some(cache) = &self.cache {
                    if let Err(e) = cache.write(&result) {
                        warn!("Failed to write GitHub cache: {}", e);
                    }
                }
                info!(
                    "Served live GitHub data for {} ({} repos, {} events)",
                    self.username,
                    result.repos.len(),
                    result.events.len()
                );
                return Resolution::Live(result);
            }
            Err(e) => e,
        };

        error!("GitHub API error: {}", err);

        if let Some(cached) = self.cache.as_ref().and_then(|c| c.read()) {
            info!("Serving cached GitHub data from {}", cached.timestamp);
            return Resolution::Cached(cached);
        }

        info!("No usable cache, serving fallback GitHub data");
        Resolution::Fallback(fallback_payload(&self.username, &self.projects))
    }
}
