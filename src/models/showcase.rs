use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::github::{ActivityEvent, EventKind, RepositorySummary, UserProfile};

/// A repository the site spotlights, declared at build time.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// `owner/name`, matched against `RepositorySummary::full_name`.
    pub repo: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivitySummary {
    pub commits: u32,
    pub prs: u32,
    pub issues: u32,
}

impl ActivitySummary {
    pub fn from_events(events: &[ActivityEvent]) -> Self {
        events.iter().fold(Self::default(), |mut acc, event| {
            match event.kind {
                EventKind::Push => acc.commits += 1,
                EventKind::PullRequest => acc.prs += 1,
                EventKind::Issues => acc.issues += 1,
                EventKind::Other => {}
            }
            acc
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub user: UserProfile,
    pub repos: Vec<RepositorySummary>,
    /// One key per declared project; `None` means the repository was not in the fetched page.
    pub project_repos: BTreeMap<String, Option<RepositorySummary>>,
    pub events: Vec<ActivityEvent>,
    #[serde(default)]
    pub activity: ActivitySummary,
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Unix milliseconds of the fetch that produced this data.
    pub timestamp: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Live,
    Cache,
    Fallback,
}

/// Outcome of one walk through the live, cache and fallback chain.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Live(AggregateResult),
    Cached(AggregateResult),
    Fallback(AggregateResult),
}

impl Resolution {
    pub fn provenance(&self) -> Provenance {
        match self {
            Resolution::Live(_) => Provenance::Live,
            Resolution::Cached(_) => Provenance::Cache,
            Resolution::Fallback(_) => Provenance::Fallback,
        }
    }

    pub fn data(&self) -> &AggregateResult {
        match self {
            Resolution::Live(data) | Resolution::Cached(data) | Resolution::Fallback(data) => data,
        }
    }

    pub fn into_response(self) -> ShowcaseResponse {
        let provenance = self.provenance();
        let data = match self {
            Resolution::Live(data) | Resolution::Cached(data) | Resolution::Fallback(data) => data,
        };
        ShowcaseResponse { data, provenance }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ShowcaseResponse {
    #[serde(flatten)]
    pub data: AggregateResult,
    pub provenance: Provenance,
}
