pub mod github;
pub mod showcase;

pub use github::{ActivityEvent, EventKind, EventRepo, RepositorySummary, UserProfile};
pub use showcase::{
    ActivitySummary, AggregateResult, Project, Provenance, Resolution, ShowcaseResponse,
};
