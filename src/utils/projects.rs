use lazy_static::lazy_static;
use crate::models::showcase::Project;

fn project(repo: &str, featured: bool, description: &str, tags: &[&str]) -> Project {
    Project {
        repo: repo.to_string(),
        featured,
        demo_url: None,
        custom_description: Some(description.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

lazy_static! {
    pub static ref PROJECTS: Vec<Project> = vec![
        project(
            "lou-16/krnl",
            true,
            "A WIP kernel created from scratch in C.",
            &["Operating Systems", "Low-level", "C"],
        ),
        project(
            "lou-16/cassie",
            true,
            "Mirror Repo for the GitLab repository for this project.",
            &["C++"],
        ),
        project(
            "lou-16/fsprintf",
            false,
            "Freestanding printf that I wrote for my kernel. Plans to add driver support later.",
            &["C", "Kernel Development"],
        ),
        project(
            "lou-16/prabhaavField",
            true,
            "An Expo Go app implemented under PS25250 for team CogniForge's solution",
            &["TypeScript", "React Native", "Expo"],
        ),
    ];
}

pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}
