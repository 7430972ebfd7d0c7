//! Test fixtures for creating workspace documents

use wkm::domain::entities::{Project, Repository, Workspace, ACTIVE_PROJECT_KEY};

/// Reusable workspace documents
pub struct WorkspaceFixture;

impl WorkspaceFixture {
    /// A workspace with one active project holding two repositories
    pub fn web_project() -> Workspace {
        Workspace::new()
            .with_projects(vec![Project::new("web").with_repos(vec![
                Repository::new("a", "/p/a"),
                Repository::new("b", "/p/b"),
            ])])
            .with_config(ACTIVE_PROJECT_KEY, "web")
    }

    /// Several projects, the second one active
    pub fn multi_project() -> Workspace {
        Workspace::new()
            .with_projects(vec![
                Project::new("web").with_repos(vec![Repository::new("api", "/srv/api")]),
                Project::new("infra").with_repos(vec![
                    Repository::new("terraform", "/srv/infra/terraform"),
                    Repository::new("ansible", "relative/ansible"),
                ]),
                Project::new("empty"),
            ])
            .with_config(ACTIVE_PROJECT_KEY, "infra")
            .with_config("editor", "code --new-window")
    }

    /// Projects exist but none is active
    pub fn without_active_project() -> Workspace {
        Workspace::new().with_projects(vec![Project::new("web")])
    }

    /// The active project name points at a project that does not exist
    pub fn dangling_active_project() -> Workspace {
        Self::without_active_project().with_config(ACTIVE_PROJECT_KEY, "deleted")
    }
}
