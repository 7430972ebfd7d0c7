pub mod project_registry;
pub mod repository_registry;

pub use project_registry::{CreateProjectOutcome, ProjectRegistry, ProjectSummary};
pub use repository_registry::{get_active_project, RepositoryRegistry};
