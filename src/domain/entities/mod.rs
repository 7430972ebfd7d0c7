pub mod project;
pub mod repository;
pub mod workspace;

pub use project::Project;
pub use repository::Repository;
pub use workspace::{Workspace, ACTIVE_PROJECT_KEY, EDITOR_KEY};
