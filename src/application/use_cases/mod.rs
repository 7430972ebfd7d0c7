pub mod repository_actions;

pub use repository_actions::RepositoryActions;
