/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - File system operations (the workspace file)
/// - Process execution and clipboard access (repository actions)
pub mod filesystem;
pub mod process;

// Re-export commonly used types
pub use filesystem::{StoreConfig, WorkspaceStore};
pub use process::{PathLauncher, SystemLauncher};
