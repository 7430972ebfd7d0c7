pub mod workspace_store;

pub use workspace_store::{resolve_store_path, StoreConfig, WorkspaceStore, STORE_FILE_NAME};
