//! Test helper functions and utilities

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wkm::domain::entities::Workspace;
use wkm::infrastructure::filesystem::{WorkspaceStore, STORE_FILE_NAME};

/// An isolated directory holding a workspace file
pub struct TestStore {
    pub dir: TempDir,
}

impl TestStore {
    /// Empty directory, no workspace file yet
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Directory with the given workspace already persisted
    pub fn with_workspace(workspace: &Workspace) -> Self {
        let store = Self::new();
        store
            .store()
            .persist(workspace)
            .expect("Failed to persist workspace");
        store
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self) -> PathBuf {
        self.dir.path().join(STORE_FILE_NAME)
    }

    pub fn store(&self) -> WorkspaceStore {
        WorkspaceStore::new(self.file())
    }

    pub fn load(&self) -> Workspace {
        self.store().load().expect("Failed to load workspace")
    }

    pub fn raw(&self) -> Vec<u8> {
        std::fs::read(self.file()).expect("Failed to read workspace file")
    }

    /// `wkm` bound to this store, with colors and ambient overrides disabled
    pub fn wkm(&self) -> Command {
        let mut cmd = Command::cargo_bin("wkm").expect("wkm binary should be built");
        cmd.env_remove("WKM_CONFIG_DIR")
            .env_remove("WKM_LOG")
            .env("NO_COLOR", "1")
            .arg("--config-file")
            .arg(self.path());
        cmd
    }
}
