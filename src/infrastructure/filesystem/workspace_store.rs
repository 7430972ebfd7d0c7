use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::common::error::WkmError;
use crate::common::result::{ResultExt, WkmResult};
use crate::domain::entities::workspace::Workspace;

/// Name of the workspace file inside the config directory
pub const STORE_FILE_NAME: &str = ".wkm.json";

/// Resolve the location of the workspace file.
///
/// An explicit directory wins over the home directory. No I/O is performed.
pub fn resolve_store_path(explicit_dir: Option<&Path>, home_dir: &Path) -> PathBuf {
    explicit_dir.unwrap_or(home_dir).join(STORE_FILE_NAME)
}

/// Where the workspace file lives for one invocation
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Directory given on the command line, if any
    pub config_dir: Option<PathBuf>,

    /// Home directory used when no explicit directory is given
    pub home_dir: Option<PathBuf>,
}

impl StoreConfig {
    /// Create a store configuration, looking up the invoking user's home directory
    pub fn new(config_dir: Option<PathBuf>) -> Self {
        Self {
            config_dir,
            home_dir: dirs::home_dir(),
        }
    }

    /// Override the home directory
    pub fn with_home_dir(mut self, home_dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home_dir.into());
        self
    }

    /// Full path of the workspace file
    pub fn store_path(&self) -> WkmResult<PathBuf> {
        match (&self.config_dir, &self.home_dir) {
            (Some(dir), _) => Ok(dir.join(STORE_FILE_NAME)),
            (None, Some(home)) => Ok(resolve_store_path(None, home)),
            (None, None) => Err(WkmError::HomeDirectoryUnavailable),
        }
    }
}

/// Durable load/save of the workspace document.
///
/// Every call goes to disk; nothing is cached between calls. Writes replace
/// the whole file and are not atomic.
#[derive(Debug, Clone)]
pub struct WorkspaceStore {
    path: PathBuf,
}

impl WorkspaceStore {
    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store from a resolved configuration
    pub fn from_config(config: &StoreConfig) -> WkmResult<Self> {
        Ok(Self::new(config.store_path()?))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the workspace, materializing an empty one on first use
    pub fn load(&self) -> WkmResult<Workspace> {
        if !self.exists() {
            let workspace = Workspace::new();
            info!(path = %self.path.display(), "Initializing workspace file");
            self.persist(&workspace)?;
            return Ok(workspace);
        }

        let contents = fs::read_to_string(&self.path).with_filesystem_error(
            "Workspace file read failed",
            Some(self.path.clone()),
        )?;

        let workspace: Workspace = serde_json::from_str(&contents)
            .map_err(|e| WkmError::corrupt_store(&self.path, e))?;

        debug!(
            path = %self.path.display(),
            projects = workspace.projects.len(),
            ?workspace,
            "Loaded workspace"
        );
        Ok(workspace)
    }

    /// Overwrite the backing file with the given workspace
    pub fn persist(&self, workspace: &Workspace) -> WkmResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_filesystem_error(
                    "Config directory creation failed",
                    Some(parent.to_path_buf()),
                )?;
            }
        }

        let contents = serde_json::to_string_pretty(workspace)?;
        fs::write(&self.path, contents)
            .with_filesystem_error("Workspace file write failed", Some(self.path.clone()))?;

        debug!(path = %self.path.display(), "Persisted workspace");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Project, Repository, ACTIVE_PROJECT_KEY};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_store_path() {
        let home = Path::new("/home/dev");
        assert_eq!(
            resolve_store_path(None, home),
            PathBuf::from("/home/dev/.wkm.json")
        );
        assert_eq!(
            resolve_store_path(Some(Path::new("/etc/wkm")), home),
            PathBuf::from("/etc/wkm/.wkm.json")
        );
    }

    #[test]
    fn test_store_config_prefers_explicit_dir() {
        let config = StoreConfig::new(Some(PathBuf::from("/opt/ws"))).with_home_dir("/home/dev");
        assert_eq!(config.store_path().unwrap(), PathBuf::from("/opt/ws/.wkm.json"));

        let config = StoreConfig::default().with_home_dir("/home/dev");
        assert_eq!(
            config.store_path().unwrap(),
            PathBuf::from("/home/dev/.wkm.json")
        );
    }

    #[test]
    fn test_store_config_without_home() {
        let config = StoreConfig::default();
        assert!(matches!(
            config.store_path(),
            Err(WkmError::HomeDirectoryUnavailable)
        ));
    }

    #[test]
    fn test_load_creates_empty_workspace() {
        let temp_dir = TempDir::new().unwrap();
        let store = WorkspaceStore::new(temp_dir.path().join(STORE_FILE_NAME));

        let workspace = store.load().unwrap();
        assert_eq!(workspace, Workspace::new());
        assert!(store.exists());

        let on_disk: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(on_disk, serde_json::json!({ "projects": [], "config": {} }));
    }

    #[test]
    fn test_load_creates_missing_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store = WorkspaceStore::new(temp_dir.path().join("nested/dir").join(STORE_FILE_NAME));

        store.load().unwrap();
        assert!(store.exists());
    }

    #[test]
    fn test_persist_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = WorkspaceStore::new(temp_dir.path().join(STORE_FILE_NAME));

        let workspace = Workspace::new()
            .with_projects(vec![Project::new("web").with_repos(vec![
                Repository::new("api", "/srv/api"),
                Repository::new("ui", "relative/ui"),
            ])])
            .with_config(ACTIVE_PROJECT_KEY, "web")
            .with_config("editor", "code");

        store.persist(&workspace).unwrap();
        assert_eq!(store.load().unwrap(), workspace);
    }

    #[test]
    fn test_persist_uses_two_space_indentation() {
        let temp_dir = TempDir::new().unwrap();
        let store = WorkspaceStore::new(temp_dir.path().join(STORE_FILE_NAME));

        store.persist(&Workspace::new()).unwrap();
        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "{\n  \"projects\": [],\n  \"config\": {}\n}");
    }

    #[test]
    fn test_load_corrupt_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(STORE_FILE_NAME);
        fs::write(&path, "{ this is not json").unwrap();

        let result = WorkspaceStore::new(&path).load();
        assert!(matches!(result, Err(WkmError::CorruptStore { .. })));

        // The corrupt file is left untouched
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ this is not json");
    }

    #[test]
    fn test_load_shape_mismatch() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(STORE_FILE_NAME);
        fs::write(&path, r#"{ "projects": [ { "name": "web" } ], "config": {} }"#).unwrap();

        let result = WorkspaceStore::new(&path).load();
        assert!(matches!(result, Err(WkmError::CorruptStore { .. })));
    }
}
