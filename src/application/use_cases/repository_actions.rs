use tracing::info;

use crate::application::services::repository_registry::RepositoryRegistry;
use crate::common::error::WkmError;
use crate::common::result::{OptionExt, WkmResult};
use crate::domain::entities::workspace::Workspace;
use crate::infrastructure::process::launcher::PathLauncher;

/// Convenience actions on a resolved repository path.
///
/// The launcher is injected so these actions can be exercised without a
/// clipboard or an editor.
pub struct RepositoryActions<'l, L: PathLauncher + ?Sized> {
    launcher: &'l L,
}

impl<'l, L: PathLauncher + ?Sized> RepositoryActions<'l, L> {
    pub fn new(launcher: &'l L) -> Self {
        Self { launcher }
    }

    /// Resolve the repository path in the active project
    pub fn get_path(&self, workspace: &mut Workspace, name: &str) -> WkmResult<String> {
        let registry = RepositoryRegistry::for_active_project(workspace)?;
        Ok(registry.resolve_path(name)?.to_string())
    }

    /// Copy the repository path to the clipboard and return it
    pub fn copy_path(&self, workspace: &mut Workspace, name: &str) -> WkmResult<String> {
        let path = self.get_path(workspace, name)?;
        self.launcher.copy_to_clipboard(&path)?;
        info!(repository = name, path = %path, "Copied repository path");
        Ok(path)
    }

    /// Open the repository with the editor from `config.editor` and return its path
    pub fn open(&self, workspace: &mut Workspace, name: &str) -> WkmResult<String> {
        let path = self.get_path(workspace, name)?;
        let editor = workspace
            .editor()
            .ok_or_wkm(WkmError::EditorNotConfigured)?;

        self.launcher.open_in_editor(editor, &path)?;
        info!(repository = name, editor, path = %path, "Opened repository");
        Ok(path)
    }
}
