use clap::Subcommand;

use crate::application::services::repository_registry::RepositoryRegistry;
use crate::application::use_cases::repository_actions::RepositoryActions;
use crate::common::error::WkmError;
use crate::common::result::WkmResult;
use crate::infrastructure::filesystem::WorkspaceStore;
use crate::infrastructure::process::PathLauncher;
use crate::presentation::ui::DisplayHelper;

/// Actions on the repositories of the active project
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ReposAction {
    /// List your repositories in active project
    #[command(visible_alias = "ls")]
    List,

    /// Create a new repository in active project
    Create {
        /// Repository name
        name: String,

        /// Path to the repository (defaults to the current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Print repository path into console
    GetPath {
        /// Repository name
        name: String,
    },

    /// Copy repository path into clipboard
    CopyPath {
        /// Repository name
        name: String,
    },

    /// Open repository path in defined editor
    Open {
        /// Repository name
        name: String,
    },
}

/// Manage repositories of the active project
pub struct ReposCommand {
    store: WorkspaceStore,
    display: DisplayHelper,
    launcher: Box<dyn PathLauncher>,
}

impl ReposCommand {
    pub fn new(
        store: WorkspaceStore,
        display: DisplayHelper,
        launcher: Box<dyn PathLauncher>,
    ) -> Self {
        Self {
            store,
            display,
            launcher,
        }
    }

    /// Execute the repos command
    ///
    /// Nothing is written when there is no active project.
    pub fn execute(&self, action: &ReposAction) -> WkmResult<()> {
        let mut workspace = self.store.load()?;
        let actions = RepositoryActions::new(self.launcher.as_ref());

        match action {
            ReposAction::List => {
                let registry = RepositoryRegistry::for_active_project(&mut workspace)?;
                if registry.list().is_empty() {
                    return Err(WkmError::empty_project(registry.project_name()));
                }

                let rows: Vec<Vec<String>> = registry
                    .list()
                    .iter()
                    .map(|repo| vec![repo.name.clone(), repo.path.clone()])
                    .collect();
                self.display.print_table(&["REPOSITORY", "PATH"], &rows);
            }
            ReposAction::Create { name, path } => {
                let mut registry = RepositoryRegistry::for_active_project(&mut workspace)?;
                let project = registry.project_name().to_string();
                let repo = registry.create(name, path.clone())?.clone();

                self.store.persist(&workspace)?;
                self.display.success(&format!(
                    "Repository [{}] has created in project [{}] at {}.",
                    self.display.format_name(&repo.name),
                    self.display.format_name(&project),
                    self.display.format_path(&repo.path)
                ));
            }
            ReposAction::GetPath { name } => {
                let path = actions.get_path(&mut workspace, name)?;
                println!("{}", path);
            }
            ReposAction::CopyPath { name } => {
                let path = actions.copy_path(&mut workspace, name)?;
                self.display.success(&format!(
                    "Copied {} to clipboard.",
                    self.display.format_path(&path)
                ));
            }
            ReposAction::Open { name } => {
                actions.open(&mut workspace, name)?;
            }
        }

        Ok(())
    }
}
