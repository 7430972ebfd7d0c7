use clap::Subcommand;

use crate::application::services::project_registry::{CreateProjectOutcome, ProjectRegistry};
use crate::common::error::WkmError;
use crate::common::result::WkmResult;
use crate::infrastructure::filesystem::WorkspaceStore;
use crate::presentation::ui::DisplayHelper;

/// Actions on `workspace.projects`
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ProjectsAction {
    /// List your projects
    #[command(visible_alias = "ls")]
    List,

    /// Create a new project and make it the active one
    Create {
        /// Project name
        name: String,
    },

    /// Make an existing project the active one
    Use {
        /// Project name
        name: String,
    },
}

/// Manage projects
pub struct ProjectsCommand {
    store: WorkspaceStore,
    display: DisplayHelper,
}

impl ProjectsCommand {
    pub fn new(store: WorkspaceStore, display: DisplayHelper) -> Self {
        Self { store, display }
    }

    /// Execute the projects command
    pub fn execute(&self, action: &ProjectsAction) -> WkmResult<()> {
        let mut workspace = self.store.load()?;
        let mut registry = ProjectRegistry::new(&mut workspace);

        match action {
            ProjectsAction::List => {
                let summaries = registry.list();
                if summaries.is_empty() {
                    self.display
                        .info("No projects yet. \nwkm projects create [project_name]");
                    return Ok(());
                }

                let rows: Vec<Vec<String>> = summaries
                    .into_iter()
                    .map(|summary| {
                        let marker = if summary.is_active { "   *   " } else { "" };
                        vec![summary.name, marker.to_string()]
                    })
                    .collect();
                self.display.print_table(&["PROJECT", "DEFAULT"], &rows);
            }
            ProjectsAction::Create { name } => match registry.create(name) {
                CreateProjectOutcome::Created => {
                    self.store.persist(&workspace)?;
                    self.display.success(&format!(
                        "Project [{}] has created successfully.",
                        self.display.format_name(name)
                    ));
                }
                CreateProjectOutcome::AlreadyExists => {
                    return Err(WkmError::project_already_exists(name.as_str()));
                }
            },
            ProjectsAction::Use { name } => {
                registry.select_active(name)?;
                self.store.persist(&workspace)?;
                self.display.success(&format!(
                    "Project [{}] is now active.",
                    self.display.format_name(name)
                ));
            }
        }

        Ok(())
    }
}
