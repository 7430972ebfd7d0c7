use clap::Subcommand;

use crate::common::result::WkmResult;
use crate::infrastructure::filesystem::WorkspaceStore;
use crate::presentation::ui::DisplayHelper;

const HEADERS: [&str; 2] = ["PROPERTY", "VALUE"];

/// Actions on `workspace.config`
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ConfigAction {
    /// List properties of your workspace
    #[command(visible_alias = "ls")]
    List,

    /// Set a workspace property
    Set {
        /// Property name
        key: String,
        /// Property value
        value: String,
    },

    /// Unset a workspace property
    Unset {
        /// Property name
        key: String,
    },

    /// Get a workspace property
    GetValue {
        /// Property name
        key: String,
    },
}

/// Manage workspace properties
pub struct ConfigCommand {
    store: WorkspaceStore,
    display: DisplayHelper,
}

impl ConfigCommand {
    pub fn new(store: WorkspaceStore, display: DisplayHelper) -> Self {
        Self { store, display }
    }

    /// Execute the config command
    pub fn execute(&self, action: &ConfigAction) -> WkmResult<()> {
        let mut workspace = self.store.load()?;

        match action {
            ConfigAction::List => {
                let rows: Vec<Vec<String>> = workspace
                    .config
                    .iter()
                    .map(|(key, value)| vec![key.clone(), value.clone()])
                    .collect();
                self.display.print_table(&HEADERS, &rows);
            }
            ConfigAction::Set { key, value } => {
                workspace.set_config(key.as_str(), value.as_str());
                self.store.persist(&workspace)?;
                self.display
                    .print_table(&HEADERS, &[vec![key.clone(), value.clone()]]);
            }
            ConfigAction::Unset { key } => {
                if workspace.unset_config(key).is_some() {
                    self.store.persist(&workspace)?;
                    self.display
                        .success(&format!("Property [{}] has unset successfully.", key));
                } else {
                    self.display.info(&format!("Property [{}] is not set.", key));
                }
            }
            ConfigAction::GetValue { key } => {
                let value = workspace.config_value(key).unwrap_or_default().to_string();
                self.display.print_table(&HEADERS, &[vec![key.clone(), value]]);
            }
        }

        Ok(())
    }
}
