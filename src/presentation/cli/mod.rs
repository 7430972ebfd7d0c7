pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::exit;

use crate::common::logging;
use crate::common::result::WkmResult;
use crate::infrastructure::filesystem::{StoreConfig, WorkspaceStore};
use crate::infrastructure::process::SystemLauncher;
use crate::presentation::ui::display::helpers;
use crate::presentation::ui::DisplayHelper;

use commands::{
    ConfigAction, ConfigCommand, ProjectsAction, ProjectsCommand, ReposAction, ReposCommand,
};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("BUILD_DATE"),
    ")\ntarget: ",
    env!("BUILD_TARGET")
);

/// wkm - Organize projects and repositories into a workspace
#[derive(Debug, Parser)]
#[command(name = "wkm")]
#[command(about = "Organize projects and repositories into a workspace")]
#[command(version, long_version = LONG_VERSION)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use/Store the workspace file (.wkm.json) in a custom directory
    #[arg(
        short = 'c',
        long = "config-file",
        value_name = "DIR",
        global = true,
        env = "WKM_CONFIG_DIR"
    )]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage workspace properties
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Manage projects
    Projects {
        #[command(subcommand)]
        action: ProjectsAction,
    },

    /// Manage repositories of the active project
    Repos {
        #[command(subcommand)]
        action: ReposAction,
    },
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn run(self) -> anyhow::Result<()> {
        logging::init(self.cli.verbose);

        let display = helpers::auto_display(self.cli.no_color);
        colored::control::set_override(display.any_color());

        match self.handle_command(display) {
            Ok(()) => Ok(()),
            Err(e) if e.is_informational() => {
                display.info(&e.to_string());
                Ok(())
            }
            Err(e) if !e.is_fatal() => {
                display.warning(&e.to_string());
                Ok(())
            }
            Err(e) => {
                display.error(&format!("{:#}", anyhow::Error::new(e)));
                exit(1);
            }
        }
    }

    fn handle_command(&self, display: DisplayHelper) -> WkmResult<()> {
        let store = self.workspace_store()?;

        match &self.cli.command {
            Commands::Config { action } => ConfigCommand::new(store, display).execute(action),
            Commands::Projects { action } => ProjectsCommand::new(store, display).execute(action),
            Commands::Repos { action } => {
                ReposCommand::new(store, display, Box::new(SystemLauncher::new())).execute(action)
            }
        }
    }

    /// Resolve the workspace file from `--config-file` or the home directory
    fn workspace_store(&self) -> WkmResult<WorkspaceStore> {
        let config = StoreConfig::new(self.cli.config_file.clone());
        let store = WorkspaceStore::from_config(&config)?;
        tracing::debug!(path = %store.path().display(), "Using workspace file");
        Ok(store)
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}
