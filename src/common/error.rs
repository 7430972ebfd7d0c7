use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WkmError {
    #[error("You must set active project first. \nwkm config set project [project_name].")]
    NoActiveProject,

    #[error("Project [{name}] already exists.")]
    ProjectAlreadyExists { name: String },

    #[error("You don't have project [{name}] in your workspace.")]
    ProjectNotFound { name: String },

    #[error("You don't have repository [{name}] in project [{project}].")]
    RepositoryNotFound { name: String, project: String },

    #[error("No repositories in project [{project}]")]
    EmptyProject { project: String },

    #[error("Editor is not configured. \nwkm config set editor [editor_command].")]
    EditorNotConfigured,

    #[error("Workspace file is corrupt: {}", path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not determine home directory; pass --config-file instead")]
    HomeDirectoryUnavailable,

    #[error("File system operation failed: {message}")]
    FileSystemError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Serialization error: {message}")]
    SerializationError {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("Command execution failed: {message}")]
    CommandError {
        message: String,
        command: String,
        exit_code: Option<i32>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Clipboard error: {message}")]
    ClipboardError { message: String },
}

impl WkmError {
    pub fn project_already_exists(name: impl Into<String>) -> Self {
        Self::ProjectAlreadyExists { name: name.into() }
    }

    pub fn project_not_found(name: impl Into<String>) -> Self {
        Self::ProjectNotFound { name: name.into() }
    }

    pub fn repository_not_found(name: impl Into<String>, project: impl Into<String>) -> Self {
        Self::RepositoryNotFound {
            name: name.into(),
            project: project.into(),
        }
    }

    pub fn empty_project(project: impl Into<String>) -> Self {
        Self::EmptyProject {
            project: project.into(),
        }
    }

    pub fn corrupt_store(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::CorruptStore {
            path: path.into(),
            source,
        }
    }

    pub fn filesystem_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    pub fn serialization_error_with_source(
        message: impl Into<String>,
        source: serde_json::Error,
    ) -> Self {
        Self::SerializationError {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn command_error(
        message: impl Into<String>,
        command: impl Into<String>,
        exit_code: Option<i32>,
    ) -> Self {
        Self::CommandError {
            message: message.into(),
            command: command.into(),
            exit_code,
            source: None,
        }
    }

    pub fn command_error_with_source(
        message: impl Into<String>,
        command: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::CommandError {
            message: message.into(),
            command: command.into(),
            exit_code: None,
            source: Some(source),
        }
    }

    pub fn clipboard_error(message: impl Into<String>) -> Self {
        Self::ClipboardError {
            message: message.into(),
        }
    }

    /// Whether this error should terminate the process with a failure status.
    ///
    /// Precondition and lookup failures are reported to the user and the
    /// process still exits successfully.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::NoActiveProject
                | Self::ProjectAlreadyExists { .. }
                | Self::ProjectNotFound { .. }
                | Self::RepositoryNotFound { .. }
                | Self::EmptyProject { .. }
                | Self::EditorNotConfigured
        )
    }

    /// Outcomes reported as plain information rather than as a problem
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            Self::ProjectAlreadyExists { .. } | Self::EmptyProject { .. }
        )
    }
}

impl From<std::io::Error> for WkmError {
    fn from(error: std::io::Error) -> Self {
        Self::filesystem_error_with_source("File system operation failed", None, error)
    }
}

impl From<serde_json::Error> for WkmError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization_error_with_source("JSON serialization failed", error)
    }
}
