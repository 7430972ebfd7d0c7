use std::process::{Command, Stdio};
use tracing::debug;

use crate::common::error::WkmError;
use crate::common::result::WkmResult;

/// Placeholder substituted with the repository path in an editor command
pub const PATH_PLACEHOLDER: &str = "{path}";

/// Side-effecting actions performed on a resolved repository path
#[cfg_attr(test, mockall::automock)]
pub trait PathLauncher {
    /// Place the path on the system clipboard
    fn copy_to_clipboard(&self, path: &str) -> WkmResult<()>;

    /// Open the path with the configured editor command
    fn open_in_editor(&self, editor: &str, path: &str) -> WkmResult<()>;
}

/// Launcher backed by the system clipboard and shell
#[derive(Debug, Clone, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl PathLauncher for SystemLauncher {
    fn copy_to_clipboard(&self, path: &str) -> WkmResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| WkmError::clipboard_error(e.to_string()))?;
        clipboard
            .set_text(path.to_string())
            .map_err(|e| WkmError::clipboard_error(e.to_string()))?;
        debug!(path, "Copied path to clipboard");
        Ok(())
    }

    fn open_in_editor(&self, editor: &str, path: &str) -> WkmResult<()> {
        let command_line = build_editor_command(editor, path);
        debug!(command = %command_line, "Launching editor");

        let status = shell_command(&command_line)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                WkmError::command_error_with_source("Failed to start editor", &command_line, e)
            })?;

        if !status.success() {
            return Err(WkmError::command_error(
                "Editor exited with a failure status",
                command_line,
                status.code(),
            ));
        }
        Ok(())
    }
}

/// Build the shell command line that opens `path` with `editor`.
///
/// `{path}` in the editor template is replaced with the quoted path;
/// without a placeholder the quoted path is appended.
pub fn build_editor_command(editor: &str, path: &str) -> String {
    let quoted = quote_path(path);
    if editor.contains(PATH_PLACEHOLDER) {
        editor.replace(PATH_PLACEHOLDER, &quoted)
    } else {
        format!("{} {}", editor.trim_end(), quoted)
    }
}

#[cfg(not(windows))]
fn quote_path(path: &str) -> String {
    format!("'{}'", path.replace('\'', r"'\''"))
}

#[cfg(windows)]
fn quote_path(path: &str) -> String {
    format!("\"{}\"", path)
}

#[cfg(not(windows))]
fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(command_line);
    command
}

#[cfg(windows)]
fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(command_line);
    command
}
