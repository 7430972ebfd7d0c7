pub mod launcher;

pub use launcher::{build_editor_command, PathLauncher, SystemLauncher};
