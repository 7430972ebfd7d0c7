//! # wkm - Workspace Manager
//!
//! `wkm` is a command-line tool for organizing projects and repositories into a
//! single workspace file. One project is active at a time; repository commands
//! always operate on the active project.
//!
//! ## Quick Start
//!
//! ```bash
//! wkm projects create web              # creates the project and makes it active
//! wkm repos create api --path /srv/api
//! wkm repos get-path api               # prints /srv/api
//! wkm config set editor code
//! wkm repos open api                   # runs: code '/srv/api'
//! ```
//!
//! The workspace lives in `~/.wkm.json` unless `--config-file <DIR>` (or
//! `WKM_CONFIG_DIR`) points somewhere else:
//!
//! ```json
//! {
//!   "projects": [
//!     { "name": "web", "repos": [ { "name": "api", "path": "/srv/api" } ] }
//!   ],
//!   "config": { "editor": "code", "project": "web" }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`domain`]: the persisted records ([`domain::entities::Workspace`],
//!   [`domain::entities::Project`], [`domain::entities::Repository`])
//! - [`application`]: project and repository registries plus repository actions
//! - [`infrastructure`]: the workspace file store and the clipboard/editor launcher
//! - [`presentation`]: CLI parsing, dispatch and terminal output
//! - [`common`]: error type, result helpers and logging
//!
//! ## Using the Library
//!
//! ```rust,no_run
//! use wkm::application::services::{ProjectRegistry, RepositoryRegistry};
//! use wkm::infrastructure::filesystem::{StoreConfig, WorkspaceStore};
//!
//! # fn example() -> wkm::Result<()> {
//! let store = WorkspaceStore::from_config(&StoreConfig::new(None))?;
//! let mut workspace = store.load()?;
//!
//! ProjectRegistry::new(&mut workspace).create("web");
//! RepositoryRegistry::for_active_project(&mut workspace)?
//!     .create("api", Some("/srv/api".to_string()))?;
//!
//! store.persist(&workspace)?;
//! # Ok(())
//! # }
//! ```

// Documentation attributes
#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::WkmError;
pub use crate::common::result::WkmResult as Result;
