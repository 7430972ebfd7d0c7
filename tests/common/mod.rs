//! Common test utilities and helpers
//!
//! Shared by the integration tests to set up isolated workspace files and to
//! drive the `wkm` binary.
#![allow(dead_code)]

pub mod assertion_helpers;
pub mod test_fixtures;
pub mod test_helpers;
