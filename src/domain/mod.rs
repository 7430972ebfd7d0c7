//! Domain layer: the persisted workspace document and its records.

pub mod entities;
