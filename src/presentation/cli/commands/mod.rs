pub mod config;
pub mod projects;
pub mod repos;

pub use config::*;
pub use projects::*;
pub use repos::*;
