//! Application layer: registries over the workspace document and the
//! repository actions built on top of them.

pub mod services;
pub mod use_cases;
