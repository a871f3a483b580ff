//! Command-line front end: `tyname [--types FILE] [--config FILE] TYPE...`.

pub mod args;
pub mod catalog;
pub mod driver;
pub mod tracing_config;
