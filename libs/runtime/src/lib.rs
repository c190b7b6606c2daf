//! Process-level plumbing shared by the academic-records binaries:
//! layered configuration, home directory resolution and logging bootstrap.

pub mod config;
pub mod logging;
pub mod paths;

pub use config::{
    default_logging_config, AppConfig, AppSection, CliArgs, DatabaseConfig, LoggingConfig,
    Section,
};
