//! Process configuration for the tunnel-profile service
//!
//! - `root`: Main configuration and CLI overrides
//! - `profile`: Which profile to load and its directories
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod profile;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use profile::ProfileConfig;
pub use root::{AppConfig, CliOverrides};
