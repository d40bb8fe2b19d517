//! # tessera-log
//!
//! Logging setup shared by the tessera crates: a `tracing-subscriber`
//! registry with an `EnvFilter` and one fmt layer, configured from
//! [`Config`] presets or the environment.
//!
//! ```no_run
//! let _guard = tessera_log::init().expect("logger");
//! tracing::info!("ready");
//! ```

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

/// Install the global subscriber configured from the environment
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::from_env())
}

/// Install the global subscriber with an explicit configuration
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
