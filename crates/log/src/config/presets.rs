//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format};

/// Per-field binding traces from `tessera_bind` on top of debug output
const DEVELOPMENT_DIRECTIVES: &str = "debug,tessera_bind=trace";

/// Binding is quiet in production unless a record fails
const PRODUCTION_DIRECTIVES: &str = "info,tessera_bind=warn";

/// Tests see binding traces but not the subscriber's own startup noise
const TEST_DIRECTIVES: &str = "debug,tessera_bind=trace,tessera_log=warn";

/// Service recorded on the production root span
const DEFAULT_SERVICE: &str = "tessera";

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an explicit variable source
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // TESSERA_LOG wins over RUST_LOG
        if let Some(level) = lookup("TESSERA_LOG").or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = lookup("TESSERA_LOG_FORMAT") {
            config.format = Format::from_name(&format);
        }

        config.display.apply_env(&lookup);
        config.service = lookup("TESSERA_SERVICE");

        config
    }

    /// Development configuration: pretty output, binding traced per field
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: DEVELOPMENT_DIRECTIVES.to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Production configuration: flattened JSON under a `tessera` root span
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: PRODUCTION_DIRECTIVES.to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                flatten: true,
                ..DisplayConfig::default()
            },
            service: Some(DEFAULT_SERVICE.to_string()),
        }
    }

    /// Test configuration: compact, no colors or timestamps
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: TEST_DIRECTIVES.to_string(),
            format: Format::Compact,
            display: DisplayConfig {
                colors: false,
                time: false,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }
}
