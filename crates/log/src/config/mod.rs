//! Logger configuration

mod presets;

use serde::{Deserialize, Serialize};

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `EnvFilter` directive string, e.g. `info,tessera_bind=trace`
    pub level: String,
    /// Output format
    pub format: Format,
    /// Display toggles for the fmt layer
    pub display: DisplayConfig,
    /// Service name recorded on the root span, if any
    pub service: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::default(),
            display: DisplayConfig::default(),
            service: None,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Multi-line, human oriented
    Pretty,
    /// Single line per event
    #[default]
    Compact,
    /// Newline-delimited JSON
    Json,
}

impl Format {
    /// Parse a format name; anything unrecognized is `Compact`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "pretty" => Self::Pretty,
            "json" => Self::Json,
            _ => Self::Compact,
        }
    }
}

/// Display toggles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct DisplayConfig {
    pub time: bool,
    pub target: bool,
    /// File and line of the callsite
    pub source: bool,
    pub thread_ids: bool,
    /// ANSI colors (ignored by `Json`)
    pub colors: bool,
    /// Lift event fields to the top level of JSON records
    pub flatten: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            target: true,
            source: false,
            thread_ids: false,
            colors: true,
            flatten: false,
        }
    }
}

impl DisplayConfig {
    /// Apply `TESSERA_LOG_<FLAG>` overrides read through `lookup`.
    /// Accepted values are `1`/`true`/`yes`/`on` and `0`/`false`/`no`/`off`.
    pub(crate) fn apply_env(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        let flags: [(&str, &mut bool); 6] = [
            ("TESSERA_LOG_TIME", &mut self.time),
            ("TESSERA_LOG_TARGET", &mut self.target),
            ("TESSERA_LOG_SOURCE", &mut self.source),
            ("TESSERA_LOG_THREAD_IDS", &mut self.thread_ids),
            ("TESSERA_LOG_COLORS", &mut self.colors),
            ("TESSERA_LOG_FLATTEN", &mut self.flatten),
        ];
        for (key, flag) in flags {
            if let Some(value) = lookup(key).as_deref().and_then(parse_flag) {
                *flag = value;
            }
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("pretty", Format::Pretty)]
    #[case(" JSON ", Format::Json)]
    #[case("compact", Format::Compact)]
    #[case("logfmt", Format::Compact)]
    fn test_format_from_name(#[case] name: &str, #[case] expected: Format) {
        assert_eq!(Format::from_name(name), expected);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: Config = serde_json::from_str(r#"{"level":"debug","format":"json"}"#).unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, Format::Json);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_display_env_overrides() {
        let mut display = DisplayConfig::default();
        display.apply_env(&|key: &str| match key {
            "TESSERA_LOG_TIME" => Some("off".to_string()),
            "TESSERA_LOG_SOURCE" => Some("1".to_string()),
            "TESSERA_LOG_COLORS" => Some("maybe".to_string()),
            _ => None,
        });
        assert!(!display.time);
        assert!(display.source);
        assert!(display.colors);
    }
}
