//! Logger builder implementation

use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt,
    layer::{Layered, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{Config, DisplayConfig, Format};
use crate::error::{LogError, LogResult};

type Filtered = Layered<EnvFilter, Registry>;
type BoxedLayer = Box<dyn Layer<Filtered> + Send + Sync + 'static>;

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard that keeps the root span entered
///
/// Dropping it exits the span; the global subscriber stays installed.
#[derive(Debug)]
#[must_use = "dropping the guard exits the root span"]
pub struct LoggerGuard {
    _root_span: Option<tracing::span::EnteredSpan>,
}

/// Apply the shared display toggles to any fmt layer, then box it.
/// `without_time` changes the layer type, hence the macro.
macro_rules! boxed_fmt_layer {
    ($layer:expr, $display:expr) => {{
        let display: &DisplayConfig = $display;
        let layer = $layer
            .with_ansi(display.colors)
            .with_target(display.target)
            .with_file(display.source)
            .with_line_number(display.source)
            .with_thread_ids(display.thread_ids);
        if display.time {
            Box::new(layer) as BoxedLayer
        } else {
            Box::new(layer.without_time()) as BoxedLayer
        }
    }};
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Validate the filter without installing anything
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::Filter(format!("{}: {e}", self.config.level)))
    }

    /// Build and install the global subscriber
    ///
    /// Fails with [`LogError::Filter`] for an unparsable level string and with
    /// [`LogError::Init`] when a global subscriber is already set.
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;
        let display = &self.config.display;

        let fmt_layer = match self.config.format {
            Format::Pretty => boxed_fmt_layer!(fmt::layer().pretty(), display),
            Format::Compact => boxed_fmt_layer!(fmt::layer().compact(), display),
            Format::Json => boxed_fmt_layer!(
                fmt::layer().json().flatten_event(display.flatten),
                display
            ),
        };

        Registry::default()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))?;

        let root_span = self
            .config
            .service
            .as_deref()
            .map(|service| tracing::info_span!("app", service).entered());

        tracing::debug!(
            level = %self.config.level,
            format = ?self.config.format,
            "logger initialized"
        );

        Ok(LoggerGuard {
            _root_span: root_span,
        })
    }
}
