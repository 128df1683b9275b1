use crate::errors::{ConfigurationError, WatsonResult};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, for development.
    Pretty,
    /// One JSON object per event.
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Used when `RUST_LOG` is unset or unparsable.
    pub level: LogLevel,
    pub format: LogFormat,
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            include_target: true,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_target(mut self, include: bool) -> Self {
        self.include_target = include;
        self
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::from(self.level).into()))
    }
}

/// Installs a global subscriber for `config`.
///
/// Fails with [`ConfigurationError::Logging`] when a global subscriber is
/// already installed.
pub fn init_logging(config: &LoggingConfig) -> WatsonResult<()> {
    let registry = tracing_subscriber::registry().with(config.filter());

    let result = match config.format {
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_target(config.include_target))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(config.include_target))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_target(config.include_target))
            .try_init(),
    };

    result.map_err(|e| ConfigurationError::Logging(e.to_string()).into())
}
