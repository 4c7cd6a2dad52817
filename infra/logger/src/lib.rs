//! # Logger
//!
//! Global `tracing` subscriber setup for the workspace binaries: a compact
//! console layer on stderr, an optional rolling file layer (plain or JSON) written through
//! a non-blocking worker, and `RUST_LOG`-style filtering.
//!
//! Libraries in the workspace only emit events through `tracing`; installing a
//! subscriber is left to the application.
//!
//! ## Example
//!
//! ```rust
//! # use pclass_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder("my-app")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Configures and installs the global tracing subscriber.
#[derive(Debug)]
#[must_use = "The builder must be initialized with `init()` to install the subscriber."]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileOutput>,
}

#[derive(Debug)]
struct FileOutput {
    path: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl LoggerBuilder {
    /// Minimum level emitted when neither `RUST_LOG` nor [`Self::env_filter`] says otherwise.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Programmatic filter directives (e.g., `pclass=debug`); invalid directives fail [`Self::init`].
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Writes rolling log files named `<name>.<date>.log` under `path`.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(FileOutput {
            path: path.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        self
    }

    /// File rotation strategy; ignored without [`Self::path`].
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.rotation = rotation;
        }
        self
    }

    /// Number of rotated files kept; ignored without [`Self::path`].
    pub const fn max_files(mut self, max: usize) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.max_files = max;
        }
        self
    }

    /// JSON lines in the log file; ignored without [`Self::path`].
    pub const fn json(mut self) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.json = true;
        }
        self
    }

    /// Installs the subscriber.
    ///
    /// The returned [`Logger`] owns the file worker guard and must outlive all logging.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set
    /// and [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;

        let filter = self.build_env_filter()?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if self.console {
            layers.push(layer().compact().with_writer(std::io::stderr).with_ansi(true).boxed());
        }

        let guard = match self.file {
            Some(file) => {
                fs::create_dir_all(&file.path).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: format!("Failed to create path: {}", file.path.display()).into(),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(file.rotation)
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(file.max_files)
                    .build(&file.path)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if file.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::invalid("No logging layers enabled. Enable console or file output."));
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::invalid("Logger name cannot be empty"));
        }
        if self.file.as_ref().is_some_and(|file| file.max_files == 0) {
            return Err(LoggerError::invalid("max_files must be greater than zero"));
        }
        Ok(())
    }

    fn build_env_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        self.env_filter.as_ref().map_or_else(
            || Ok(builder.from_env_lossy()),
            |filter| {
                builder.parse(filter).map_err(|e| {
                    LoggerError::invalid(format!("Invalid env filter '{filter}': {e}"))
                })
            },
        )
    }
}

/// Handle to the installed logging system.
///
/// Holds the non-blocking file worker; dropping it flushes pending lines.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring a subscriber; `name` prefixes rolling log files.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            console: true,
            level: LevelFilter::INFO,
            env_filter: None,
            file: None,
        }
    }

    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_initial_state() {
        let builder = Logger::builder("test-app").env_filter("pclass=debug");
        assert!(builder.console);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert_eq!(builder.env_filter.as_deref(), Some("pclass=debug"));
        assert!(builder.file.is_none());
    }

    #[test]
    fn file_options_apply_after_path() {
        let builder = Logger::builder("test-app").path("logs").max_files(5).json();
        let file = builder.file.expect("file output configured");
        assert_eq!(file.max_files, 5);
        assert!(file.json);
        assert_eq!(file.path, PathBuf::from("logs"));
    }

    #[test]
    fn file_options_without_path_are_ignored() {
        let builder = Logger::builder("test-app").max_files(0).json();
        assert!(builder.file.is_none());
        assert!(builder.validate().is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Logger::builder("  ").init().expect_err("empty name should fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn zero_max_files_is_rejected() {
        let err = Logger::builder("test-app").path("logs").max_files(0).init().expect_err("zero files");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn invalid_env_filter_is_rejected() {
        let err = Logger::builder("test-app").env_filter("pclass=loud").init().expect_err("bad filter");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn no_layers_is_rejected() {
        let err = Logger::builder("test-app").console(false).init().expect_err("no layers");
        assert!(err.to_string().contains("No logging layers enabled"));
    }
}
