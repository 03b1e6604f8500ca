//! Shared configuration for the Weft command-line tools.
//!
//! [`Config`] is assembled by `ortho_config` from, in rising precedence,
//! built-in defaults, an optional `.weft.toml` file (or one named by
//! `--config-path` / `WEFT_CONFIG_PATH`), `WEFT_*` environment variables, and
//! command-line flags. `block_comments` has no configuration flag; the
//! `weft` binary offers a per-query `--no-block-comments` switch instead.
//!
//! ```
//! use weft_config::{Config, LogFormat};
//!
//! let config = Config::default();
//! assert_eq!(config.log_filter(), "info");
//! assert_eq!(config.log_format(), LogFormat::Compact);
//! assert!(config.scan_options().block_comments);
//! ```

mod defaults;
mod logging;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use weft_scan::ScanOptions;

pub use defaults::{
    DEFAULT_LOG_FILTER, default_block_comments, default_log_filter, default_log_filter_string,
    default_log_format,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Runtime configuration for the `weft` binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "WEFT")]
pub struct Config {
    /// Tracing filter expression, in `EnvFilter` syntax.
    #[serde(default = "default_log_filter_string")]
    pub log_filter: String,
    /// Log output format.
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,
    /// Upper bound on lines visited by a single scan.
    #[serde(default)]
    pub max_scan_lines: Option<usize>,
    /// Whether `/* ... */` style comments are tracked across lines.
    #[ortho_config(skip_cli)]
    #[serde(default = "default_block_comments")]
    pub block_comments: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            max_scan_lines: None,
            block_comments: default_block_comments(),
        }
    }
}

impl Config {
    /// Returns the tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Returns the scan options every query runs with.
    #[must_use]
    pub const fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            block_comments: self.block_comments,
            max_lines: self.max_scan_lines,
        }
    }
}
