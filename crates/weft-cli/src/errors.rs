//! Error types for the CLI runtime.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("failed to initialise telemetry: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read {}: {source}", path.display())]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("find-char requires --char")]
    MissingChar,
    #[error("failed to serialise query result: {0}")]
    SerialiseResult(serde_json::Error),
    #[error("failed to write query result: {0}")]
    WriteResult(io::Error),
}
