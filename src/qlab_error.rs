use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for the quantization engine
pub type QuantResult<T> = Result<T, QuantError>;

/// Errors raised by the quantization engine.
///
/// Every check happens before any sampling or quantization, the engine
/// itself is total over validated inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantError {
    /// Level count, amplitude bounds, sampling period or signal period out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl QuantError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}

/// Errors raised while exporting reports
#[derive(Error, Debug)]
pub enum ReportError {
    /// Output directory could not be created
    #[error("Failed to create output directory '{path}': {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    /// A report file could not be written
    #[error("Failed to write '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Errors raised while loading a parameter file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
