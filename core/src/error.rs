//! Error types for the FileChain core.
//!
//! The simulated flows themselves never fail. Errors only exist at the
//! edges of the crate:
//!
//! - [`ModelError`] - parsing identifiers coming from the UI or the CLI
//! - [`ConfigError`] - loading and validating [`crate::SimulationConfig`]
//! - [`CliError`] - top-level errors of the `filechain` binary
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Model Errors
// =============================================================================

/// Errors when parsing domain identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Unknown navigation target id.
    #[error("Unknown navigation target: {0}")]
    UnknownTarget(String),

    /// Unknown media kind.
    #[error("Unknown media kind: {0}")]
    UnknownMediaKind(String),

    /// Unknown file status.
    #[error("Unknown file status: {0}")]
    UnknownStatus(String),

    /// Unknown profile tab.
    #[error("Unknown profile tab: {0}")]
    UnknownTab(String),
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while loading the simulation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Config file is not valid JSON.
    #[error("Invalid config JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Environment variable holds something that is not a number.
    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: String, value: String },

    /// A field is out of range.
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },
}

// =============================================================================
// CLI Errors (top-level)
// =============================================================================

/// Top-level errors of the `filechain` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Model error.
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// JSON output error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for model parsing.
pub type ModelResult<T> = Result<T, ModelError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
