//! Error types for the Opsbench evaluation pipeline.
//!
//! Uses `thiserror` for public API error types with structured variants
//! covering scenario loading, agent invocation, and result reporting. The
//! scoring subsystem itself is infallible by design: malformed input degrades
//! the affected score instead of producing an error.

use std::path::PathBuf;

/// Top-level error type for the Opsbench core library.
#[derive(Debug, thiserror::Error)]
pub enum OpsbenchError {
    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("Agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from locating and parsing scenario fixtures.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("Scenario '{id}' not found at {path}")]
    NotFound { id: String, path: PathBuf },

    #[error("Failed to read fixture {path}: {source}")]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse fixture {path}: {message}")]
    FixtureParse { path: PathBuf, message: String },

    #[error("Failed to enumerate scenarios under {path}: {source}")]
    ListFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from agent adapters.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("Agent '{agent}' invocation failed: {message}")]
    InvocationFailed { agent: String, message: String },

    #[error("Agent '{agent}' returned unparseable output: {message}")]
    MalformedOutput { agent: String, message: String },

    #[error("Agent '{agent}' timed out after {timeout_secs}s")]
    Timeout { agent: String, timeout_secs: u64 },
}

/// Errors from persisting evaluation results.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Scenario name cannot be empty")]
    EmptyScenarioName,

    #[error("Failed to create run directory {path}: {source}")]
    RunDirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write results file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report for scenario '{scenario}': {source}")]
    SerializeFailed {
        scenario: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {message}")]
    LoadFailed { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Convenience result alias using [`OpsbenchError`].
pub type Result<T> = std::result::Result<T, OpsbenchError>;
