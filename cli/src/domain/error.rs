//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Directory errors ──────────────────────────────────────────────────────────

/// Failures reading the host directory. Always fatal to a dispatch.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("{program} exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Infrastructure state is malformed: {0}")]
    Malformed(String),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Configuration and setup problems detected before any remote work.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing bucket: {bucket:?} or key: {key:?}")]
    MissingObject { bucket: String, key: String },

    #[error("Local path not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Bootstrap script has no file name: {}", .0.display())]
    ScriptName(PathBuf),
}
