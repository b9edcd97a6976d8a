//! Universal error type for the remeshing pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the pipeline and its supporting modules
#[derive(Error, Debug)]
pub enum RemeshError {
    /// External tool executable could not be located
    #[error("{tool} executable not found; install it to PATH, place it next to this binary, or set its path in remesh.toml")]
    MissingBinary {
        /// Display name of the tool that was probed for
        tool: &'static str,
    },

    /// Source mesh handle has no resolvable backing file
    #[error("mesh '{name}' has no backing file to export")]
    NoBackingFile { name: String },

    /// Job parameter outside the range the external tool accepts
    #[error("{what} = {value} is out of range [{min}, {max}]")]
    InvalidOption {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// External tool exited with a nonzero status
    #[error("{tool} failed with exit code {code:?}:\n{stderr}")]
    ProcessFailure {
        tool: &'static str,
        code: Option<i32>,
        stderr: String,
    },

    /// Expected tool output file was never produced
    #[error("expected output {path:?} was not produced by the external tool")]
    MissingOutput { path: PathBuf },

    /// Mesh file could not be parsed
    #[error("failed to parse mesh {path:?}: {reason}")]
    BadMesh { path: PathBuf, reason: String },

    /// Unsupported mesh file extension
    #[error("unsupported mesh format {path:?} (expected .obj or .stl)")]
    UnsupportedFormat { path: PathBuf },

    /// Scene handle is no longer present
    #[error("stale mesh handle (already removed from the scene)")]
    StaleHandle,

    /// A run is already mid-pipeline
    #[error("a remeshing run is already in progress")]
    Busy,

    /// Config file could not be parsed
    #[error("failed to parse config {path:?}: {reason}")]
    BadConfig { path: PathBuf, reason: String },

    /// I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
