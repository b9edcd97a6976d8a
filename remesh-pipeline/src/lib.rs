//! remesh-pipeline library
//!
//! Remeshes 3-D surface models by shelling out to external command-line
//! remeshing tools (instant meshing and robust quad/hex-dominant meshing),
//! bracketed by STL/OBJ conversion and temp-file bookkeeping.
//!
//! The pipeline never talks to a host application directly: all scene access
//! goes through the [`SceneRepository`] capability trait. [`FileScene`] is a
//! file-backed implementation suitable for CLI use and tests; a host
//! embedding supplies its own.

pub mod args;
pub mod config;
pub mod error;
pub mod mesh;
pub mod options;
pub mod pipeline;
pub mod scene;
pub mod tool;
pub mod workdir;

pub use config::RemeshConfig;
pub use error::RemeshError;
pub use mesh::TriMesh;
pub use options::{Dimension, InstantOptions, RobustOptions, SymmetryClass};
pub use pipeline::{Pipeline, RunOutcome};
pub use scene::{FileScene, HandleId, MeshHandle, SceneRepository};
pub use tool::{ProcessResult, ToolKind};
pub use workdir::WorkDirs;

/// Convenience alias used throughout the library
pub type Result<T> = std::result::Result<T, RemeshError>;
