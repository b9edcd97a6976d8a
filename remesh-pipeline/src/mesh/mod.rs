//! Mesh I/O: indexed triangle meshes, OBJ and STL, extension dispatch
//!
//! OBJ is the neutral interchange format the external tools consume; STL is
//! the persisted result format. [`load`] and [`save`] dispatch on the file
//! extension, so a load-then-save pair is a format conversion.

mod obj;
mod stl;
mod types;

pub use types::TriMesh;

use std::path::Path;

use crate::error::RemeshError;

/// Supported mesh file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFormat {
    Obj,
    Stl,
}

impl MeshFormat {
    /// Detect the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, RemeshError> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("obj") => Ok(MeshFormat::Obj),
            Some("stl") => Ok(MeshFormat::Stl),
            _ => Err(RemeshError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Load a mesh, dispatching on the file extension
pub fn load(path: &Path) -> Result<TriMesh, RemeshError> {
    match MeshFormat::from_path(path)? {
        MeshFormat::Obj => obj::load_obj(path),
        MeshFormat::Stl => stl::load_stl(path),
    }
}

/// Save a mesh, dispatching on the file extension
pub fn save(mesh: &TriMesh, path: &Path) -> Result<(), RemeshError> {
    match MeshFormat::from_path(path)? {
        MeshFormat::Obj => obj::save_obj(mesh, path),
        MeshFormat::Stl => stl::save_stl(mesh, path),
    }
}

/// Convert a mesh file to another format (load + save)
pub fn convert(input: &Path, output: &Path) -> Result<TriMesh, RemeshError> {
    let mesh = load(input)?;
    save(&mesh, output)?;
    Ok(mesh)
}
