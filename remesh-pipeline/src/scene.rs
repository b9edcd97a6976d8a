//! Scene access capability
//!
//! The pipeline never talks to a concrete host application. Everything it
//! needs from a scene graph is expressed by [`SceneRepository`]; a host
//! embedding implements the trait over its own object model. [`FileScene`]
//! is the file-backed implementation used by the CLI and the tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::RemeshError;
use crate::mesh::{self, TriMesh};

/// Identifier of a mesh held by a scene
pub type HandleId = u64;

/// Reference to a mesh held by a scene.
///
/// Owned by the scene; the pipeline only reads the name and path and toggles
/// visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshHandle {
    pub id: HandleId,
    /// Display name shown to the user
    pub name: String,
    /// Backing file, if the mesh has been persisted
    pub path: Option<PathBuf>,
    pub visible: bool,
}

/// What the pipeline needs from a host scene graph
pub trait SceneRepository {
    /// Load a mesh file into the scene, returning its new handle
    fn load(&mut self, path: &Path) -> Result<MeshHandle, RemeshError>;

    /// Persist the mesh behind `handle` to `path` (format chosen by extension)
    fn save(&mut self, handle: HandleId, path: &Path) -> Result<(), RemeshError>;

    /// Remove a mesh from the scene
    fn remove(&mut self, handle: HandleId) -> Result<(), RemeshError>;

    /// Show or hide a mesh
    fn set_visible(&mut self, handle: HandleId, visible: bool) -> Result<(), RemeshError>;

    /// Backing file path of a mesh, if it has one
    fn resolve_path(&self, handle: HandleId) -> Option<PathBuf>;

    /// Display name of a mesh, if it is still present
    fn display_name(&self, handle: HandleId) -> Option<String>;

    /// Snapshot of all handles currently in the scene
    fn handles(&self) -> Vec<MeshHandle>;
}

#[derive(Debug, Clone)]
struct SceneEntry {
    name: String,
    path: Option<PathBuf>,
    visible: bool,
    mesh: TriMesh,
}

/// In-memory scene whose meshes are backed by files on disk.
///
/// `load`/`save` delegate to the mesh I/O layer, so saving a handle under a
/// different extension converts the format.
#[derive(Debug, Default)]
pub struct FileScene {
    entries: BTreeMap<HandleId, SceneEntry>,
    next_id: HandleId,
}

impl FileScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an in-memory mesh with no backing file (never persisted)
    pub fn insert(&mut self, name: &str, mesh: TriMesh) -> MeshHandle {
        let id = self.alloc_id();
        self.entries.insert(
            id,
            SceneEntry {
                name: name.to_string(),
                path: None,
                visible: true,
                mesh,
            },
        );
        MeshHandle {
            id,
            name: name.to_string(),
            path: None,
            visible: true,
        }
    }

    /// Handle for an id, if still present
    pub fn handle(&self, id: HandleId) -> Option<MeshHandle> {
        self.entries.get(&id).map(|e| MeshHandle {
            id,
            name: e.name.clone(),
            path: e.path.clone(),
            visible: e.visible,
        })
    }

    /// Geometry behind a handle
    pub fn geometry(&self, id: HandleId) -> Option<&TriMesh> {
        self.entries.get(&id).map(|e| &e.mesh)
    }

    fn alloc_id(&mut self) -> HandleId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn entry(&self, id: HandleId) -> Result<&SceneEntry, RemeshError> {
        self.entries.get(&id).ok_or(RemeshError::StaleHandle)
    }

    fn entry_mut(&mut self, id: HandleId) -> Result<&mut SceneEntry, RemeshError> {
        self.entries.get_mut(&id).ok_or(RemeshError::StaleHandle)
    }
}

impl SceneRepository for FileScene {
    fn load(&mut self, path: &Path) -> Result<MeshHandle, RemeshError> {
        let geometry = mesh::load(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "mesh".to_string());
        let id = self.alloc_id();
        self.entries.insert(
            id,
            SceneEntry {
                name: name.clone(),
                path: Some(path.to_path_buf()),
                visible: true,
                mesh: geometry,
            },
        );
        Ok(MeshHandle {
            id,
            name,
            path: Some(path.to_path_buf()),
            visible: true,
        })
    }

    fn save(&mut self, handle: HandleId, path: &Path) -> Result<(), RemeshError> {
        let geometry = self.entry(handle)?.mesh.clone();
        mesh::save(&geometry, path)?;
        self.entry_mut(handle)?.path = Some(path.to_path_buf());
        Ok(())
    }

    fn remove(&mut self, handle: HandleId) -> Result<(), RemeshError> {
        self.entries
            .remove(&handle)
            .map(|_| ())
            .ok_or(RemeshError::StaleHandle)
    }

    fn set_visible(&mut self, handle: HandleId, visible: bool) -> Result<(), RemeshError> {
        self.entry_mut(handle)?.visible = visible;
        Ok(())
    }

    fn resolve_path(&self, handle: HandleId) -> Option<PathBuf> {
        self.entries.get(&handle).and_then(|e| e.path.clone())
    }

    fn display_name(&self, handle: HandleId) -> Option<String> {
        self.entries.get(&handle).map(|e| e.name.clone())
    }

    fn handles(&self) -> Vec<MeshHandle> {
        self.entries
            .keys()
            .filter_map(|&id| self.handle(id))
            .collect()
    }
}
