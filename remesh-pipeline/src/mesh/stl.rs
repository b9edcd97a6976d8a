//! STL mesh reading and writing
//!
//! Reading goes through `stl_io`, which deduplicates vertices into an
//! indexed mesh. Writing emits binary STL directly; facet normals are
//! recomputed from the triangle winding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::types::TriMesh;
use crate::error::RemeshError;

const HEADER: &[u8] = b"Binary STL exported by remesh-pipeline";

/// Read an STL file (binary or ASCII) into an indexed triangle mesh
pub fn load_stl(path: &Path) -> Result<TriMesh, RemeshError> {
    let mut file = File::open(path)?;
    let stl = stl_io::read_stl(&mut file).map_err(|e| RemeshError::BadMesh {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let positions: Vec<[f32; 3]> = stl
        .vertices
        .iter()
        .map(|v| [v[0], v[1], v[2]])
        .collect();
    let triangles: Vec<[u32; 3]> = stl
        .faces
        .iter()
        .map(|face| {
            [
                face.vertices[0] as u32,
                face.vertices[1] as u32,
                face.vertices[2] as u32,
            ]
        })
        .collect();

    if triangles.is_empty() {
        return Err(RemeshError::BadMesh {
            path: path.to_path_buf(),
            reason: "no triangles found".to_string(),
        });
    }

    Ok(TriMesh {
        positions,
        triangles,
    })
}

/// Write an indexed triangle mesh as binary STL
pub fn save_stl(mesh: &TriMesh, path: &Path) -> Result<(), RemeshError> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    out.write_all(HEADER)?;
    out.write_all(&vec![0u8; 80 - HEADER.len()])?;
    out.write_all(&(mesh.triangles.len() as u32).to_le_bytes())?;
    for (i, t) in mesh.triangles.iter().enumerate() {
        for p in mesh.facet_normal(i) {
            out.write_all(&p.to_le_bytes())?;
        }
        for &v in t {
            for p in mesh.positions[v as usize] {
                out.write_all(&p.to_le_bytes())?;
            }
        }
        out.write_all(&0u16.to_le_bytes())?; // attribute byte count
    }
    out.flush()?;
    Ok(())
}
