//! OBJ mesh reading and writing
//!
//! Only geometry is handled: `v` and `f` records. Texture coordinates,
//! normals and material references are skipped on read and never written,
//! since the external remeshing tools only consume positions and faces.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::types::TriMesh;
use crate::error::RemeshError;

/// Parse an OBJ file into an indexed triangle mesh
pub fn load_obj(path: &Path) -> Result<TriMesh, RemeshError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut triangles: Vec<[u32; 3]> = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[0] {
            "v" if parts.len() >= 4 => {
                let x: f32 = parts[1].parse().unwrap_or(0.0);
                let y: f32 = parts[2].parse().unwrap_or(0.0);
                let z: f32 = parts[3].parse().unwrap_or(0.0);
                positions.push([x, y, z]);
            }
            "f" if parts.len() >= 4 => {
                let face: Vec<u32> = parts[1..]
                    .iter()
                    .filter_map(|v| parse_obj_vertex(v))
                    .collect();
                if face.len() < 3 {
                    return Err(bad(path, format!("malformed face on line {}", lineno + 1)));
                }
                // Fan triangulation for polygons with more than 3 vertices
                for i in 1..face.len() - 1 {
                    triangles.push([face[0], face[i], face[i + 1]]);
                }
            }
            _ => {}
        }
    }

    if positions.is_empty() {
        return Err(bad(path, "no vertices found".to_string()));
    }
    let max = positions.len() as u32;
    if triangles.iter().flatten().any(|&i| i >= max) {
        return Err(bad(path, "face index out of range".to_string()));
    }

    Ok(TriMesh {
        positions,
        triangles,
    })
}

/// Write an indexed triangle mesh as OBJ
pub fn save_obj(mesh: &TriMesh, path: &Path) -> Result<(), RemeshError> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    for p in &mesh.positions {
        writeln!(out, "v {} {} {}", p[0], p[1], p[2])?;
    }
    for t in &mesh.triangles {
        // OBJ indices are 1-based
        writeln!(out, "f {} {} {}", t[0] + 1, t[1] + 1, t[2] + 1)?;
    }
    out.flush()?;
    Ok(())
}

/// Parse an OBJ face vertex reference ("v", "v/vt", "v/vt/vn", "v//vn"),
/// returning the zero-based position index
fn parse_obj_vertex(s: &str) -> Option<u32> {
    let first = s.split('/').next()?;
    let idx: u32 = first.parse().ok()?;
    idx.checked_sub(1)
}

fn bad(path: &Path, reason: String) -> RemeshError {
    RemeshError::BadMesh {
        path: path.to_path_buf(),
        reason,
    }
}
