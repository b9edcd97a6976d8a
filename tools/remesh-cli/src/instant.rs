//! Instant meshing command

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use remesh_pipeline::{InstantOptions, SymmetryClass, ToolKind};

use crate::common;

/// Arguments for the instant command
#[derive(Args)]
pub struct InstantArgs {
    /// Input mesh file (.stl or .obj)
    pub input: PathBuf,

    /// Path to remesh.toml config file
    #[arg(long, default_value = "remesh.toml")]
    pub config: PathBuf,

    /// Working directory (overrides config; results land in <dir>/outputs)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Explicit path to the instantMeshes executable
    #[arg(long)]
    pub tool: Option<PathBuf>,

    /// Desired face count of the output mesh [1000, 10000]
    #[arg(short = 'f', long, default_value_t = 2800)]
    pub faces: u32,

    /// Smoothing & ray tracing reprojection steps [0, 10]
    #[arg(short = 'S', long, default_value_t = 2)]
    pub smoothing: u32,

    /// Point cloud mode: adjacent points to consider [5, 20]
    #[arg(short = 'k', long, default_value_t = 10)]
    pub neighbors: u32,

    /// Dihedral angle threshold for creases [-1, 90]; -1 means sharp creases
    #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
    pub crease_angle: i32,

    /// Orientation/position symmetry: 6/6 (triangles), 2/4 or 4/4 (quads)
    #[arg(long, default_value = "6/6", value_parser = parse_symmetry)]
    pub symmetry: SymmetryClass,

    /// Measure smoothness directly on the surface
    #[arg(long)]
    pub intrinsic: bool,

    /// Generate a tri/quad dominant mesh instead of a pure one
    #[arg(long)]
    pub dominant: bool,

    /// Prefer (slower) deterministic algorithms
    #[arg(long)]
    pub deterministic: bool,
}

fn parse_symmetry(s: &str) -> Result<SymmetryClass, String> {
    match s {
        "6/6" => Ok(SymmetryClass::Triangles66),
        "2/4" => Ok(SymmetryClass::Quads24),
        "4/4" => Ok(SymmetryClass::Quads44),
        other => Err(format!("unknown symmetry '{other}' (expected 6/6, 2/4 or 4/4)")),
    }
}

/// Execute the instant command
pub fn execute(args: InstantArgs) -> Result<()> {
    let pipeline = common::build_pipeline(
        &args.config,
        args.output_dir.as_deref(),
        ToolKind::InstantMeshes,
        args.tool.as_deref(),
    )?;

    let opts = InstantOptions {
        face_count: args.faces,
        smoothing_steps: args.smoothing,
        neighbors: args.neighbors,
        crease_angle: args.crease_angle,
        symmetry: args.symmetry,
        intrinsic: args.intrinsic,
        dominant: args.dominant,
        deterministic: args.deterministic,
    };

    let (mut scene, input) = common::load_input(&args.input)?;
    let outcome = pipeline.run_instant(&mut scene, input.id, &opts)?;
    common::report_outcome(&scene, &outcome);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetry_strings() {
        assert_eq!(parse_symmetry("6/6"), Ok(SymmetryClass::Triangles66));
        assert_eq!(parse_symmetry("2/4"), Ok(SymmetryClass::Quads24));
        assert_eq!(parse_symmetry("4/4"), Ok(SymmetryClass::Quads44));
        assert!(parse_symmetry("3/3").is_err());
    }
}
