//! Standalone STL/OBJ conversion command

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use remesh_pipeline::mesh;

/// Arguments for the convert command
#[derive(Args)]
pub struct ConvertArgs {
    /// Input mesh file (.stl or .obj)
    pub input: PathBuf,

    /// Output mesh file; defaults to the input with the other extension
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the convert command
pub fn execute(args: ConvertArgs) -> Result<()> {
    let output = match args.output {
        Some(path) => path,
        None => default_output(&args.input)?,
    };

    let converted = mesh::convert(&args.input, &output).with_context(|| {
        format!(
            "failed to convert {} to {}",
            args.input.display(),
            output.display()
        )
    })?;

    println!(
        "Converted {} -> {} ({} vertices, {} triangles)",
        args.input.display(),
        output.display(),
        converted.vertex_count(),
        converted.triangle_count()
    );
    Ok(())
}

/// Swap .stl for .obj (and vice versa) on the input path
fn default_output(input: &PathBuf) -> Result<PathBuf> {
    let ext = input
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let other = match ext.as_deref() {
        Some("stl") => "obj",
        Some("obj") => "stl",
        _ => anyhow::bail!(
            "cannot pick a default output for {} (expected .stl or .obj); pass --output",
            input.display()
        ),
    };
    Ok(input.with_extension(other))
}
