//! Shared plumbing for the run commands

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use remesh_pipeline::{
    FileScene, MeshHandle, Pipeline, RemeshConfig, RunOutcome, SceneRepository, ToolKind, WorkDirs,
};

/// Build a pipeline from `remesh.toml` plus command-line overrides
pub fn build_pipeline(
    config_path: &Path,
    output_dir: Option<&Path>,
    tool: ToolKind,
    tool_override: Option<&Path>,
) -> Result<Pipeline> {
    let config = RemeshConfig::load_optional(config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;

    let dirs = match output_dir {
        Some(dir) => WorkDirs::new(dir),
        None => config.work_dirs(),
    };
    let mut pipeline = Pipeline::new(dirs);
    for kind in ToolKind::ALL {
        if let Some(path) = config.tool_path(kind) {
            pipeline.set_tool_path(kind, path);
        }
    }
    if let Some(path) = tool_override {
        pipeline.set_tool_path(tool, path);
    }
    Ok(pipeline)
}

/// Load the input mesh into a fresh file-backed scene
pub fn load_input(input: &PathBuf) -> Result<(FileScene, MeshHandle)> {
    let mut scene = FileScene::new();
    let handle = scene
        .load(input)
        .with_context(|| format!("failed to load input mesh {}", input.display()))?;
    if let Some(geometry) = scene.geometry(handle.id) {
        println!(
            "Input: {} ({} vertices, {} triangles)",
            input.display(),
            geometry.vertex_count(),
            geometry.triangle_count()
        );
    }
    Ok((scene, handle))
}

/// Print the result summary shared by both run commands
pub fn report_outcome(scene: &FileScene, outcome: &RunOutcome) {
    match scene.geometry(outcome.handle.id) {
        Some(geometry) => println!(
            "Result: {} ({} vertices, {} triangles)",
            outcome.path.display(),
            geometry.vertex_count(),
            geometry.triangle_count()
        ),
        None => println!("Result: {}", outcome.path.display()),
    }
    println!("Tool time: {:.2}s", outcome.tool_elapsed.as_secs_f64());
}
