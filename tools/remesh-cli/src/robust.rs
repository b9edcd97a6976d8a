//! Robust quad/hex-dominant meshing command

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use remesh_pipeline::{Dimension, RobustOptions, ToolKind};

use crate::common;

/// Arguments for the robust command
#[derive(Args)]
pub struct RobustArgs {
    /// Input mesh file (.stl or .obj)
    pub input: PathBuf,

    /// Path to remesh.toml config file
    #[arg(long, default_value = "remesh.toml")]
    pub config: PathBuf,

    /// Working directory (overrides config; results land in <dir>/outputs)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Explicit path to the rhdm executable
    #[arg(long)]
    pub tool: Option<PathBuf>,

    /// Output dimension: 2 or 3
    #[arg(short = 'd', long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(2..=3))]
    pub dimension: u32,

    /// Element scale [2, 10]
    #[arg(short = 's', long, default_value_t = 3)]
    pub scale: u32,

    /// Smoothing iteration count [5, 20]
    #[arg(short = 'S', long, default_value_t = 10)]
    pub smoothing: u32,
}

/// Execute the robust command
pub fn execute(args: RobustArgs) -> Result<()> {
    let pipeline = common::build_pipeline(
        &args.config,
        args.output_dir.as_deref(),
        ToolKind::RobustQuadHex,
        args.tool.as_deref(),
    )?;

    let opts = RobustOptions {
        dimension: if args.dimension == 3 {
            Dimension::Three
        } else {
            Dimension::Two
        },
        scale: args.scale,
        smoothing_iterations: args.smoothing,
    };

    let (mut scene, input) = common::load_input(&args.input)?;
    let outcome = pipeline.run_robust(&mut scene, input.id, &opts)?;
    common::report_outcome(&scene, &outcome);
    Ok(())
}
