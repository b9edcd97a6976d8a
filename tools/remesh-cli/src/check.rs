//! Check command - report where the external tools were found

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use remesh_pipeline::{tool, RemeshConfig, ToolKind};

/// Arguments for the check command
#[derive(Args)]
pub struct CheckArgs {
    /// Path to remesh.toml config file
    #[arg(long, default_value = "remesh.toml")]
    pub config: PathBuf,
}

/// Execute the check command
pub fn execute(args: CheckArgs) -> Result<()> {
    let config = RemeshConfig::load_optional(&args.config)?;

    let mut missing = Vec::new();
    for kind in ToolKind::ALL {
        match tool::find_tool(kind, config.tool_path(kind)) {
            Ok(path) => println!("{}: {}", kind.name(), path.display()),
            Err(_) => {
                println!("{}: NOT FOUND", kind.name());
                missing.push(kind.name());
            }
        }
    }

    let dirs = config.work_dirs();
    println!("working directory: {}", dirs.root().display());

    if !missing.is_empty() {
        anyhow::bail!(
            "missing tools: {}\nInstall them to PATH, place them next to the remesh binary, or set their paths in remesh.toml.",
            missing.join(", ")
        );
    }
    Ok(())
}
