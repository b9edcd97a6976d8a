//! remesh - CLI front end for the remeshing pipeline
//!
//! # Commands
//!
//! - `remesh instant <mesh>` - remesh with instant field-aligned meshing
//! - `remesh robust <mesh>` - remesh with robust quad/hex-dominant meshing
//! - `remesh convert <mesh> -o <out>` - convert a mesh file between STL and OBJ
//! - `remesh check` - report where the external tools were found
//!
//! Tool locations and the working directory can be overridden in
//! `remesh.toml`:
//!
//! ```toml
//! [tools]
//! instant_meshes = "/opt/remeshing/instantMeshes"
//! rhdm = "/opt/remeshing/rhdm"
//!
//! [output]
//! dir = "/home/user/remeshing"
//! ```

mod check;
mod common;
mod convert;
mod instant;
mod robust;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// CLI front end for the remeshing pipeline
#[derive(Parser)]
#[command(name = "remesh")]
#[command(about = "Remesh surface models with external meshing tools")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remesh with instant field-aligned meshing (instantMeshes)
    Instant(instant::InstantArgs),

    /// Remesh with robust quad/hex-dominant meshing (rhdm)
    Robust(robust::RobustArgs),

    /// Convert a mesh file between STL and OBJ
    Convert(convert::ConvertArgs),

    /// Report where the external remeshing tools were found
    Check(check::CheckArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Instant(args) => instant::execute(args),
        Commands::Robust(args) => robust::execute(args),
        Commands::Convert(args) => convert::execute(args),
        Commands::Check(args) => check::execute(args),
    }
}
