//! External remeshing tool discovery and invocation

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

use crate::error::RemeshError;

/// The two external remeshing executables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// Instant field-aligned meshing (`instantMeshes`)
    InstantMeshes,
    /// Robust quad/hex-dominant meshing (`rhdm`)
    RobustQuadHex,
}

impl ToolKind {
    pub const ALL: [ToolKind; 2] = [ToolKind::InstantMeshes, ToolKind::RobustQuadHex];

    /// Bare executable name (no platform suffix)
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::InstantMeshes => "instantMeshes",
            ToolKind::RobustQuadHex => "rhdm",
        }
    }

    /// Executable file name, with the `.exe` suffix under Windows
    pub fn exe_name(self) -> &'static str {
        match self {
            ToolKind::InstantMeshes => {
                if cfg!(windows) {
                    "instantMeshes.exe"
                } else {
                    "instantMeshes"
                }
            }
            ToolKind::RobustQuadHex => {
                if cfg!(windows) {
                    "rhdm.exe"
                } else {
                    "rhdm"
                }
            }
        }
    }

    /// Tag embedded in the display names of result meshes
    pub fn tag(self) -> &'static str {
        match self {
            ToolKind::InstantMeshes => "instant",
            ToolKind::RobustQuadHex => "robust",
        }
    }

    /// Suffix appended to the base name of the final result file
    pub fn result_suffix(self) -> &'static str {
        match self {
            ToolKind::InstantMeshes => "_IM",
            ToolKind::RobustQuadHex => "_RM",
        }
    }

    /// Fixed name of the interchange file the tool writes into `outputs/`
    pub fn interchange_output(self) -> &'static str {
        match self {
            ToolKind::InstantMeshes => "instantMeshing.obj",
            ToolKind::RobustQuadHex => "robQuadHexDomMeshing.obj",
        }
    }
}

/// Locate a tool executable.
///
/// Probe order: explicit override from config, then PATH, then a sibling of
/// the current executable (distributed bundle layout).
pub fn find_tool(kind: ToolKind, explicit: Option<&Path>) -> Result<PathBuf, RemeshError> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        tracing::warn!(tool = kind.name(), path = %path.display(), "configured tool path does not exist");
        return Err(RemeshError::MissingBinary { tool: kind.name() });
    }

    if let Ok(path) = which::which(kind.name()) {
        return Ok(path);
    }

    if let Ok(current_exe) = std::env::current_exe() {
        if let Some(exe_dir) = current_exe.parent() {
            let sibling = exe_dir.join(kind.exe_name());
            if sibling.is_file() {
                return Ok(sibling);
            }
        }
    }

    Err(RemeshError::MissingBinary { tool: kind.name() })
}

/// Outcome of one external tool invocation
#[derive(Debug)]
pub struct ProcessResult {
    /// Exit code, if the process terminated normally
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    /// Wall-clock time the tool ran for
    pub elapsed: Duration,
}

impl ProcessResult {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Run a tool synchronously to completion, capturing stdout and stderr.
///
/// Blocks until the process exits; no timeout is enforced, so a hung tool
/// hangs the run.
pub fn run_tool(exe: &Path, args: &[OsString]) -> Result<ProcessResult, RemeshError> {
    tracing::info!(
        "executing: {} {}",
        exe.display(),
        args.iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    );

    let started = Instant::now();
    let output = Command::new(exe).args(args).output()?;
    let elapsed = started.elapsed();

    let result = ProcessResult {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        elapsed,
    };
    tracing::debug!(code = ?result.code, elapsed_ms = elapsed.as_millis() as u64, "tool finished");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exe_names_gain_suffix_only_on_windows() {
        for kind in ToolKind::ALL {
            if cfg!(windows) {
                assert!(kind.exe_name().ends_with(".exe"));
            } else {
                assert_eq!(kind.exe_name(), kind.name());
            }
        }
    }

    #[test]
    fn missing_explicit_path_is_rejected() {
        let err = find_tool(
            ToolKind::InstantMeshes,
            Some(Path::new("/nonexistent/instantMeshes")),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RemeshError::MissingBinary { tool } if tool == "instantMeshes"
        ));
    }

    #[test]
    fn explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let fake = dir.path().join(ToolKind::RobustQuadHex.exe_name());
        std::fs::write(&fake, b"").unwrap();
        let found = find_tool(ToolKind::RobustQuadHex, Some(&fake)).unwrap();
        assert_eq!(found, fake);
    }

    #[cfg(unix)]
    #[test]
    fn run_tool_captures_exit_and_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fail.sh");
        std::fs::write(&script, "#!/bin/sh\necho oops >&2\nexit 3\n").unwrap();
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let result = run_tool(&script, &[]).unwrap();
        assert_eq!(result.code, Some(3));
        assert!(!result.success());
        assert!(result.stderr.contains("oops"));
    }
}
