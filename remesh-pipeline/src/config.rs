//! `remesh.toml` configuration
//!
//! Optional overrides for tool locations and the working root:
//!
//! ```toml
//! [tools]
//! instant_meshes = "/opt/remeshing/instantMeshes"
//! rhdm = "/opt/remeshing/rhdm"
//!
//! [output]
//! dir = "/home/user/remeshing"
//! ```
//!
//! Everything has a code default; a missing file is not an error.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::RemeshError;
use crate::tool::ToolKind;
use crate::workdir::WorkDirs;

/// Parsed `remesh.toml`
#[derive(Debug, Default, Deserialize)]
pub struct RemeshConfig {
    #[serde(default)]
    pub tools: ToolsSection,
    #[serde(default)]
    pub output: OutputSection,
}

/// Explicit tool executable locations
#[derive(Debug, Default, Deserialize)]
pub struct ToolsSection {
    pub instant_meshes: Option<PathBuf>,
    pub rhdm: Option<PathBuf>,
}

/// Working directory override
#[derive(Debug, Default, Deserialize)]
pub struct OutputSection {
    pub dir: Option<PathBuf>,
}

impl RemeshConfig {
    /// Parse a config file
    pub fn load(path: &Path) -> Result<Self, RemeshError> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| RemeshError::BadConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Parse a config file if it exists, defaults otherwise
    pub fn load_optional(path: &Path) -> Result<Self, RemeshError> {
        if path.is_file() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Configured path override for a tool, if any
    pub fn tool_path(&self, kind: ToolKind) -> Option<&Path> {
        match kind {
            ToolKind::InstantMeshes => self.tools.instant_meshes.as_deref(),
            ToolKind::RobustQuadHex => self.tools.rhdm.as_deref(),
        }
    }

    /// Working directory layout, honoring the `[output] dir` override
    pub fn work_dirs(&self) -> WorkDirs {
        match &self.output.dir {
            Some(dir) => WorkDirs::new(dir.clone()),
            None => WorkDirs::default_root(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = RemeshConfig::load_optional(Path::new("/nonexistent/remesh.toml")).unwrap();
        assert!(config.tools.instant_meshes.is_none());
        assert!(config.tools.rhdm.is_none());
        assert!(config.output.dir.is_none());
    }

    #[test]
    fn parses_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("remesh.toml");
        std::fs::write(
            &path,
            "[tools]\ninstant_meshes = \"/opt/im/instantMeshes\"\n\n[output]\ndir = \"/work\"\n",
        )
        .unwrap();
        let config = RemeshConfig::load(&path).unwrap();
        assert_eq!(
            config.tool_path(ToolKind::InstantMeshes),
            Some(Path::new("/opt/im/instantMeshes"))
        );
        assert_eq!(config.tool_path(ToolKind::RobustQuadHex), None);
        assert_eq!(config.work_dirs().root(), Path::new("/work"));
    }

    #[test]
    fn rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("remesh.toml");
        std::fs::write(&path, "[tools\n").unwrap();
        assert!(matches!(
            RemeshConfig::load(&path),
            Err(RemeshError::BadConfig { .. })
        ));
    }
}
