//! Working directory layout
//!
//! All interchange and result files live under `<root>/outputs` with fixed
//! names, single-writer by convention since only one run happens at a time.

use std::path::{Path, PathBuf};

use crate::tool::ToolKind;

/// Fixed name of the exported interchange input
const INPUT_MESH: &str = "inputSegmentation.obj";
/// Material sidecar some exporters drop next to the input
const INPUT_MATERIAL: &str = "inputSegmentation.mtl";

/// User-scoped working root plus its `outputs` subdirectory
#[derive(Debug, Clone)]
pub struct WorkDirs {
    root: PathBuf,
    outputs: PathBuf,
}

impl WorkDirs {
    /// Layout rooted at an explicit directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let outputs = root.join("outputs");
        Self { root, outputs }
    }

    /// Layout rooted at the platform data directory
    /// (e.g. `~/.local/share/remesh` on Linux)
    pub fn default_root() -> Self {
        let root = directories::ProjectDirs::from("de", "vissim", "remesh")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".remesh"));
        Self::new(root)
    }

    /// Create the directories if they do not exist yet
    pub fn ensure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.outputs)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn outputs(&self) -> &Path {
        &self.outputs
    }

    /// Interchange file the scene mesh is exported to
    pub fn input_mesh(&self) -> PathBuf {
        self.outputs.join(INPUT_MESH)
    }

    /// Material sidecar next to the interchange input
    pub fn input_material(&self) -> PathBuf {
        self.outputs.join(INPUT_MATERIAL)
    }

    /// Interchange file the given tool writes its result to
    pub fn tool_output(&self, kind: ToolKind) -> PathBuf {
        self.outputs.join(kind.interchange_output())
    }

    /// Final persisted result: `<base>_IM.stl` or `<base>_RM.stl`
    pub fn result_mesh(&self, base: &str, kind: ToolKind) -> PathBuf {
        self.outputs
            .join(format!("{base}{}.stl", kind.result_suffix()))
    }

    /// Flag-tracking file the robust tool leaves behind
    pub fn robust_flag_file(&self) -> PathBuf {
        self.outputs
            .join("robQuadHexDomMeshing.objtri.obj_V_flag.txt")
    }

    /// Secondary surface output the robust tool leaves behind
    pub fn robust_surface_output(&self) -> PathBuf {
        self.outputs.join("robQuadHexDomMeshing.obj_surout.obj")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_names() {
        let dirs = WorkDirs::new("/work");
        assert_eq!(dirs.input_mesh(), Path::new("/work/outputs/inputSegmentation.obj"));
        assert_eq!(
            dirs.input_material(),
            Path::new("/work/outputs/inputSegmentation.mtl")
        );
        assert_eq!(
            dirs.tool_output(ToolKind::InstantMeshes),
            Path::new("/work/outputs/instantMeshing.obj")
        );
        assert_eq!(
            dirs.tool_output(ToolKind::RobustQuadHex),
            Path::new("/work/outputs/robQuadHexDomMeshing.obj")
        );
    }

    #[test]
    fn result_names_carry_mode_suffix() {
        let dirs = WorkDirs::new("/work");
        assert_eq!(
            dirs.result_mesh("cochlea", ToolKind::InstantMeshes),
            Path::new("/work/outputs/cochlea_IM.stl")
        );
        assert_eq!(
            dirs.result_mesh("cochlea", ToolKind::RobustQuadHex),
            Path::new("/work/outputs/cochlea_RM.stl")
        );
    }

    #[test]
    fn ensure_creates_outputs() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs = WorkDirs::new(tmp.path().join("deep"));
        dirs.ensure().unwrap();
        assert!(dirs.outputs().is_dir());
        // idempotent
        dirs.ensure().unwrap();
    }
}
