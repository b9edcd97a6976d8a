//! Run orchestration
//!
//! One pipeline run walks Exporting -> Invoking -> Importing -> CleaningUp:
//! export the selected scene mesh to the fixed interchange OBJ, run the
//! external tool, re-import its output under the final `_IM`/`_RM` name, and
//! sweep the intermediates. A failure aborts the remaining phases (cleanup
//! still runs once the interchange input exists) and the error is returned
//! to the caller. A guard flag rejects a second run while one is in flight.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::args;
use crate::config::RemeshConfig;
use crate::error::RemeshError;
use crate::options::{InstantOptions, RobustOptions};
use crate::scene::{HandleId, MeshHandle, SceneRepository};
use crate::tool::{self, ToolKind};
use crate::workdir::WorkDirs;

/// Result of a completed run
#[derive(Debug)]
pub struct RunOutcome {
    /// Handle of the imported result mesh
    pub handle: MeshHandle,
    /// Path of the final persisted result (`<base>_IM.stl` / `<base>_RM.stl`)
    pub path: PathBuf,
    /// Wall-clock time the external tool ran for
    pub tool_elapsed: Duration,
}

/// Remeshing pipeline bound to a working directory layout
#[derive(Debug)]
pub struct Pipeline {
    dirs: WorkDirs,
    instant_path: Option<PathBuf>,
    robust_path: Option<PathBuf>,
    busy: AtomicBool,
}

impl Pipeline {
    pub fn new(dirs: WorkDirs) -> Self {
        Self {
            dirs,
            instant_path: None,
            robust_path: None,
            busy: AtomicBool::new(false),
        }
    }

    /// Pipeline configured from `remesh.toml` overrides
    pub fn from_config(config: &RemeshConfig) -> Self {
        let mut pipeline = Self::new(config.work_dirs());
        pipeline.instant_path = config.tool_path(ToolKind::InstantMeshes).map(Path::to_path_buf);
        pipeline.robust_path = config.tool_path(ToolKind::RobustQuadHex).map(Path::to_path_buf);
        pipeline
    }

    /// Explicit executable location for a tool, overriding discovery
    pub fn set_tool_path(&mut self, kind: ToolKind, path: impl Into<PathBuf>) {
        match kind {
            ToolKind::InstantMeshes => self.instant_path = Some(path.into()),
            ToolKind::RobustQuadHex => self.robust_path = Some(path.into()),
        }
    }

    pub fn dirs(&self) -> &WorkDirs {
        &self.dirs
    }

    /// Whether a run is currently mid-pipeline
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Resolve the executable for a tool (config override, PATH, sibling)
    pub fn resolve_tool(&self, kind: ToolKind) -> Result<PathBuf, RemeshError> {
        let explicit = match kind {
            ToolKind::InstantMeshes => self.instant_path.as_deref(),
            ToolKind::RobustQuadHex => self.robust_path.as_deref(),
        };
        tool::find_tool(kind, explicit)
    }

    /// Run instant meshing on the mesh behind `input`
    pub fn run_instant<S: SceneRepository>(
        &self,
        scene: &mut S,
        input: HandleId,
        opts: &InstantOptions,
    ) -> Result<RunOutcome, RemeshError> {
        opts.validate()?;
        let output = self.dirs.tool_output(ToolKind::InstantMeshes);
        let tokens = args::instant_args(opts, &self.dirs.input_mesh(), &output);
        self.run(scene, input, ToolKind::InstantMeshes, tokens)
    }

    /// Run robust quad/hex-dominant meshing on the mesh behind `input`
    pub fn run_robust<S: SceneRepository>(
        &self,
        scene: &mut S,
        input: HandleId,
        opts: &RobustOptions,
    ) -> Result<RunOutcome, RemeshError> {
        opts.validate()?;
        let output = self.dirs.tool_output(ToolKind::RobustQuadHex);
        let tokens = args::robust_args(opts, &self.dirs.input_mesh(), &output);
        self.run(scene, input, ToolKind::RobustQuadHex, tokens)
    }

    fn run<S: SceneRepository>(
        &self,
        scene: &mut S,
        input: HandleId,
        kind: ToolKind,
        tokens: Vec<OsString>,
    ) -> Result<RunOutcome, RemeshError> {
        let _guard = RunGuard::acquire(&self.busy)?;
        tracing::info!(tool = kind.name(), "starting remeshing run");

        self.remove_old_results(scene, kind);

        // Exporting
        let base = self.export_input(scene, input)?;

        // Invoking / Importing; intermediates are swept even when these fail
        let result = self.invoke_and_import(scene, kind, &tokens, &base);

        // CleaningUp
        self.cleanup(kind);

        result
    }

    /// Drop previously-imported handles of the same mode before a new run
    fn remove_old_results<S: SceneRepository>(&self, scene: &mut S, kind: ToolKind) {
        for handle in scene.handles() {
            if handle.name.contains(kind.tag()) || handle.name.ends_with(kind.result_suffix()) {
                tracing::info!(name = %handle.name, "removing old result mesh");
                let _ = scene.remove(handle.id);
            }
        }
    }

    /// Export the selected mesh to the fixed interchange OBJ.
    ///
    /// The mesh is duplicated through a transient handle so the in-scene
    /// original is never rewritten, then the original is hidden. Returns the
    /// base name (stem of the backing file) used to name the result.
    fn export_input<S: SceneRepository>(
        &self,
        scene: &mut S,
        input: HandleId,
    ) -> Result<String, RemeshError> {
        let src = scene.resolve_path(input).ok_or_else(|| {
            RemeshError::NoBackingFile {
                name: scene.display_name(input).unwrap_or_default(),
            }
        })?;
        let base = src
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "segmentation".to_string());

        self.dirs.ensure()?;
        let interchange = self.dirs.input_mesh();

        let duplicate = scene.load(&src)?;
        let saved = scene.save(duplicate.id, &interchange);
        let _ = scene.remove(duplicate.id);
        saved?;

        scene.set_visible(input, false)?;
        tracing::info!(path = %interchange.display(), "exported input segmentation");
        Ok(base)
    }

    fn invoke_and_import<S: SceneRepository>(
        &self,
        scene: &mut S,
        kind: ToolKind,
        tokens: &[OsString],
        base: &str,
    ) -> Result<RunOutcome, RemeshError> {
        // Invoking
        let exe = self.resolve_tool(kind)?;
        let result = tool::run_tool(&exe, tokens)?;
        if !result.success() {
            return Err(RemeshError::ProcessFailure {
                tool: kind.name(),
                code: result.code,
                stderr: result.stderr,
            });
        }

        // Importing
        let produced = self.dirs.tool_output(kind);
        if !produced.is_file() {
            return Err(RemeshError::MissingOutput { path: produced });
        }
        let final_path = self.dirs.result_mesh(base, kind);
        let transient = scene.load(&produced)?;
        let saved = scene.save(transient.id, &final_path);
        let _ = scene.remove(transient.id);
        saved?;
        let handle = scene.load(&final_path)?;
        tracing::info!(path = %final_path.display(), "result mesh imported");

        Ok(RunOutcome {
            handle,
            path: final_path,
            tool_elapsed: result.elapsed,
        })
    }

    /// Best-effort removal of the run's intermediate files.
    ///
    /// Only ever targets the fixed interchange names; the final `_IM`/`_RM`
    /// result is never touched. Idempotent: already-absent files are skipped.
    pub fn cleanup(&self, kind: ToolKind) {
        let mut targets = vec![
            self.dirs.input_mesh(),
            self.dirs.input_material(),
            self.dirs.tool_output(kind),
        ];
        if kind == ToolKind::RobustQuadHex {
            targets.push(self.dirs.robust_flag_file());
            targets.push(self.dirs.robust_surface_output());
        }
        for target in targets {
            if !target.exists() {
                tracing::debug!(path = %target.display(), "intermediate already absent");
                continue;
            }
            if let Err(e) = std::fs::remove_file(&target) {
                tracing::warn!(path = %target.display(), error = %e, "failed to remove intermediate");
            }
        }
    }
}

/// Single-run guard; releases the flag when dropped
struct RunGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> RunGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, RemeshError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| RemeshError::Busy)?;
        Ok(Self { flag })
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::TriMesh;
    use crate::scene::FileScene;

    #[test]
    fn cleanup_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let pipeline = Pipeline::new(WorkDirs::new(tmp.path()));
        pipeline.dirs().ensure().unwrap();

        std::fs::write(pipeline.dirs().input_mesh(), "v 0 0 0\n").unwrap();
        std::fs::write(pipeline.dirs().robust_flag_file(), "1\n").unwrap();

        pipeline.cleanup(ToolKind::RobustQuadHex);
        assert!(!pipeline.dirs().input_mesh().exists());
        assert!(!pipeline.dirs().robust_flag_file().exists());

        // second sweep on absent files must not fail
        pipeline.cleanup(ToolKind::RobustQuadHex);
        pipeline.cleanup(ToolKind::InstantMeshes);
    }

    #[test]
    fn cleanup_never_touches_results() {
        let tmp = tempfile::tempdir().unwrap();
        let pipeline = Pipeline::new(WorkDirs::new(tmp.path()));
        pipeline.dirs().ensure().unwrap();

        let result = pipeline.dirs().result_mesh("cube", ToolKind::InstantMeshes);
        std::fs::write(&result, "stl").unwrap();
        std::fs::write(pipeline.dirs().input_mesh(), "v 0 0 0\n").unwrap();

        pipeline.cleanup(ToolKind::InstantMeshes);
        assert!(result.exists());
        assert!(!pipeline.dirs().input_mesh().exists());
    }

    #[test]
    fn export_without_backing_file_fails_before_invocation() {
        let tmp = tempfile::tempdir().unwrap();
        let pipeline = Pipeline::new(WorkDirs::new(tmp.path()));
        let mut scene = FileScene::new();
        let handle = scene.insert("segmentation", TriMesh::cube(1.0));

        let err = pipeline
            .run_instant(&mut scene, handle.id, &InstantOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            RemeshError::NoBackingFile { ref name } if name == "segmentation"
        ));
        // nothing was exported, so nothing for cleanup to have missed
        assert!(!pipeline.dirs().input_mesh().exists());
        // pipeline is idle again
        assert!(!pipeline.is_busy());
    }

    #[test]
    fn invalid_options_rejected_before_any_work() {
        let tmp = tempfile::tempdir().unwrap();
        let pipeline = Pipeline::new(WorkDirs::new(tmp.path()));
        let mut scene = FileScene::new();
        let handle = scene.insert("m", TriMesh::cube(1.0));

        let opts = InstantOptions {
            face_count: 50,
            ..InstantOptions::default()
        };
        assert!(matches!(
            pipeline.run_instant(&mut scene, handle.id, &opts),
            Err(RemeshError::InvalidOption { .. })
        ));
        assert!(!tmp.path().join("outputs").exists());
    }

    #[test]
    fn old_result_handles_are_swept() {
        let tmp = tempfile::tempdir().unwrap();
        let pipeline = Pipeline::new(WorkDirs::new(tmp.path()));
        let mut scene = FileScene::new();
        let stale_tag = scene.insert("instantMeshing", TriMesh::cube(1.0));
        let stale_result = scene.insert("cochlea_IM", TriMesh::cube(1.0));
        let other_mode = scene.insert("cochlea_RM", TriMesh::cube(1.0));

        pipeline.remove_old_results(&mut scene, ToolKind::InstantMeshes);
        assert!(scene.handle(stale_tag.id).is_none());
        assert!(scene.handle(stale_result.id).is_none());
        assert!(scene.handle(other_mode.id).is_some());
    }
}
