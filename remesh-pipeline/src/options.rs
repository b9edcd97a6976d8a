//! Job parameters for the two remeshing modes
//!
//! Ranges mirror what the external tools accept; [`InstantOptions::validate`]
//! and [`RobustOptions::validate`] reject out-of-range values before any file
//! or process is touched.

use crate::error::RemeshError;

/// Rotational/positional symmetry configuration for instant meshing.
///
/// Controls whether the output is triangle- or quad-dominant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymmetryClass {
    /// Triangle meshing, rotation 6 / position 6
    #[default]
    Triangles66,
    /// Quad meshing, rotation 2 / position 4
    Quads24,
    /// Quad meshing, rotation 4 / position 4
    Quads44,
}

impl SymmetryClass {
    /// Rotational symmetry order (`-r` flag)
    pub fn rotation(self) -> u32 {
        match self {
            SymmetryClass::Triangles66 => 6,
            SymmetryClass::Quads24 => 2,
            SymmetryClass::Quads44 => 4,
        }
    }

    /// Positional symmetry order (`-p` flag)
    pub fn position(self) -> u32 {
        match self {
            SymmetryClass::Triangles66 => 6,
            SymmetryClass::Quads24 | SymmetryClass::Quads44 => 4,
        }
    }
}

/// Parameters for an instant-meshing run
#[derive(Debug, Clone, PartialEq)]
pub struct InstantOptions {
    /// Desired face count of the output mesh [1000, 10000]
    pub face_count: u32,
    /// Smoothing & ray tracing reprojection steps [0, 10]
    pub smoothing_steps: u32,
    /// Point-cloud mode: number of adjacent points to consider [5, 20]
    pub neighbors: u32,
    /// Dihedral angle threshold for creases [-1, 90]; -1 means sharp creases
    pub crease_angle: i32,
    /// Symmetry configuration (triangle vs. quad dominant output)
    pub symmetry: SymmetryClass,
    /// Measure smoothness directly on the surface
    pub intrinsic: bool,
    /// Generate a tri/quad dominant mesh instead of a pure one
    pub dominant: bool,
    /// Prefer (slower) deterministic algorithms
    pub deterministic: bool,
}

impl Default for InstantOptions {
    fn default() -> Self {
        Self {
            face_count: 2800,
            smoothing_steps: 2,
            neighbors: 10,
            crease_angle: -1,
            symmetry: SymmetryClass::default(),
            intrinsic: false,
            dominant: false,
            deterministic: false,
        }
    }
}

impl InstantOptions {
    /// Reject values the external tool does not accept
    pub fn validate(&self) -> Result<(), RemeshError> {
        check_range("face count", self.face_count as i64, 1000, 10000)?;
        check_range("smoothing steps", self.smoothing_steps as i64, 0, 10)?;
        check_range("adjacent points", self.neighbors as i64, 5, 20)?;
        check_range("crease angle", self.crease_angle as i64, -1, 90)?;
        Ok(())
    }
}

/// Grid dimension for robust quad/hex-dominant meshing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dimension {
    #[default]
    Two,
    Three,
}

impl Dimension {
    pub fn as_u32(self) -> u32 {
        match self {
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }
}

/// Parameters for a robust quad/hex-dominant meshing run
#[derive(Debug, Clone, PartialEq)]
pub struct RobustOptions {
    /// Output dimension (2 or 3)
    pub dimension: Dimension,
    /// Element scale [2, 10]
    pub scale: u32,
    /// Smoothing iteration count [5, 20]
    pub smoothing_iterations: u32,
}

impl Default for RobustOptions {
    fn default() -> Self {
        Self {
            dimension: Dimension::default(),
            scale: 3,
            smoothing_iterations: 10,
        }
    }
}

impl RobustOptions {
    /// Reject values the external tool does not accept
    pub fn validate(&self) -> Result<(), RemeshError> {
        check_range("scale", self.scale as i64, 2, 10)?;
        check_range(
            "smoothing iterations",
            self.smoothing_iterations as i64,
            5,
            20,
        )?;
        Ok(())
    }
}

fn check_range(what: &'static str, value: i64, min: i64, max: i64) -> Result<(), RemeshError> {
    if value < min || value > max {
        return Err(RemeshError::InvalidOption {
            what,
            value,
            min,
            max,
        });
    }
    Ok(())
}
