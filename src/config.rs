//! Global configuration constants and the per-session parameter profile.

use serde::{Deserialize, Serialize};

/// Default physics substep (in seconds), used at ordinary frame rates.
pub const DEFAULT_TIME_STEP: f32 = 1.0 / 60.0;

/// Shorter substep used when the host delivers high-framerate deltas.
pub const FAST_TIME_STEP: f32 = 1.0 / 120.0;

/// Frame delta below which the fast substep is selected.
pub const HIGH_RATE_DELTA: f32 = 0.01;

/// Upper bound on physics substeps per frame.
pub const MAX_SUBSTEPS: u32 = 3;

/// Screen-space boundary (normalized device coordinates) for floating objects.
pub const BOUNDARY_CAP: f32 = 1.0;

/// Uniform draw above which a floating object re-arms its force window.
pub const FORCE_THRESHOLD: f32 = 0.8;

/// Collision radius of the hub's near-zero proxy sphere.
pub const HUB_RADIUS: f32 = 1e-3;

/// Positional bias factor for the point-to-point joint solver.
pub const JOINT_BIAS_FACTOR: f32 = 0.2;

/// Session parameters resolved once at startup.
///
/// All platform branching lives in the two constructors; nothing downstream
/// re-checks the platform. A host parameter panel may adjust the numeric
/// fields between frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionProfile {
    /// Camera height above the scene origin.
    pub camera_height: f32,
    /// Per-frame multiplier on linear velocity.
    pub decay: f32,
    /// Per-frame multiplier on angular velocity.
    pub angular_decay: f32,
    /// Magnitude of the continuous floating force.
    pub force: f32,
    /// Magnitude of the spin-amplifying torque.
    pub torque: f32,
    /// Half of a force window duration, in simulation seconds.
    pub force_window: f32,
    /// Half-height of the vertical boundary slab.
    pub y_cap: f32,
    /// Uniform render scale applied to the hub's logo mesh.
    pub hub_scale: f32,
    /// Model identifiers this profile never introduces.
    pub excluded_models: Vec<String>,
}

impl SessionProfile {
    pub fn desktop() -> Self {
        Self {
            camera_height: 3.0,
            decay: 0.6,
            angular_decay: 0.8,
            force: 400.0,
            torque: 10.0,
            force_window: 3.0,
            y_cap: 1.0,
            hub_scale: 32.0,
            excluded_models: Vec::new(),
        }
    }

    pub fn mobile() -> Self {
        Self {
            camera_height: 2.0,
            decay: 0.84,
            angular_decay: 0.6,
            force: 2000.0,
            torque: 10.0,
            force_window: 3.0,
            y_cap: 0.2,
            hub_scale: 24.0,
            excluded_models: Vec::new(),
        }
    }

    pub fn excludes(&self, model_id: &str) -> bool {
        self.excluded_models.iter().any(|m| m == model_id)
    }
}

impl Default for SessionProfile {
    fn default() -> Self {
        Self::desktop()
    }
}
