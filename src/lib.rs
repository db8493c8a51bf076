//! Hub Scene – interactive 3D menu simulation core.
//!
//! This crate models a fixed "hub" object at the origin, a LIFO queue of
//! objects introduced one per frame on user interaction, and a physics-driven
//! frame loop: bodies bounce off invisible bounds, get pulled toward the hub
//! by point-to-point joints, and receive periodic randomized force windows
//! while "floating". Rendering, asset loading, and camera control stay on the
//! host side behind small trait seams.

pub mod config;
pub mod core;
pub mod error;
pub mod scene;
pub mod utils;
pub mod world;

pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

pub use config::SessionProfile;
pub use crate::core::{
    collider::{Collider, ColliderShape},
    constraints::{Joint, JointHandle},
    mesh::{derive_box_collider, Aabb, DerivedShape, MeshInstance},
    rigidbody::RigidBody,
    types::{ContactMaterial, Transform, Velocity},
};
pub use error::{Result, SceneError};
pub use scene::{
    AssetProvider, FrameLoop, FrameReport, FrameUpdater, Introduction, IntroductionSequencer,
    MeshLibrary, PendingDescriptor, PerspectiveCamera, Projector, SceneRegistry, SimObject,
    SimulationClock, HUB_NAME,
};
pub use utils::allocator::{Arena, ArenaId};
pub use world::PhysicsWorld;

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// High-level convenience wrapper that owns a fully wired [`FrameLoop`].
///
/// Uses the in-memory [`MeshLibrary`], the default overhead camera, and a
/// seeded deterministic RNG, which is what hosts and tests want most of the
/// time. Custom collaborators can assemble a [`FrameLoop`] directly.
pub struct SceneEngine {
    inner: FrameLoop<MeshLibrary, PerspectiveCamera, Pcg64Mcg>,
}

impl SceneEngine {
    /// Creates an engine for the given profile with a deterministic RNG seed.
    pub fn new(profile: SessionProfile, seed: u64) -> Self {
        let camera = PerspectiveCamera::overhead(profile.camera_height, 16.0 / 9.0);
        Self {
            inner: FrameLoop::new(
                profile,
                camera,
                MeshLibrary::new(),
                Pcg64Mcg::seed_from_u64(seed),
            ),
        }
    }

    /// Completes a model load, making the identifier resolvable.
    pub fn load_model(&mut self, model_id: impl Into<String>, bounds: Aabb) {
        self.inner.assets_mut().insert_prototype(model_id, bounds);
    }

    /// Installs the hub object; its model must be loaded first.
    pub fn install_hub(&mut self, model_id: &str) -> Result<()> {
        self.inner.install_hub(model_id)
    }

    pub fn enqueue(&mut self, descriptor: PendingDescriptor) {
        self.inner.enqueue(descriptor);
    }

    /// Records the first user interaction.
    pub fn interact(&mut self) {
        self.inner.interact();
    }

    /// Advances the scene by one frame at the given host timestamp.
    pub fn tick(&mut self, now: f64) -> Result<FrameReport> {
        self.inner.tick(now)
    }

    pub fn registry(&self) -> &SceneRegistry {
        self.inner.registry()
    }

    pub fn world(&self) -> &PhysicsWorld {
        self.inner.world()
    }

    pub fn profile_mut(&mut self) -> &mut SessionProfile {
        self.inner.profile_mut()
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.inner.camera_mut().aspect = aspect;
    }
}
