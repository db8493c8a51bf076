use crate::utils::allocator::ArenaId;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Collider geometries used by the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ColliderShape {
    Sphere { radius: f32 },
    Box { half_extents: Vec3 },
}

impl ColliderShape {
    pub fn bounding_radius(&self) -> f32 {
        match self {
            ColliderShape::Sphere { radius } => *radius,
            ColliderShape::Box { half_extents } => half_extents.length(),
        }
    }
}

/// Collider component referencing a rigid body, with a local offset and
/// orientation (the derived shape center relative to the body origin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collider {
    pub id: ArenaId,
    pub rigidbody_id: ArenaId,
    pub shape: ColliderShape,
    pub offset: Vec3,
    pub orientation: Quat,
}

impl Collider {
    pub fn new(shape: ColliderShape) -> Self {
        Self {
            id: ArenaId::default(),
            rigidbody_id: ArenaId::default(),
            shape,
            offset: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_orientation(mut self, orientation: Quat) -> Self {
        self.orientation = orientation;
        self
    }
}
