use super::collider::ColliderShape;
use super::types::Transform;
use crate::error::{Result, SceneError};
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in the mesh's local space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    pub fn extend(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn from_points(points: &[Vec3]) -> Self {
        let mut bounds = Self::empty();
        for &p in points {
            bounds.extend(p);
        }
        bounds
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn extent(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }
}

/// Renderable mesh handle synced from the owning body every frame.
///
/// The core never touches vertex data; bounds are enough to derive collision
/// proxies and screen-space checks. The host renderer draws from `transform`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshInstance {
    pub model: String,
    pub transform: Transform,
    pub local_bounds: Aabb,
}

impl MeshInstance {
    pub fn new(model: impl Into<String>, local_bounds: Aabb) -> Self {
        Self {
            model: model.into(),
            transform: Transform::default(),
            local_bounds,
        }
    }

    /// World-space bounding box of the transformed mesh.
    pub fn world_bounds(&self) -> Aabb {
        let mut bounds = Aabb::empty();
        for corner in self.local_bounds.corners() {
            bounds.extend(self.transform.apply(corner));
        }
        bounds
    }
}

/// Box collision proxy derived from a mesh, with the shape's center offset
/// from the mesh origin.
#[derive(Debug, Clone)]
pub struct DerivedShape {
    pub shape: ColliderShape,
    pub offset: Vec3,
    pub orientation: Quat,
}

/// Derives a box collider around the scaled mesh.
///
/// Runs before the instance is positioned, so only the scale component of the
/// transform participates. Zero-size bounds on any axis are rejected so a
/// degenerate model cannot produce an unsolvable collider.
pub fn derive_box_collider(mesh: &MeshInstance) -> Result<DerivedShape> {
    let scale = mesh.transform.scale;
    let half_extents = mesh.local_bounds.extent() * scale;
    if half_extents.min_element() <= f32::EPSILON || !half_extents.is_finite() {
        return Err(SceneError::DegenerateBounds(mesh.model.clone()));
    }

    Ok(DerivedShape {
        shape: ColliderShape::Box { half_extents },
        offset: mesh.local_bounds.center() * scale,
        orientation: Quat::IDENTITY,
    })
}
