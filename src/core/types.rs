use glam::{Mat3, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Position, orientation, and non-uniform scale of an entity.
///
/// Rigid bodies leave `scale` at one; mesh instances carry the model scale
/// applied at introduction time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Builds a homogeneous matrix representation of the transform.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Maps a local-space point into world space.
    pub fn apply(&self, point: Vec3) -> Vec3 {
        self.position + self.rotation * (self.scale * point)
    }
}

/// Linear and angular velocity of a rigid body.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub linear: Vec3,
    pub angular: Vec3,
}

/// Contact coefficients shared by every body in the scene.
///
/// The scene uses one default material pair, so no mixing rules are needed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContactMaterial {
    pub friction: f32,
    pub restitution: f32,
}

impl Default for ContactMaterial {
    fn default() -> Self {
        Self {
            friction: 0.5,
            restitution: 0.3,
        }
    }
}

/// Helper methods for inertia calculations.
pub trait InertiaTensorExt {
    fn for_solid_box(half_extents: Vec3, mass: f32) -> Mat3;
    fn for_solid_sphere(radius: f32, mass: f32) -> Mat3;
}

impl InertiaTensorExt for Mat3 {
    fn for_solid_box(half_extents: Vec3, mass: f32) -> Mat3 {
        let lx = half_extents.x * 2.0;
        let ly = half_extents.y * 2.0;
        let lz = half_extents.z * 2.0;
        let factor = mass / 12.0;
        Mat3::from_diagonal(Vec3::new(
            factor * (ly * ly + lz * lz),
            factor * (lx * lx + lz * lz),
            factor * (lx * lx + ly * ly),
        ))
    }

    fn for_solid_sphere(radius: f32, mass: f32) -> Mat3 {
        Mat3::from_diagonal(Vec3::splat(0.4 * mass * radius * radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn transform_apply_matches_matrix() {
        let transform = Transform {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation: Quat::from_rotation_y(0.5),
            scale: Vec3::splat(2.0),
        };
        let point = Vec3::new(0.5, -1.0, 0.25);
        let via_matrix = transform.to_matrix().transform_point3(point);
        let applied = transform.apply(point);
        assert_relative_eq!(applied.x, via_matrix.x, epsilon = 1e-5);
        assert_relative_eq!(applied.y, via_matrix.y, epsilon = 1e-5);
        assert_relative_eq!(applied.z, via_matrix.z, epsilon = 1e-5);
    }

    #[test]
    fn box_inertia_grows_with_extent() {
        let small = Mat3::for_solid_box(Vec3::splat(0.5), 1.0);
        let large = Mat3::for_solid_box(Vec3::splat(2.0), 1.0);
        assert!(large.x_axis.x > small.x_axis.x);
    }
}
