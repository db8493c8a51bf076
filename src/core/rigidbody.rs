use super::types::{ContactMaterial, Transform, Velocity};
use crate::utils::allocator::ArenaId;
use glam::{Mat3, Vec3};

/// Rigid body storing kinematic state and accumulated inputs for the next
/// substep.
///
/// Forces and torques are applied at the body's local origin (the scene never
/// applies off-center loads) so the accumulators stay decoupled.
#[derive(Debug, Clone)]
pub struct RigidBody {
    pub id: ArenaId,
    pub transform: Transform,
    pub velocity: Velocity,
    pub force_accum: Vec3,
    pub torque_accum: Vec3,
    pub mass: f32,
    pub inverse_mass: f32,
    pub inverse_inertia: Mat3,
    pub material: ContactMaterial,
    pub is_static: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            id: ArenaId::default(),
            transform: Transform::default(),
            velocity: Velocity::default(),
            force_accum: Vec3::ZERO,
            torque_accum: Vec3::ZERO,
            mass: 1.0,
            inverse_mass: 1.0,
            inverse_inertia: Mat3::IDENTITY,
            material: ContactMaterial::default(),
            is_static: false,
        }
    }
}

impl RigidBody {
    /// Creates a body with the given mass. Zero mass marks the body static.
    pub fn new(mass: f32) -> Self {
        let mut body = Self {
            mass,
            ..Self::default()
        };
        body.set_mass(mass);
        body
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass;
        if mass.abs() < f32::EPSILON {
            self.inverse_mass = 0.0;
            self.is_static = true;
        } else {
            self.inverse_mass = 1.0 / mass;
            self.is_static = false;
        }
    }

    pub fn set_inertia(&mut self, inertia: Mat3) {
        let inverse = inertia.inverse();
        if inverse.determinant().abs() < f32::EPSILON || !inverse.is_finite() {
            self.inverse_inertia = Mat3::IDENTITY;
        } else {
            self.inverse_inertia = inverse;
        }
    }

    /// Accumulates a force at the body origin for the next substep.
    pub fn apply_force(&mut self, force: Vec3) {
        if self.is_static {
            return;
        }
        self.force_accum += force;
    }

    /// Accumulates a torque for the next substep.
    pub fn apply_torque(&mut self, torque: Vec3) {
        if self.is_static {
            return;
        }
        self.torque_accum += torque;
    }

    /// Applies an instantaneous impulse at the body origin.
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        if self.is_static {
            return;
        }
        self.velocity.linear += impulse * self.inverse_mass;
    }

    pub fn clear_accumulators(&mut self) {
        self.force_accum = Vec3::ZERO;
        self.torque_accum = Vec3::ZERO;
    }
}
