use crate::{
    config::JOINT_BIAS_FACTOR,
    core::{
        collider::Collider,
        constraints::{Joint, JointHandle},
        rigidbody::RigidBody,
        types::ContactMaterial,
    },
    error::{Result, SceneError},
    utils::{
        allocator::{Arena, ArenaId},
        logging::ScopedTimer,
    },
};
use glam::{Quat, Vec3};

/// Static half-space keeping dynamic bodies inside the play volume.
///
/// Points satisfying `normal · p >= offset` are inside.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryPlane {
    pub normal: Vec3,
    pub offset: f32,
}

/// Central simulation container: bodies, colliders, joints, and the fixed
/// substep accumulator.
pub struct PhysicsWorld {
    pub bodies: Arena<RigidBody>,
    pub colliders: Arena<Collider>,
    pub gravity: Vec3,
    pub contact_material: ContactMaterial,
    joints: Vec<Joint>,
    planes: Vec<BoundaryPlane>,
    accumulator: f32,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self {
            bodies: Arena::new(),
            colliders: Arena::new(),
            // The scene holds objects with constraints and forces, not
            // gravity; hosts that want it can set the field.
            gravity: Vec3::ZERO,
            contact_material: ContactMaterial::default(),
            joints: Vec::new(),
            planes: Vec::new(),
            accumulator: 0.0,
        }
    }

    pub fn add_body(&mut self, body: RigidBody) -> ArenaId {
        let id = self.bodies.insert(body);
        if let Some(stored) = self.bodies.get_mut(id) {
            stored.id = id;
        }
        id
    }

    pub fn add_collider_for(&mut self, body_id: ArenaId, mut collider: Collider) -> ArenaId {
        collider.rigidbody_id = body_id;
        let id = self.colliders.insert(collider);
        if let Some(stored) = self.colliders.get_mut(id) {
            stored.id = id;
        }
        id
    }

    pub fn add_boundary_plane(&mut self, normal: Vec3, offset: f32) {
        self.planes.push(BoundaryPlane {
            normal: normal.normalize(),
            offset,
        });
    }

    pub fn add_joint(&mut self, joint: Joint) -> JointHandle {
        self.joints.push(joint);
        JointHandle(self.joints.len() - 1)
    }

    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn body(&self, id: ArenaId) -> Option<&RigidBody> {
        self.bodies.get(id)
    }

    pub fn body_mut(&mut self, id: ArenaId) -> Option<&mut RigidBody> {
        self.bodies.get_mut(id)
    }

    /// Advances the simulation by `delta` using fixed substeps of `sub_dt`,
    /// executing at most `max_substeps` substeps. Returns the substeps run.
    ///
    /// When the bound is hit, leftover accumulated time is dropped so a long
    /// frame hitch cannot snowball into ever-growing catch-up work.
    pub fn step_with(&mut self, sub_dt: f32, delta: f32, max_substeps: u32) -> Result<u32> {
        let _timer = ScopedTimer::new("world::step");
        self.accumulator += delta.max(0.0);

        let mut substeps = 0;
        while self.accumulator >= sub_dt && substeps < max_substeps {
            self.advance(sub_dt)?;
            self.accumulator -= sub_dt;
            substeps += 1;
        }
        if substeps == max_substeps {
            self.accumulator = 0.0;
        }
        Ok(substeps)
    }

    fn advance(&mut self, dt: f32) -> Result<()> {
        for body in self.bodies.iter_mut() {
            if body.is_static {
                body.clear_accumulators();
                continue;
            }
            body.velocity.linear += (self.gravity + body.force_accum * body.inverse_mass) * dt;
            body.velocity.angular += body.inverse_inertia * body.torque_accum * dt;
            body.clear_accumulators();
        }

        self.solve_joints(dt);

        for body in self.bodies.iter_mut() {
            if body.is_static {
                continue;
            }
            body.transform.position += body.velocity.linear * dt;

            let omega = body.velocity.angular;
            let omega_mag = omega.length();
            if omega_mag > 1e-6 {
                let delta = Quat::from_axis_angle(omega / omega_mag, omega_mag * dt);
                body.transform.rotation = (delta * body.transform.rotation).normalize();
            }

            if !body.transform.position.is_finite()
                || !body.transform.rotation.is_finite()
                || !body.velocity.linear.is_finite()
                || !body.velocity.angular.is_finite()
            {
                return Err(SceneError::NonFiniteState(format!(
                    "body {}",
                    body.id.index()
                )));
            }
        }

        self.resolve_boundaries();
        Ok(())
    }

    /// Velocity-level point-to-point solve with positional bias.
    ///
    /// Anchors are treated as coincident with the body origins for the mass
    /// matrix, which is exact for the hub (static) side and close enough for
    /// the small pivots the scene uses.
    fn solve_joints(&mut self, dt: f32) {
        for joint in &self.joints {
            let Joint::PointToPoint {
                body_a,
                pivot_a,
                body_b,
                pivot_b,
            } = joint;

            let (anchor_a, vel_a, inv_a) = match self.bodies.get(*body_a) {
                Some(body) => (
                    body.transform.position + body.transform.rotation * *pivot_a,
                    body.velocity.linear,
                    body.inverse_mass,
                ),
                None => continue,
            };
            let (anchor_b, vel_b, inv_b) = match self.bodies.get(*body_b) {
                Some(body) => (
                    body.transform.position + body.transform.rotation * *pivot_b,
                    body.velocity.linear,
                    body.inverse_mass,
                ),
                None => continue,
            };

            let inv_sum = inv_a + inv_b;
            if inv_sum < f32::EPSILON {
                continue;
            }

            let bias = (anchor_a - anchor_b) * (JOINT_BIAS_FACTOR / dt);
            let lambda = -(vel_a - vel_b + bias) / inv_sum;

            if let Some(body) = self.bodies.get_mut(*body_a) {
                body.velocity.linear += lambda * inv_a;
            }
            if let Some(body) = self.bodies.get_mut(*body_b) {
                body.velocity.linear -= lambda * inv_b;
            }
        }
    }

    /// Pushes penetrating bodies out of the boundary planes and reflects the
    /// normal velocity component scaled by restitution.
    fn resolve_boundaries(&mut self) {
        if self.planes.is_empty() {
            return;
        }

        for collider in self.colliders.iter() {
            let Some(body) = self.bodies.get_mut(collider.rigidbody_id) else {
                continue;
            };
            if body.is_static {
                continue;
            }

            let restitution = body.material.restitution;
            let radius = collider.shape.bounding_radius();
            for plane in &self.planes {
                let center =
                    body.transform.position + body.transform.rotation * collider.offset;
                let depth = plane.normal.dot(center) - plane.offset;
                if depth >= radius {
                    continue;
                }
                body.transform.position += plane.normal * (radius - depth);
                let normal_speed = body.velocity.linear.dot(plane.normal);
                if normal_speed < 0.0 {
                    body.velocity.linear -=
                        plane.normal * ((1.0 + restitution) * normal_speed);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collider::ColliderShape;

    fn dynamic_body(position: Vec3) -> RigidBody {
        RigidBody::new(1.0).with_position(position)
    }

    #[test]
    fn substep_count_is_bounded() {
        let mut world = PhysicsWorld::new();
        world.add_body(dynamic_body(Vec3::ZERO));
        let steps = world
            .step_with(1.0 / 60.0, 1.0, 3)
            .expect("finite state");
        assert_eq!(steps, 3);
    }

    #[test]
    fn small_delta_runs_no_substeps_until_accumulated() {
        let mut world = PhysicsWorld::new();
        let first = world.step_with(1.0 / 60.0, 0.005, 3).expect("finite");
        assert_eq!(first, 0);
        let second = world.step_with(1.0 / 60.0, 0.015, 3).expect("finite");
        assert_eq!(second, 1);
    }

    #[test]
    fn boundary_plane_reflects_with_restitution() {
        let mut world = PhysicsWorld::new();
        world.add_boundary_plane(Vec3::Y, -1.0);
        let id = world.add_body(dynamic_body(Vec3::new(0.0, -0.95, 0.0)));
        world.add_collider_for(id, Collider::new(ColliderShape::Sphere { radius: 0.1 }));
        world
            .body_mut(id)
            .expect("body exists")
            .velocity
            .linear = Vec3::new(0.0, -2.0, 0.0);

        world.step_with(1.0 / 60.0, 1.0 / 60.0, 3).expect("finite");

        let body = world.body(id).expect("body exists");
        assert!(body.velocity.linear.y > 0.0, "normal velocity reflected");
        assert!(body.transform.position.y >= -1.0 + 0.1 - 1e-4);
    }

    #[test]
    fn boundary_response_uses_the_body_material() {
        let mut world = PhysicsWorld::new();
        world.add_boundary_plane(Vec3::Y, -1.0);
        let id = world.add_body(dynamic_body(Vec3::new(0.0, -0.95, 0.0)));
        world.add_collider_for(id, Collider::new(ColliderShape::Sphere { radius: 0.1 }));
        {
            let body = world.body_mut(id).expect("body exists");
            body.velocity.linear = Vec3::new(0.0, -2.0, 0.0);
            body.material.restitution = 1.0;
        }

        world.step_with(1.0 / 60.0, 1.0 / 60.0, 3).expect("finite");

        let body = world.body(id).expect("body exists");
        assert!(
            (body.velocity.linear.y - 2.0).abs() < 1e-4,
            "a fully elastic body keeps its full normal speed"
        );
    }

    #[test]
    fn point_to_point_joint_pulls_toward_anchor() {
        let mut world = PhysicsWorld::new();
        let hub = world.add_body(RigidBody::new(0.0));
        let id = world.add_body(dynamic_body(Vec3::new(2.0, 0.0, 0.0)));
        world.add_joint(Joint::PointToPoint {
            body_a: id,
            pivot_a: Vec3::ZERO,
            body_b: hub,
            pivot_b: Vec3::ZERO,
        });

        for _ in 0..120 {
            world
                .step_with(1.0 / 60.0, 1.0 / 60.0, 3)
                .expect("finite");
        }

        let distance = world
            .body(id)
            .expect("body exists")
            .transform
            .position
            .length();
        assert!(distance < 2.0, "joint should have pulled the body inward");
    }

    #[test]
    fn hub_body_never_moves() {
        let mut world = PhysicsWorld::new();
        let hub = world.add_body(RigidBody::new(0.0));
        let id = world.add_body(dynamic_body(Vec3::new(1.0, 0.0, 0.0)));
        world.add_joint(Joint::PointToPoint {
            body_a: id,
            pivot_a: Vec3::ZERO,
            body_b: hub,
            pivot_b: Vec3::new(0.5, 0.0, 0.0),
        });

        for _ in 0..30 {
            world
                .step_with(1.0 / 60.0, 1.0 / 60.0, 3)
                .expect("finite");
        }

        let hub_pos = world.body(hub).expect("hub exists").transform.position;
        assert_eq!(hub_pos, Vec3::ZERO);
    }
}
