use super::{
    camera::Projector,
    driver::SimulationClock,
    registry::{SceneRegistry, HUB_NAME},
};
use crate::{
    config::{SessionProfile, BOUNDARY_CAP, FORCE_THRESHOLD},
    core::constraints::Joint,
    error::{Result, SceneError},
    world::PhysicsWorld,
};
use glam::Vec3;
use rand::Rng;

/// Advances every registered object by one frame: render sync, screen-space
/// bouncing, the randomized force window, decay, one-shot impulses, and
/// one-time hub anchoring.
#[derive(Debug, Default)]
pub struct FrameUpdater;

impl FrameUpdater {
    pub fn new() -> Self {
        Self
    }

    pub fn run<R: Rng>(
        &mut self,
        registry: &mut SceneRegistry,
        world: &mut PhysicsWorld,
        camera: &dyn Projector,
        profile: &SessionProfile,
        clock: &SimulationClock,
        rng: &mut R,
    ) -> Result<()> {
        let hub_body = registry.hub().map(|hub| hub.body);
        let now = clock.elapsed();

        for object in registry.entries_mut() {
            let Some(body) = world.body_mut(object.body) else {
                continue;
            };

            // Render sync: the mesh follows the simulated body exactly.
            object.mesh.transform.position = body.transform.position;
            object.mesh.transform.rotation = body.transform.rotation;

            // Soft screen-space bounce. Screen X maps to world X; screen Y
            // maps to world Z under the overhead camera.
            if object.floating {
                let ndc = camera.project(object.mesh.world_bounds().center());
                if ndc.x >= BOUNDARY_CAP {
                    body.velocity.linear.x = -body.velocity.linear.x.abs();
                    object.active_force.x = -object.active_force.x.abs();
                } else if ndc.x <= -BOUNDARY_CAP {
                    body.velocity.linear.x = body.velocity.linear.x.abs();
                    object.active_force.x = object.active_force.x.abs();
                }
                if ndc.y >= BOUNDARY_CAP {
                    body.velocity.linear.z = body.velocity.linear.z.abs();
                    object.active_force.z = object.active_force.z.abs();
                } else if ndc.y <= -BOUNDARY_CAP {
                    body.velocity.linear.z = -body.velocity.linear.z.abs();
                    object.active_force.z = -object.active_force.z.abs();
                }
            }

            // Time-windowed randomized perturbation: once the previous
            // window has lapsed, a passing draw arms a fresh one.
            let draw: f32 = rng.gen();
            if object.floating && draw > FORCE_THRESHOLD && now >= object.force_expire {
                object.force_expire = now + 2.0 * profile.force_window;
                let p = body.transform.position;
                object.active_force = Vec3::new(p.x, -p.y, p.z).normalize_or_zero();
            }
            if now <= object.force_expire {
                body.apply_force(object.active_force * profile.force);
                let spin = body.velocity.angular.normalize_or_zero();
                body.apply_torque(spin * profile.torque);
            }

            // Instantaneous damping stands in for drag.
            body.velocity.linear *= profile.decay;
            body.velocity.angular *= profile.angular_decay;

            if let Some(impulse) = object.pending_impulses.pop() {
                body.apply_impulse(impulse);
            }

            // One-time hub anchoring for the anchored category.
            if object.joint.is_none() && object.name != HUB_NAME {
                if let Some(anchor) = object.anchor_offset {
                    let hub = hub_body.ok_or(SceneError::MissingHub)?;
                    let handle = world.add_joint(Joint::PointToPoint {
                        body_a: object.body,
                        pivot_a: Vec3::ZERO,
                        body_b: hub,
                        pivot_b: anchor,
                    });
                    object.joint = Some(handle);
                }
            }
        }

        Ok(())
    }
}
