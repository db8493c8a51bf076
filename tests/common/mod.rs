#![allow(dead_code)]

use hub_scene::*;
use rand::RngCore;

/// Projector stub returning a fixed NDC position regardless of input.
pub struct FixedProjector(pub Vec2);

impl Projector for FixedProjector {
    fn project(&self, _world: Vec3) -> Vec2 {
        self.0
    }
}

/// RNG stub whose `gen::<f32>()` always yields the same unit-interval value.
pub struct ForcedRng {
    word: u32,
}

impl ForcedRng {
    /// `value` must lie in [0, 1).
    pub fn from_unit(value: f32) -> Self {
        Self {
            word: ((value * 16_777_216.0) as u32) << 8,
        }
    }
}

impl RngCore for ForcedRng {
    fn next_u32(&mut self) -> u32 {
        self.word
    }

    fn next_u64(&mut self) -> u64 {
        ((self.word as u64) << 32) | self.word as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

pub fn unit_bounds() -> Aabb {
    Aabb::new(Vec3::splat(-0.5), Vec3::splat(0.5))
}

/// Registers a complete unit-cube object directly, bypassing the sequencer.
pub fn spawn_object(
    world: &mut PhysicsWorld,
    registry: &mut SceneRegistry,
    name: &str,
    position: Vec3,
    floating: bool,
) {
    let body_id = world.add_body(RigidBody::new(1.0).with_position(position));
    world.add_collider_for(
        body_id,
        Collider::new(ColliderShape::Box {
            half_extents: Vec3::splat(0.5),
        }),
    );
    let mesh = MeshInstance::new(name, unit_bounds());
    let mut object = SimObject::new(name, mesh, body_id);
    object.floating = floating;
    registry.upsert(object);
}

/// Registers a zero-mass hub body under the reserved name.
pub fn spawn_hub(world: &mut PhysicsWorld, registry: &mut SceneRegistry) {
    let body_id = world.add_body(RigidBody::new(0.0));
    world.add_collider_for(
        body_id,
        Collider::new(ColliderShape::Sphere { radius: 1e-3 }),
    );
    let mesh = MeshInstance::new("logo", unit_bounds());
    registry.upsert(SimObject::new(HUB_NAME, mesh, body_id));
}

/// Clock advanced to the given elapsed time.
pub fn clock_at(elapsed: f32) -> SimulationClock {
    let mut clock = SimulationClock::new();
    clock.tick(0.0);
    clock.tick(f64::from(elapsed));
    clock
}
