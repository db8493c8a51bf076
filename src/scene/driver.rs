use super::{
    assets::AssetProvider,
    camera::Projector,
    descriptor::PendingDescriptor,
    registry::{SceneRegistry, SimObject, HUB_NAME},
    sequencer::{Introduction, IntroductionSequencer},
    updater::FrameUpdater,
};
use crate::{
    config::{
        SessionProfile, DEFAULT_TIME_STEP, FAST_TIME_STEP, HIGH_RATE_DELTA, HUB_RADIUS,
        MAX_SUBSTEPS,
    },
    core::{
        collider::{Collider, ColliderShape},
        rigidbody::RigidBody,
    },
    error::{Result, SceneError},
    utils::logging::ScopedTimer,
    world::PhysicsWorld,
};
use glam::Vec3;
use rand::Rng;

/// Monotonic simulation clock fed by host frame timestamps.
///
/// Timestamps are kept in `f64`: at single precision the difference between
/// two adjacent frame times degrades as the session grows, which would starve
/// the substep accumulator. Deltas cross into `f32` only once they are small.
#[derive(Debug, Default)]
pub struct SimulationClock {
    elapsed: f64,
    last: Option<f64>,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a frame timestamp and returns the (non-negative) delta since
    /// the previous one. The first tick yields a zero delta.
    pub fn tick(&mut self, now: f64) -> f32 {
        let delta = match self.last {
            Some(last) => (now - last).max(0.0),
            None => 0.0,
        };
        self.last = Some(now);
        self.elapsed += delta;
        delta as f32
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }
}

/// What one frame tick did.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub delta: f32,
    pub substeps: u32,
    pub introduction: Introduction,
}

/// Single coordination point of the simulation.
///
/// Owns the world, the registry, and the sequencer exclusively; all mutation
/// happens inside [`FrameLoop::tick`], one invocation at a time. Out-of-band
/// renders (window resizes) read the registry's synced transforms through
/// [`FrameLoop::registry`] and never mutate.
pub struct FrameLoop<A, C, R> {
    world: PhysicsWorld,
    registry: SceneRegistry,
    sequencer: IntroductionSequencer,
    clock: SimulationClock,
    profile: SessionProfile,
    camera: C,
    assets: A,
    rng: R,
    updater: FrameUpdater,
}

impl<A, C, R> FrameLoop<A, C, R>
where
    A: AssetProvider,
    C: Projector,
    R: Rng,
{
    pub fn new(profile: SessionProfile, camera: C, assets: A, rng: R) -> Self {
        let mut world = PhysicsWorld::new();
        // Invisible floor and ceiling bounding the play volume vertically.
        world.add_boundary_plane(Vec3::Y, -profile.y_cap);
        world.add_boundary_plane(Vec3::NEG_Y, -profile.y_cap);

        Self {
            world,
            registry: SceneRegistry::new(),
            sequencer: IntroductionSequencer::default(),
            clock: SimulationClock::new(),
            profile,
            camera,
            assets,
            rng,
            updater: FrameUpdater::new(),
        }
    }

    /// Creates the hub: a zero-mass body fixed at the origin with a
    /// near-zero collision proxy, serving as the anchor for every joint.
    /// The mesh takes the profile's hub scale so the render handle matches
    /// the session's logo size.
    pub fn install_hub(&mut self, model_id: &str) -> Result<()> {
        let mut mesh = self
            .assets
            .resolve(model_id)
            .ok_or_else(|| SceneError::AssetNotReady(model_id.to_string()))?;
        mesh.transform.scale = Vec3::splat(self.profile.hub_scale);

        let body_id = self.world.add_body(RigidBody::new(0.0));
        self.world.add_collider_for(
            body_id,
            Collider::new(ColliderShape::Sphere { radius: HUB_RADIUS }),
        );
        self.registry.upsert(SimObject::new(HUB_NAME, mesh, body_id));
        Ok(())
    }

    pub fn enqueue(&mut self, descriptor: PendingDescriptor) {
        self.sequencer.enqueue(descriptor);
    }

    /// Records the first user interaction, unlocking introductions.
    pub fn interact(&mut self) {
        self.sequencer.trigger();
    }

    /// Runs one frame: fixed-substep physics, the per-object update pass,
    /// then at most one introduction.
    pub fn tick(&mut self, now: f64) -> Result<FrameReport> {
        let _timer = ScopedTimer::new("frame::tick");
        let delta = self.clock.tick(now);

        let sub_dt = if delta < HIGH_RATE_DELTA {
            FAST_TIME_STEP
        } else {
            DEFAULT_TIME_STEP
        };
        let substeps = self.world.step_with(sub_dt, delta, MAX_SUBSTEPS)?;

        self.updater.run(
            &mut self.registry,
            &mut self.world,
            &self.camera,
            &self.profile,
            &self.clock,
            &mut self.rng,
        )?;

        let introduction = self.sequencer.try_introduce_next(
            &mut self.registry,
            &mut self.world,
            &mut self.assets,
            &self.profile,
        )?;

        Ok(FrameReport {
            delta,
            substeps,
            introduction,
        })
    }

    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn sequencer(&self) -> &IntroductionSequencer {
        &self.sequencer
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn profile(&self) -> &SessionProfile {
        &self.profile
    }

    /// Runtime parameter access for a host panel.
    pub fn profile_mut(&mut self) -> &mut SessionProfile {
        &mut self.profile
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    pub fn assets_mut(&mut self) -> &mut A {
        &mut self.assets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_accumulates_and_clamps_negative_deltas() {
        let mut clock = SimulationClock::new();
        assert_eq!(clock.tick(5.0), 0.0);
        assert!((clock.tick(5.5) - 0.5).abs() < 1e-6);
        assert_eq!(clock.tick(5.2), 0.0);
        assert!((clock.elapsed() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn clock_deltas_stay_exact_deep_into_a_session() {
        let mut clock = SimulationClock::new();
        let frame = 1.0 / 60.0;
        clock.tick(36_000.0);
        for i in 1..=120u32 {
            let delta = clock.tick(36_000.0 + f64::from(i) * frame);
            assert!(
                (delta - frame as f32).abs() < 1e-7,
                "delta {delta} drifted at frame {i}"
            );
        }
    }
}
