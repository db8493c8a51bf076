use super::{
    assets::AssetProvider,
    descriptor::PendingDescriptor,
    registry::{SceneRegistry, SimObject},
};
use crate::{
    config::SessionProfile,
    core::{
        collider::{Collider, ColliderShape},
        mesh::derive_box_collider,
        rigidbody::RigidBody,
        types::InertiaTensorExt,
    },
    error::Result,
    world::PhysicsWorld,
};
use glam::{Mat3, Quat, Vec3};
use log::{debug, warn};

/// Outcome of one introduction attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Introduction {
    /// Not triggered yet, or nothing pending.
    Idle,
    /// A complete object was registered under this name.
    Introduced(String),
    /// The descriptor's model is excluded by the session profile; dropped.
    Excluded(String),
    /// The asset has not resolved; the descriptor was dropped and may be
    /// re-enqueued by the host.
    NotReady(String),
    /// Shape derivation failed on degenerate bounds; dropped with a warning.
    Skipped(String),
}

/// Gates the introduction of pending objects behind the first user
/// interaction, releasing at most one object per frame in LIFO order.
#[derive(Debug, Default)]
pub struct IntroductionSequencer {
    pending: Vec<PendingDescriptor>,
    triggered: bool,
}

impl IntroductionSequencer {
    pub fn new(pending: Vec<PendingDescriptor>) -> Self {
        Self {
            pending,
            triggered: false,
        }
    }

    /// Appends a descriptor; the newest descriptor is introduced first.
    pub fn enqueue(&mut self, descriptor: PendingDescriptor) {
        self.pending.push(descriptor);
    }

    /// Marks the trigger condition (first user interaction) as met.
    pub fn trigger(&mut self) {
        self.triggered = true;
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Attempts to introduce the most recently enqueued descriptor.
    ///
    /// Consumes at most one descriptor and registers at most one object per
    /// call; every non-`Idle` outcome consumed a descriptor.
    pub fn try_introduce_next(
        &mut self,
        registry: &mut SceneRegistry,
        world: &mut PhysicsWorld,
        assets: &mut dyn AssetProvider,
        profile: &SessionProfile,
    ) -> Result<Introduction> {
        if !self.triggered {
            return Ok(Introduction::Idle);
        }
        let Some(descriptor) = self.pending.pop() else {
            return Ok(Introduction::Idle);
        };

        if profile.excludes(&descriptor.model_id) {
            debug!(
                "dropping '{}': model '{}' excluded by profile",
                descriptor.menu_name, descriptor.model_id
            );
            return Ok(Introduction::Excluded(descriptor.menu_name));
        }

        let Some(mut mesh) = assets.resolve(&descriptor.model_id) else {
            debug!(
                "dropping '{}': model '{}' not resolved",
                descriptor.menu_name, descriptor.model_id
            );
            return Ok(Introduction::NotReady(descriptor.menu_name));
        };
        mesh.transform.scale = Vec3::splat(descriptor.scale);

        let derived = match derive_box_collider(&mesh) {
            Ok(derived) => derived,
            Err(err) => {
                warn!("skipping '{}': {err}", descriptor.menu_name);
                return Ok(Introduction::Skipped(descriptor.menu_name));
            }
        };

        // Place the body at the negated shape offset so the mesh's visual
        // origin coincides with the simulated center of mass.
        let mut body = RigidBody::new(descriptor.mass).with_position(-derived.offset);
        if let ColliderShape::Box { half_extents } = &derived.shape {
            body.set_inertia(Mat3::for_solid_box(*half_extents, descriptor.mass));
        }
        if let Some((axis, angle)) = descriptor.orientation {
            body.transform.rotation = Quat::from_axis_angle(axis.normalize(), angle);
        }
        body.material = world.contact_material;

        let body_id = world.add_body(body);
        world.add_collider_for(
            body_id,
            Collider::new(derived.shape)
                .with_offset(derived.offset)
                .with_orientation(derived.orientation),
        );

        let mut object = SimObject::new(descriptor.menu_name.clone(), mesh, body_id);
        object.offset = derived.offset;
        object.floating = descriptor.floating;
        object.anchor_offset = descriptor.anchor_offset;
        object.pending_impulses = descriptor.pending_impulses;
        registry.upsert(object);

        debug!("introduced '{}'", descriptor.menu_name);
        Ok(Introduction::Introduced(descriptor.menu_name))
    }
}
