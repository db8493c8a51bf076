use crate::core::{
    constraints::JointHandle,
    mesh::MeshInstance,
};
use crate::utils::allocator::ArenaId;
use glam::Vec3;
use std::collections::BTreeMap;

/// Name of the always-present hub entry.
pub const HUB_NAME: &str = "center";

/// Combined render/physics state of one scene object.
///
/// Entries are created whole by the sequencer (mesh and body together), so
/// the updater never sees a half-loaded object. Objects persist until the
/// session ends.
#[derive(Debug, Clone)]
pub struct SimObject {
    pub name: String,
    pub mesh: MeshInstance,
    pub body: ArenaId,
    /// Collision-shape center relative to the mesh origin.
    pub offset: Vec3,
    /// Enables free-roam perturbation and screen-space bouncing.
    pub floating: bool,
    /// Target offset from the hub; presence marks the anchored category.
    pub anchor_offset: Option<Vec3>,
    /// Simulation timestamp until which `active_force` keeps being applied.
    pub force_expire: f32,
    /// Direction of the current perturbation window.
    pub active_force: Vec3,
    /// One-shot impulses, consumed newest-first, one per frame.
    pub pending_impulses: Vec<Vec3>,
    /// Set once the hub joint is attached; never cleared.
    pub joint: Option<JointHandle>,
}

impl SimObject {
    pub fn new(name: impl Into<String>, mesh: MeshInstance, body: ArenaId) -> Self {
        Self {
            name: name.into(),
            mesh,
            body,
            offset: Vec3::ZERO,
            floating: false,
            anchor_offset: None,
            force_expire: 0.0,
            active_force: Vec3::ZERO,
            pending_impulses: Vec::new(),
            joint: None,
        }
    }
}

/// Name-keyed mapping of every live scene object.
///
/// A `BTreeMap` keeps iteration order deterministic, which keeps the shared
/// RNG stream reproducible across runs with the same seed.
#[derive(Debug, Default)]
pub struct SceneRegistry {
    entries: BTreeMap<String, SimObject>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&SimObject> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SimObject> {
        self.entries.get_mut(name)
    }

    /// Inserts or replaces the entry under the object's name.
    pub fn upsert(&mut self, object: SimObject) {
        self.entries.insert(object.name.clone(), object);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn hub(&self) -> Option<&SimObject> {
        self.entries.get(HUB_NAME)
    }

    pub fn entries(&self) -> impl Iterator<Item = &SimObject> {
        self.entries.values()
    }

    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut SimObject> {
        self.entries.values_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
