use crate::core::mesh::{Aabb, MeshInstance};
use std::collections::HashMap;

/// Resolves a model identifier to a fresh renderable mesh instance.
///
/// `None` means the asset has not finished loading. Hosts with asynchronous
/// loaders complete loads between frames (the loop is single-threaded, so
/// completions never interleave with a frame in flight) and the sequencer
/// simply sees the identifier become resolvable.
pub trait AssetProvider {
    fn resolve(&mut self, model_id: &str) -> Option<MeshInstance>;
}

/// Prototype cache mapping model identifiers to loaded bounds.
///
/// Every `resolve` clones the prototype, so one loaded model can back any
/// number of scene instances.
#[derive(Debug, Default)]
pub struct MeshLibrary {
    prototypes: HashMap<String, Aabb>,
}

impl MeshLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a model load as complete.
    pub fn insert_prototype(&mut self, model_id: impl Into<String>, bounds: Aabb) {
        self.prototypes.insert(model_id.into(), bounds);
    }

    pub fn is_loaded(&self, model_id: &str) -> bool {
        self.prototypes.contains_key(model_id)
    }
}

impl AssetProvider for MeshLibrary {
    fn resolve(&mut self, model_id: &str) -> Option<MeshInstance> {
        self.prototypes
            .get(model_id)
            .map(|bounds| MeshInstance::new(model_id, *bounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn unloaded_models_are_not_ready() {
        let mut library = MeshLibrary::new();
        assert!(library.resolve("eye").is_none());
    }

    #[test]
    fn resolve_clones_per_instance() {
        let mut library = MeshLibrary::new();
        library.insert_prototype("eye", Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0)));

        let mut first = library.resolve("eye").expect("loaded");
        first.transform.position = Vec3::X;
        let second = library.resolve("eye").expect("loaded");
        assert_eq!(second.transform.position, Vec3::ZERO);
    }
}
