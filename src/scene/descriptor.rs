use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Recipe for one not-yet-introduced scene object.
///
/// Optional behavior is expressed through explicit defaults rather than
/// absent fields: a plain descriptor produces a non-floating, unanchored
/// body with no initial impulses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingDescriptor {
    /// Registry name the introduced object will take.
    pub menu_name: String,
    /// Asset identifier resolved through the provider; several descriptors
    /// may share one identifier.
    pub model_id: String,
    /// Uniform scale applied to the mesh before shape derivation.
    pub scale: f32,
    pub mass: f32,
    /// Target offset from the hub; `Some` puts the object in the anchored
    /// category.
    pub anchor_offset: Option<Vec3>,
    pub floating: bool,
    /// Initial one-shot impulses, consumed newest-first.
    pub pending_impulses: Vec<Vec3>,
    /// Initial orientation as a (axis, angle) pair.
    pub orientation: Option<(Vec3, f32)>,
}

impl PendingDescriptor {
    pub fn new(
        menu_name: impl Into<String>,
        model_id: impl Into<String>,
        scale: f32,
        mass: f32,
    ) -> Self {
        Self {
            menu_name: menu_name.into(),
            model_id: model_id.into(),
            scale,
            mass,
            anchor_offset: None,
            floating: false,
            pending_impulses: Vec::new(),
            orientation: None,
        }
    }

    pub fn anchored(mut self, offset: Vec3) -> Self {
        self.anchor_offset = Some(offset);
        self
    }

    pub fn floating(mut self) -> Self {
        self.floating = true;
        self
    }

    pub fn with_impulses(mut self, impulses: Vec<Vec3>) -> Self {
        self.pending_impulses = impulses;
        self
    }

    pub fn with_orientation(mut self, axis: Vec3, angle: f32) -> Self {
        self.orientation = Some((axis, angle));
        self
    }
}
