use glam::{Mat4, Vec2, Vec3};

/// Projects world-space points into normalized device coordinates.
///
/// The core only consumes this for floating-object boundary checks, so the
/// seam stays a single method.
pub trait Projector {
    fn project(&self, world: Vec3) -> Vec2;
}

/// Perspective camera matching the host renderer's view of the scene.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    pub fn new(position: Vec3, target: Vec3, up: Vec3, fov_y: f32, aspect: f32) -> Self {
        Self {
            position,
            target,
            up,
            fov_y,
            aspect,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Camera straight above the origin looking down, with screen-up mapped
    /// to world -Z. This is the session's default viewpoint.
    pub fn overhead(height: f32, aspect: f32) -> Self {
        Self::new(
            Vec3::new(0.0, height, 0.0),
            Vec3::ZERO,
            Vec3::NEG_Z,
            60f32.to_radians(),
            aspect,
        )
    }

    fn view_projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
            * Mat4::look_at_rh(self.position, self.target, self.up)
    }
}

impl Projector for PerspectiveCamera {
    fn project(&self, world: Vec3) -> Vec2 {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w.abs() < f32::EPSILON {
            return Vec2::ZERO;
        }
        Vec2::new(clip.x / clip.w, clip.y / clip.w)
    }
}
