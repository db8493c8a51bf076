use crate::utils::allocator::ArenaId;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Constraints solved by the world each substep.
///
/// The scene only needs point-to-point joints (object origin to hub anchor),
/// but the enum leaves room for richer joints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Joint {
    PointToPoint {
        body_a: ArenaId,
        pivot_a: Vec3,
        body_b: ArenaId,
        pivot_b: Vec3,
    },
}

/// Handle to a registered joint, used to make attachment idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointHandle(pub usize);
