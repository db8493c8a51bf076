//! Core types describing simulated entities and shared data.

pub mod collider;
pub mod constraints;
pub mod mesh;
pub mod rigidbody;
pub mod types;

pub use collider::{Collider, ColliderShape};
pub use constraints::{Joint, JointHandle};
pub use mesh::{derive_box_collider, Aabb, DerivedShape, MeshInstance};
pub use rigidbody::RigidBody;
pub use types::{ContactMaterial, InertiaTensorExt, Transform, Velocity};
