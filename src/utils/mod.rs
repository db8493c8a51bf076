//! Utility helpers: the session-lifetime arena and logging instrumentation.

pub mod allocator;
pub mod logging;

pub use allocator::{Arena, ArenaId};
pub use logging::ScopedTimer;
