use log::{log_enabled, Level};
use std::time::Instant;

/// Scoped timer logging the duration of a frame phase at trace level.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("begin {label}");
        }
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            log::trace!(
                "end {} ({} µs)",
                self.label,
                self.start.elapsed().as_micros()
            );
        }
    }
}
