//! Liveness flag tying async work to a mounted component.
//!
//! Each [`MountScope`](super::mount::MountScope) owns one and ends it on
//! unmount. Clones go to frame loops and in-flight requests; work that
//! outlives the component checks [`Lifetime::is_alive`] before touching state.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Lifetime {
    alive: Arc<AtomicBool>,
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifetime {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// End the lifetime for every clone. Idempotent.
    pub fn end(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}
