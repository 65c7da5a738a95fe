//! Per-mount scope: a [`Lifetime`] plus browser handles released on unmount.
//!
//! DESIGN
//! ======
//! `on_cleanup` only accepts `Send + Sync` closures, while observers, JS
//! closures and abort controllers are single-threaded handles. Release hooks
//! are parked in a `LocalStorage` [`StoredValue`] owned by the component. The
//! owner runs cleanups before it disposes its arena, so the hooks are still
//! reachable when the scope ends.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use leptos::prelude::*;

use super::lifetime::Lifetime;

type Release = Box<dyn FnOnce()>;

#[derive(Default)]
struct Teardown {
    ended: bool,
    pending: Vec<Release>,
}

impl Teardown {
    fn drain(&mut self) -> Vec<Release> {
        self.ended = true;
        std::mem::take(&mut self.pending)
    }
}

#[derive(Clone)]
pub struct MountScope {
    lifetime: Lifetime,
    teardown: StoredValue<Teardown, LocalStorage>,
}

impl MountScope {
    /// Scope that ends when the current reactive owner cleans up.
    #[must_use]
    pub fn new() -> Self {
        let scope = Self::detached();
        let on_unmount = scope.clone();
        on_cleanup(move || on_unmount.end());
        scope
    }

    /// Scope with no owner hook; the caller ends it.
    #[must_use]
    pub fn detached() -> Self {
        Self { lifetime: Lifetime::new(), teardown: StoredValue::new_local(Teardown::default()) }
    }

    #[must_use]
    pub fn lifetime(&self) -> &Lifetime {
        &self.lifetime
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.lifetime.is_alive()
    }

    /// Run `release` when the scope ends, or right away if it already has.
    pub fn defer(&self, release: impl FnOnce() + 'static) {
        let mut slot: Option<Release> = Some(Box::new(release));
        self.teardown.try_update_value(|t| {
            if !t.ended {
                t.pending.extend(slot.take());
            }
        });
        if let Some(release) = slot {
            release();
        }
    }

    /// End the lifetime and run every deferred release once. Idempotent.
    pub fn end(&self) {
        self.lifetime.end();
        let pending = self.teardown.try_update_value(Teardown::drain).unwrap_or_default();
        for release in pending {
            release();
        }
    }
}
