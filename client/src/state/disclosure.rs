//! Expand/collapse state for cards, accordions, modals and menus.
//!
//! DESIGN
//! ======
//! Controllers own only which ids are open. Transitions (CSS, animation) are
//! the component's concern. Two flavors share the [`Disclosure`] trait:
//! exclusive groups hold at most one open id, independent groups hold a set.

#[cfg(test)]
#[path = "disclosure_test.rs"]
mod disclosure_test;

use std::collections::BTreeSet;

pub trait Disclosure<K> {
    /// Flip `id` between open and closed.
    fn toggle(&mut self, id: K);

    fn is_open(&self, id: &K) -> bool;

    fn close_all(&mut self);
}

/// At most one id open. Opening another id closes the previous one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExclusiveDisclosure<K> {
    open: Option<K>,
}

impl<K> Default for ExclusiveDisclosure<K> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<K: PartialEq> ExclusiveDisclosure<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn open_id(&self) -> Option<&K> {
        self.open.as_ref()
    }
}

impl<K: PartialEq> Disclosure<K> for ExclusiveDisclosure<K> {
    fn toggle(&mut self, id: K) {
        if self.open.as_ref() == Some(&id) {
            self.open = None;
        } else {
            self.open = Some(id);
        }
    }

    fn is_open(&self, id: &K) -> bool {
        self.open.as_ref() == Some(id)
    }

    fn close_all(&mut self) {
        self.open = None;
    }
}

/// Each id toggles on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndependentDisclosure<K: Ord> {
    open: BTreeSet<K>,
}

impl<K: Ord> Default for IndependentDisclosure<K> {
    fn default() -> Self {
        Self { open: BTreeSet::new() }
    }
}

impl<K: Ord> IndependentDisclosure<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close(&mut self, id: &K) {
        self.open.remove(id);
    }

    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

impl<K: Ord> Disclosure<K> for IndependentDisclosure<K> {
    fn toggle(&mut self, id: K) {
        if !self.open.remove(&id) {
            self.open.insert(id);
        }
    }

    fn is_open(&self, id: &K) -> bool {
        self.open.contains(id)
    }

    fn close_all(&mut self) {
        self.open.clear();
    }
}
