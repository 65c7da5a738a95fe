//! Active-tab selection over a closed set of dataset keys.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabSwitcher<K> {
    active: K,
}

impl<K: Copy + PartialEq> TabSwitcher<K> {
    #[must_use]
    pub fn new(initial: K) -> Self {
        Self { active: initial }
    }

    #[must_use]
    pub fn active(&self) -> K {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, key: K) -> bool {
        self.active == key
    }

    /// Make `key` active. Returns `false` when it already was.
    pub fn select(&mut self, key: K) -> bool {
        if self.active == key {
            return false;
        }
        self.active = key;
        true
    }
}
