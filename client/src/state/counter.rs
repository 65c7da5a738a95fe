//! Count-up counter state driven by a visibility trigger.
//!
//! DESIGN
//! ======
//! The state machine is `Idle -> Running -> Done`. [`CountUpState::trigger`]
//! is the only way out of `Idle` and fires at most once per mount, so a
//! counter that scrolls in and out of view animates exactly once. Frame
//! scheduling lives in `util::tween`; this type only records what to show.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::util::tween::{DEFAULT_DURATION_MS, Tween};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CountUpPhase {
    #[default]
    Idle,
    Running,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUpState {
    pub target: f64,
    pub duration_ms: f64,
    pub phase: CountUpPhase,
    /// Raw value currently displayed; formatting happens at render time.
    pub display: f64,
}

impl CountUpState {
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self { target, duration_ms: DEFAULT_DURATION_MS, phase: CountUpPhase::Idle, display: 0.0 }
    }

    #[must_use]
    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Start the animation. Returns the tween to run on the first call only.
    ///
    /// A zero target settles immediately and needs no frames.
    pub fn trigger(&mut self) -> Option<Tween> {
        if self.phase != CountUpPhase::Idle {
            return None;
        }
        if self.target == 0.0 {
            self.display = 0.0;
            self.phase = CountUpPhase::Done;
            return None;
        }
        self.phase = CountUpPhase::Running;
        Some(Tween::new(0.0, self.target, self.duration_ms))
    }

    /// Record one animation frame. Ignored unless running.
    pub fn tick(&mut self, value: f64, done: bool) {
        if self.phase != CountUpPhase::Running {
            return;
        }
        if done {
            self.display = self.target;
            self.phase = CountUpPhase::Done;
        } else {
            self.display = value;
        }
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != CountUpPhase::Idle
    }
}
