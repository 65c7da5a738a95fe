//! Tweening primitives shared by every animated figure on the site.
//!
//! DESIGN
//! ======
//! [`Tween`] is a pure function of elapsed time so interpolation can be
//! tested without a browser. [`run`] drives a tween from
//! `requestAnimationFrame` in the `csr` build and owns the cancellation
//! contract: once the caller's [`Lifetime`] ends, no further ticks fire.

#[cfg(test)]
#[path = "tween_test.rs"]
mod tween_test;

use super::lifetime::Lifetime;

/// Duration used by count-up counters.
pub const DEFAULT_DURATION_MS: f64 = 2_000.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    CubicOut,
    QuadInOut,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    #[must_use]
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self { from, to, duration_ms, easing: Easing::default() }
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress in `[0, 1]`. Non-positive durations are complete at once.
    #[must_use]
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms.max(0.0) / self.duration_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }

    /// Interpolated value; exactly `to` once complete.
    #[must_use]
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let progress = self.progress(elapsed_ms);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }
}

/// Drive `tween` frame by frame, calling `on_tick(value, done)` each frame
/// until it completes or `lifetime` ends.
///
/// The final tick always carries `done = true` and exactly `tween.to`.
/// Outside the browser there is no frame loop, so the final tick is
/// delivered synchronously.
pub fn run(tween: Tween, lifetime: &Lifetime, on_tick: impl FnMut(f64, bool) + 'static) {
    if !lifetime.is_alive() {
        return;
    }
    #[cfg(feature = "csr")]
    {
        frame_loop(tween, on_tick, lifetime.clone());
    }
    #[cfg(not(feature = "csr"))]
    {
        let mut on_tick = on_tick;
        on_tick(tween.to, true);
    }
}

#[cfg(feature = "csr")]
fn frame_loop(tween: Tween, on_tick: impl FnMut(f64, bool) + 'static, lifetime: Lifetime) {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let on_tick = Rc::new(RefCell::new(on_tick));
    let finish = {
        let on_tick = Rc::clone(&on_tick);
        let lifetime = lifetime.clone();
        move || {
            if !lifetime.is_alive() {
                return;
            }
            log::warn!("animation frame request failed; jumping to final value");
            (&mut *on_tick.borrow_mut())(tween.to, true);
        }
    };

    let Some(window) = web_sys::window() else {
        finish();
        return;
    };

    let started_at: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let finish_for_cb = finish.clone();
    let cb = Closure::wrap(Box::new(move |ts: f64| {
        if !lifetime.is_alive() {
            holder_for_cb.borrow_mut().take();
            return;
        }
        let start = started_at.get().unwrap_or(ts);
        started_at.set(Some(start));
        let elapsed = ts - start;
        let done = tween.is_complete(elapsed);
        (&mut *on_tick.borrow_mut())(tween.value_at(elapsed), done);
        if done {
            holder_for_cb.borrow_mut().take();
            return;
        }
        let requested = web_sys::window().is_some_and(|w| {
            holder_for_cb
                .borrow()
                .as_ref()
                .is_some_and(|cb| w.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok())
        });
        if !requested {
            holder_for_cb.borrow_mut().take();
            finish_for_cb();
        }
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    } else {
        finish();
    }
}
