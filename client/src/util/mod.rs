//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep browser concerns (frame scheduling, lifetimes) and
//! pure logic (easing, formatting, validation) out of components so they can
//! be tested natively.

pub mod format;
pub mod lifetime;
pub mod mount;
pub mod tween;
pub mod validation;
