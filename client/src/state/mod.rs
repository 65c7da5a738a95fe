//! Client-side state containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page section owns its state locally in an `RwSignal`; nothing here is
//! shared across sections. Types are plain data so transitions are tested
//! without a reactive runtime.

pub mod counter;
pub mod disclosure;
pub mod lead_form;
pub mod tabs;
