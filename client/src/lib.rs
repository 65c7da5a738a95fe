//! # client
//!
//! Leptos + WASM frontend for the LumiqAI × Santander pitch site.
//!
//! This crate contains pages, components, section-local state, the count-up
//! tween, and the lead-capture submission pipeline. Static copy and datasets
//! come from the `content` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
