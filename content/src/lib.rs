//! Static marketing content for the LumiqAI × Santander pitch site.
//!
//! This crate is UI-framework agnostic. Every record is `&'static` data
//! authored once here and read through [`ContentRegistry`], so pages never
//! carry private copies of datasets that appear in more than one place.

pub mod case_study;
pub mod competitors;
pub mod faq;
pub mod funnel;
pub mod metrics;
pub mod process;
pub mod registry;
pub mod routes;

pub use registry::ContentRegistry;
