//! Networking modules for lead delivery.
//!
//! SYSTEM CONTEXT
//! ==============
//! `delivery` defines the relay seam and error taxonomy, `emailjs` implements
//! it over HTTP, `payload` shapes template variables, and `pipeline` runs a
//! form submission end to end.

pub mod delivery;
pub mod emailjs;
pub mod payload;
pub mod pipeline;
