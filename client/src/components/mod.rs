//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections and own their section-local state. Shared
//! inputs (content registry, delivery choice) come from Leptos context.

pub mod competitor_cards;
pub mod count_up;
pub mod faq_accordion;
pub mod footer;
pub mod funnel_tabs;
pub mod header;
pub mod lead_form;
pub mod modal;
pub mod process_steps;
