//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is a sequence of independent sections. Pages pick content keys
//! and delegate rendering and section state to `components`.

pub mod case_study;
pub mod contact;
pub mod features;
pub mod home;
pub mod how_it_works;
pub mod not_found;
pub mod pilot;
pub mod security;
pub mod solutions;
