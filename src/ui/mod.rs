//! UI panel rendering subsystem
//!
//! This module contains all egui rendering for the Aurora shell:
//! - Header panel (brand, navigation links, mobile menu toggle, theme toggle)
//! - Page sections (hero, features, gallery carousel)
//! - Contact form (fields, inline errors, status line)
//! - Footer (copyright year)
//! - Panel manager (panel orchestration and layout)
//!
//! Renderers never mutate page state directly except for form field text; every
//! click is returned as a [`PageEvent`](aurora_page::PageEvent) for the coordinator.

pub mod contact_panel;
pub mod footer;
pub mod header;
pub mod panel_manager;
pub mod sections;
