//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render panels and chrome while reading shared state from
//! Leptos context providers. Backend calls go through `app::Actions`.

pub mod ar_vr_panel;
pub mod auth_modal;
pub mod chat_panel;
pub mod community_panel;
pub mod nav_bar;
pub mod profile_wizard;
pub mod result_panel;
pub mod scenario_grid;
pub mod simulation_form;
pub mod technical_docs;
