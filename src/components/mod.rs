//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and modal surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod document_table;
pub mod file_viewer_modal;
pub mod filter_panel;
pub mod navbar;
pub mod share_modal;
pub mod toast;
