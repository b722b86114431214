//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `members`, `documents`,
//! `filters`, `notify`) so individual components can depend on small
//! focused models. Each domain lives in one `RwSignal` provided from
//! the app root.

pub mod documents;
pub mod filters;
pub mod members;
pub mod notify;
pub mod session;
