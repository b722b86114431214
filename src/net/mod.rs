//! Networking modules for the backend HTTP contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` resolves the single backend base URL, `api` owns request
//! plumbing and the auth endpoints, `documents` and `share` cover the
//! rest of the REST surface, and `types` defines the wire schema.

pub mod api;
pub mod config;
pub mod documents;
pub mod share;
pub mod types;
