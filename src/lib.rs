//! # medtrack
//!
//! Leptos + WASM client for a personal/family prescription and medical
//! report tracker. All business logic (auth, storage, share tokens, file
//! persistence) lives in a remote backend consumed over HTTP with session
//! cookies; this crate is presentation and client-side state only.
//!
//! The crate compiles natively with default features so the unit test
//! suite runs without a browser; everything that touches `window`, the
//! network, or timers is gated behind the `web` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
