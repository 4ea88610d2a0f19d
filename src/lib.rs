//! Host bindings for the Odia transliteration engine.
//!
//! Pure functions and the editing session live in `odia-core` and
//! `odia-session`; this crate exports them through UniFFI.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;

pub use odia_core;
pub use odia_session;
