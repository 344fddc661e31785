//! Common utilities for the Mensura geometry engine.
//!
//! This crate provides shared infrastructure used by the other components:
//! - **Warning System** - deduplicated colored diagnostics for unsupported
//!   style input

pub mod warning;
