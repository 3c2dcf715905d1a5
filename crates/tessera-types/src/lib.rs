//! Foundation types for tessera.
//!
//! Shared by every tessera crate: the error type, RGBA colors, and the
//! shell configuration that tells the resolver where skins live.

pub mod color;
pub mod config;
pub mod error;
