//! Skin system -- where a skin's assets live and how files are found.
//!
//! A skin is a named pair of directories: a user-writable one and a
//! read-only system one. Files are looked up per file, user directory
//! first, and fall back to the `Default` skin when the active skin does
//! not provide them, so a partially customized skin degrades gracefully.

pub mod context;
pub mod dirs;
pub mod resolver;

pub use context::SkinContext;
pub use dirs::{RootedSkinDirs, SkinDirs};
pub use resolver::SkinResolver;
pub use tessera_types::config::DEFAULT_SKIN;
