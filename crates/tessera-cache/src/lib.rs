//! Skinned resource cache.
//!
//! Maps logical resource keys (`skin:icons/app.png`, `/abs/wallpaper.png`,
//! `16x16#FF0000`) to loaded images, loading each one on first request
//! and handing out shared [`std::sync::Arc`] handles. Every consumer that
//! asks for the same key gets the same instance until the entry is
//! explicitly removed, renamed, or the cache is cleared.

pub mod cache;
pub mod image;
pub mod key;
pub mod loader;

pub use cache::{Handle, ResourceCache};
pub use image::Surface;
pub use key::ResourceKey;
pub use loader::{FsImageLoader, ImageLoader, ImageSource};
