//! Image loading behind a trait boundary.
//!
//! The cache never decodes anything itself. It hands an [`ImageSource`]
//! plus an optional target size to an [`ImageLoader`] and stores whatever
//! comes back.

use std::path::Path;

use tessera_types::error::Result;

use crate::image::{self, Surface};

/// What the loader is asked to materialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource<'a> {
    /// A concrete file that existed at resolution time.
    File(&'a Path),
    /// An inline spec (any key containing `#`); never checked on disk.
    Inline(&'a str),
}

impl std::fmt::Display for ImageSource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Inline(spec) => f.write_str(spec),
        }
    }
}

/// Turns an image source into a loaded resource.
pub trait ImageLoader {
    type Resource;

    /// Load `source`, scaled to `width`x`height` (0 = natural size).
    fn load_image(
        &mut self,
        source: ImageSource<'_>,
        width: u32,
        height: u32,
    ) -> Result<Self::Resource>;
}

/// Loads images from the host filesystem into RGBA [`Surface`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageLoader;

impl ImageLoader for FsImageLoader {
    type Resource = Surface;

    fn load_image(&mut self, source: ImageSource<'_>, width: u32, height: u32) -> Result<Surface> {
        match source {
            ImageSource::Inline(spec) => image::render_inline(spec, width, height),
            ImageSource::File(path) => {
                let data = std::fs::read(path)?;
                let surface = image::decode_image(&data)?;
                image::fit(surface, width, height)
            },
        }
    }
}
