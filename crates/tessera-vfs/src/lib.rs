//! File existence probes.
//!
//! The resolver only ever needs to ask "does this path exist?". Putting
//! that question behind [`FileProbe`] lets the skin resolver and the
//! resource cache run against the host filesystem in production and
//! against [`MemoryProbe`] in tests.

pub mod memory;

pub use memory::MemoryProbe;

use std::path::Path;

/// Side-effect-free existence check.
pub trait FileProbe {
    /// Returns `true` if a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

impl<P: FileProbe + ?Sized> FileProbe for &P {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

impl<P: FileProbe + ?Sized> FileProbe for Box<P> {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

/// Probe backed by the host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFs;

impl FileProbe for HostFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
