//! Layered skin file resolution.
//!
//! Candidate order for a skin file:
//! 1. user directory of the active skin
//! 2. system directory of the active skin
//! 3. user directory of `Default` (only with default fallback)
//! 4. system directory of `Default` (only with default fallback)
//!
//! The first candidate that exists wins. A miss is `None`, never an error.

use std::path::{Path, PathBuf};

use tessera_types::config::DEFAULT_SKIN;
use tessera_vfs::{FileProbe, HostFs};

use crate::context::SkinContext;
use crate::dirs::{RootedSkinDirs, SkinDirs};

/// Resolves skin-relative file names to concrete paths.
#[derive(Debug)]
pub struct SkinResolver<P = HostFs, D = RootedSkinDirs> {
    context: SkinContext,
    dirs: D,
    probe: P,
}

impl<P: FileProbe, D: SkinDirs> SkinResolver<P, D> {
    /// Create a resolver with `Default` as the active skin.
    pub fn new(dirs: D, probe: P) -> Self {
        Self {
            context: SkinContext::new(),
            dirs,
            probe,
        }
    }

    /// Change the active skin. Nothing is validated or invalidated.
    pub fn set_skin(&mut self, name: impl Into<String>) {
        self.context.set_skin(name);
        log::debug!("Active skin set to '{}'", self.context.name());
    }

    pub fn skin(&self) -> &str {
        self.context.name()
    }

    pub fn context(&self) -> &SkinContext {
        &self.context
    }

    pub fn dirs(&self) -> &D {
        &self.dirs
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Returns `true` if `path` exists according to the probe.
    pub fn path_exists(&self, path: &Path) -> bool {
        self.probe.exists(path)
    }

    /// Location of a skin's directory: the user directory if it exists,
    /// else the system directory, else `None`.
    pub fn resolve_skin_root(&self, skin: &str) -> Option<PathBuf> {
        [self.dirs.local_skin_path(skin), self.dirs.system_skin_path(skin)]
            .into_iter()
            .find(|path| self.probe.exists(path))
    }

    /// Find `file` in the active skin, optionally falling back to `Default`.
    pub fn resolve_skin_file(&self, file: &str, use_default: bool) -> Option<PathBuf> {
        let skin = self.context.name();
        let active = [
            self.dirs.local_skin_path(skin),
            self.dirs.system_skin_path(skin),
        ];
        if let Some(path) = self.first_existing(&active, file) {
            return Some(path);
        }
        if !use_default {
            return None;
        }
        let fallback = [
            self.dirs.local_skin_path(DEFAULT_SKIN),
            self.dirs.system_skin_path(DEFAULT_SKIN),
        ];
        self.first_existing(&fallback, file)
    }

    fn first_existing(&self, roots: &[PathBuf], file: &str) -> Option<PathBuf> {
        // Skin file names are always relative to the skin directory.
        let file = file.trim_start_matches('/');
        roots
            .iter()
            .map(|root| root.join(file))
            .find(|path| self.probe.exists(path))
    }
}
