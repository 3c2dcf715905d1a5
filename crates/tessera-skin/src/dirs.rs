//! Skin directory provider.

use std::path::{Path, PathBuf};

use tessera_types::config::ShellConfig;

/// Maps a skin name to its user and system directories.
///
/// Implementations are pure: the returned paths need not exist.
pub trait SkinDirs {
    /// User-writable directory of `skin`.
    fn local_skin_path(&self, skin: &str) -> PathBuf;

    /// Read-only, system-provided directory of `skin`.
    fn system_skin_path(&self, skin: &str) -> PathBuf;
}

/// Skins stored as `<root>/<skin name>` under two roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootedSkinDirs {
    local_root: PathBuf,
    system_root: PathBuf,
}

impl RootedSkinDirs {
    pub fn new(local_root: impl Into<PathBuf>, system_root: impl Into<PathBuf>) -> Self {
        Self {
            local_root: local_root.into(),
            system_root: system_root.into(),
        }
    }

    pub fn from_config(config: &ShellConfig) -> Self {
        Self::new(&config.local_skin_root, &config.system_skin_root)
    }

    pub fn local_root(&self) -> &Path {
        &self.local_root
    }

    pub fn system_root(&self) -> &Path {
        &self.system_root
    }
}

impl SkinDirs for RootedSkinDirs {
    fn local_skin_path(&self, skin: &str) -> PathBuf {
        self.local_root.join(skin)
    }

    fn system_skin_path(&self, skin: &str) -> PathBuf {
        self.system_root.join(skin)
    }
}
