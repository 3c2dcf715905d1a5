//! Shell configuration.
//!
//! Read from a TOML file at startup. Every field has a default, so an
//! empty file (or no file at all) yields a working configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, TesseraError};

/// Name of the skin every resolution falls back to.
pub const DEFAULT_SKIN: &str = "Default";

/// Top-level shell configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Skin that is active at startup.
    pub skin: String,
    /// Root of the user-writable skin directories (`<root>/<skin>`).
    pub local_skin_root: PathBuf,
    /// Root of the read-only, system-provided skin directories.
    pub system_skin_root: PathBuf,
    /// Show the clock in 24-hour format.
    pub clock_24h: bool,
    /// Sysfs file holding the battery capacity in percent.
    pub battery_sysfs: PathBuf,
    /// Sysfs file that reads `1` while external power is connected.
    pub power_supply_sysfs: PathBuf,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            skin: DEFAULT_SKIN.to_string(),
            local_skin_root: default_local_root(),
            system_skin_root: PathBuf::from("/usr/share/tessera/skins"),
            clock_24h: true,
            battery_sysfs: PathBuf::from("/sys/class/power_supply/battery/capacity"),
            power_supply_sysfs: PathBuf::from("/sys/class/power_supply/usb/online"),
        }
    }
}

fn default_local_root() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".tessera").join("skins"),
        None => PathBuf::from("skins"),
    }
}

impl ShellConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        if config.skin.is_empty() {
            return Err(TesseraError::Config("skin name must not be empty".into()));
        }
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
