//! tessera desktop demo.
//!
//! Loads the shell configuration, activates the configured skin and pulls
//! the status-bar resources through the skinned resource cache: the
//! wallpaper, the battery icon, and the clock text.
//!
//! Usage: `tessera-app [config.toml]` (or set `TESSERA_CONFIG`).

mod battery;
mod clock;

use std::path::PathBuf;

use anyhow::{Context, Result};

use battery::{Battery, SysfsPower};
use clock::Clock;
use tessera_cache::{FsImageLoader, ResourceCache};
use tessera_skin::{RootedSkinDirs, SkinResolver};
use tessera_types::config::ShellConfig;
use tessera_vfs::HostFs;

const WALLPAPER: &str = "skin:wallpapers/default.png";
/// Shown when the skin has no wallpaper.
const WALLPAPER_PLACEHOLDER: &str = "480x272#202020";

fn load_config() -> Result<ShellConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TESSERA_CONFIG").ok())
        .map(PathBuf::from);
    match path {
        Some(path) => ShellConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(ShellConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    log::info!(
        "Starting tessera (skin '{}', user skins {}, system skins {})",
        config.skin,
        config.local_skin_root.display(),
        config.system_skin_root.display(),
    );

    let resolver = SkinResolver::new(RootedSkinDirs::from_config(&config), HostFs);
    let mut cache = ResourceCache::new(FsImageLoader, resolver);
    cache.set_skin(config.skin.as_str());
    match cache.resolver().resolve_skin_root(&config.skin) {
        Some(root) => log::info!("Skin directory: {}", root.display()),
        None => log::warn!(
            "Skin '{}' not found -- resources fall back to Default",
            config.skin
        ),
    }

    let wallpaper = cache
        .lookup_or_load(WALLPAPER)
        .or_else(|| cache.lookup_or_load(WALLPAPER_PLACEHOLDER));
    match &wallpaper {
        Some(surface) => log::info!("Wallpaper: {}x{}", surface.width, surface.height),
        None => log::warn!("No wallpaper available"),
    }

    let mut battery = Battery::new(SysfsPower::from_config(&config));
    let level = battery.level();
    match battery.icon(&mut cache) {
        Some(icon) => log::info!("Battery {level:?}: {}x{} icon", icon.width, icon.height),
        None => log::info!("Battery {level:?}: no icon in skin"),
    }

    let clock = Clock::new();
    log::info!("Time: {}", clock.time_string(config.clock_24h));

    log::info!("{} resources cached", cache.len());
    cache.log_keys();
    Ok(())
}
