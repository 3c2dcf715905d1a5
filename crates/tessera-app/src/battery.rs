//! Battery status and the matching skin icon.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tessera_cache::{ImageLoader, ResourceCache};
use tessera_skin::SkinDirs;
use tessera_types::config::ShellConfig;
use tessera_vfs::FileProbe;

/// How long a sampled level stays valid.
const UPDATE_INTERVAL: Duration = Duration::from_secs(60);

/// Something that can report the power state.
pub trait PowerSource {
    /// Remaining charge in percent, `None` if there is no battery.
    fn battery_capacity(&self) -> Option<u8>;

    /// Returns `true` while running on external power.
    fn on_external_power(&self) -> bool;
}

/// Power state read from sysfs files.
#[derive(Debug, Clone)]
pub struct SysfsPower {
    capacity: PathBuf,
    online: PathBuf,
}

impl SysfsPower {
    pub fn new(capacity: impl Into<PathBuf>, online: impl Into<PathBuf>) -> Self {
        Self {
            capacity: capacity.into(),
            online: online.into(),
        }
    }

    pub fn from_config(config: &ShellConfig) -> Self {
        Self::new(&config.battery_sysfs, &config.power_supply_sysfs)
    }
}

fn read_number(path: &Path) -> Option<u32> {
    std::fs::read_to_string(path).ok()?.trim().parse().ok()
}

impl PowerSource for SysfsPower {
    fn battery_capacity(&self) -> Option<u8> {
        read_number(&self.capacity).map(|c| c.min(100) as u8)
    }

    fn on_external_power(&self) -> bool {
        read_number(&self.online) == Some(1)
    }
}

/// Icon-level bucket of the battery state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryLevel {
    /// Charging, or no battery at all.
    Ac,
    /// 0 (empty) through 5 (full).
    Charge(u8),
}

impl BatteryLevel {
    pub fn from_source(source: &impl PowerSource) -> Self {
        if source.on_external_power() {
            return Self::Ac;
        }
        match source.battery_capacity() {
            Some(capacity) => Self::Charge((capacity / 20).min(5)),
            None => Self::Ac,
        }
    }

    /// Skin-relative file name of the icon for this level.
    pub fn icon_file(self) -> String {
        match self {
            Self::Ac => "imgs/battery/ac.png".to_string(),
            Self::Charge(n) => format!("imgs/battery/{n}.png"),
        }
    }
}

/// Keeps track of the battery status.
#[derive(Debug)]
pub struct Battery<S> {
    source: S,
    level: BatteryLevel,
    last_update: Instant,
}

impl<S: PowerSource> Battery<S> {
    pub fn new(source: S) -> Self {
        let level = BatteryLevel::from_source(&source);
        Self {
            source,
            level,
            last_update: Instant::now(),
        }
    }

    /// Re-sample the power state now.
    pub fn update(&mut self) {
        let level = BatteryLevel::from_source(&self.source);
        if level != self.level {
            log::debug!("Battery level changed: {:?} -> {level:?}", self.level);
        }
        self.level = level;
        self.last_update = Instant::now();
    }

    /// Current level, re-sampled at most once per minute.
    pub fn level(&mut self) -> BatteryLevel {
        if self.last_update.elapsed() >= UPDATE_INTERVAL {
            self.update();
        }
        self.level
    }

    /// The icon reflecting the current battery status.
    pub fn icon<L, P, D>(&mut self, cache: &mut ResourceCache<L, P, D>) -> Option<Arc<L::Resource>>
    where
        L: ImageLoader,
        P: FileProbe,
        D: SkinDirs,
    {
        let file = self.level().icon_file();
        cache.lookup_or_load_skin_res(&file, true)
    }
}
