//! Active skin name.

use tessera_types::config::DEFAULT_SKIN;

/// Holds the name of the currently active skin.
///
/// Setting a skin never validates it against the filesystem. A skin that
/// does not exist simply makes every lookup fall through to `Default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinContext {
    name: String,
}

impl SkinContext {
    pub fn new() -> Self {
        Self {
            name: DEFAULT_SKIN.to_string(),
        }
    }

    pub fn set_skin(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for SkinContext {
    fn default() -> Self {
        Self::new()
    }
}
