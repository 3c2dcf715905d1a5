//! Resource key classification.

/// Prefix marking a key as a skin-relative file name.
pub const SKIN_PREFIX: &str = "skin:";

/// How a resource key is turned into something loadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKey<'a> {
    /// `skin:<file>` -- resolved through the active skin's directories.
    Skin(&'a str),
    /// Contains `#` -- a generated resource, handed to the loader as-is.
    Inline(&'a str),
    /// A literal filesystem path.
    Path(&'a str),
}

impl<'a> ResourceKey<'a> {
    /// Classify `key`. Returns `None` for the empty key.
    ///
    /// The `skin:` prefix takes precedence over `#`, so `skin:a#b` names a
    /// skin file called `a#b`.
    pub fn parse(key: &'a str) -> Option<Self> {
        if key.is_empty() {
            return None;
        }
        if let Some(file) = key.strip_prefix(SKIN_PREFIX) {
            Some(Self::Skin(file))
        } else if key.contains('#') {
            Some(Self::Inline(key))
        } else {
            Some(Self::Path(key))
        }
    }
}
