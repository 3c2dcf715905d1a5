//! In-memory file probe.
//!
//! Useful for unit tests and for running the shell without real skin
//! directories. The tree lives in a `BTreeMap<String, Node>` keyed by
//! normalized absolute paths; relative paths are anchored at `/`.

use std::borrow::Cow;
use std::cell::Cell;
use std::collections::BTreeMap;
use std::path::Path;

use crate::FileProbe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    File,
    Dir,
}

/// A set of known paths answering existence queries.
#[derive(Debug)]
pub struct MemoryProbe {
    nodes: BTreeMap<String, Node>,
    /// Number of `exists` calls served so far.
    lookups: Cell<usize>,
}

impl MemoryProbe {
    /// Create a probe that only knows the root directory.
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert("/".to_string(), Node::Dir);
        Self {
            nodes,
            lookups: Cell::new(0),
        }
    }

    /// Register a file, creating its parent directories.
    pub fn add_file(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_string_lossy();
        let path = normalize(&path).into_owned();
        self.add_dir(parent(&path).to_string());
        self.nodes.insert(path, Node::File);
    }

    /// Register a directory and all of its parents.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_string_lossy();
        let mut path = normalize(&path).into_owned();
        loop {
            if self.nodes.contains_key(&path) {
                return;
            }
            let par = parent(&path).to_string();
            self.nodes.insert(path, Node::Dir);
            path = par;
        }
    }

    /// Forget a path and everything below it. Returns `false` if it was
    /// not known.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref().to_string_lossy();
        let path = normalize(&path).into_owned();
        if path == "/" || self.nodes.remove(&path).is_none() {
            return false;
        }
        let prefix = format!("{path}/");
        self.nodes.retain(|key, _| !key.starts_with(&prefix));
        true
    }

    /// Returns `true` if `path` is a registered file (not a directory).
    pub fn is_file(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref().to_string_lossy();
        self.nodes.get(normalize(&path).as_ref()) == Some(&Node::File)
    }

    /// Number of existence checks answered since creation.
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl Default for MemoryProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl FileProbe for MemoryProbe {
    fn exists(&self, path: &Path) -> bool {
        self.lookups.set(self.lookups.get() + 1);
        let path = path.to_string_lossy();
        self.nodes.contains_key(normalize(&path).as_ref())
    }
}

/// Check whether a path is already in normal form (starts with `/`, no `//`,
/// no trailing `/` unless root).
fn is_normalized(path: &str) -> bool {
    if !path.starts_with('/') {
        return false;
    }
    if path.len() > 1 && path.ends_with('/') {
        return false;
    }
    !path.contains("//")
}

/// Normalize a path: ensure leading `/`, collapse `//`, strip trailing `/`
/// (except for root). Zero-alloc when already in normal form.
fn normalize(path: &str) -> Cow<'_, str> {
    if is_normalized(path) {
        return Cow::Borrowed(path);
    }
    let mut result = String::with_capacity(path.len() + 1);
    let mut prev_slash = false;
    for ch in "/".chars().chain(path.chars()) {
        if ch == '/' {
            if !prev_slash {
                result.push(ch);
            }
            prev_slash = true;
        } else {
            result.push(ch);
            prev_slash = false;
        }
    }
    if result.len() > 1 && result.ends_with('/') {
        result.pop();
    }
    Cow::Owned(result)
}

/// Return the parent of a normalized path.
fn parent(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) | None => "/",
        Some(i) => &path[..i],
    }
}
