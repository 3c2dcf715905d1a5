//! Keyed resource cache with skin-aware load-on-miss.
//!
//! Each key maps to at most one loaded resource, shared through an
//! [`Arc`]. Entries are only ever inserted or removed whole; removing one
//! never invalidates handles that consumers already hold. Changing the
//! active skin does not touch existing entries -- callers that want
//! skin-correct resources after a switch must [`ResourceCache::clear`]
//! (or selectively [`ResourceCache::del`]) themselves.
//!
//! Failed loads are not remembered: the next request for the same key
//! runs the whole resolve-and-load path again.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tessera_skin::{RootedSkinDirs, SkinDirs, SkinResolver};
use tessera_types::error::{Result, TesseraError};
use tessera_vfs::{FileProbe, HostFs};

use crate::key::ResourceKey;
use crate::loader::{ImageLoader, ImageSource};

/// Shared handle to a loaded resource.
pub type Handle<R> = Arc<R>;

/// Resource cache keyed by logical resource keys.
///
/// Not internally synchronized: every call takes `&mut self` or `&self`
/// and is expected to come from the UI thread.
pub struct ResourceCache<L: ImageLoader, P = HostFs, D = RootedSkinDirs> {
    entries: HashMap<String, Handle<L::Resource>>,
    resolver: SkinResolver<P, D>,
    loader: L,
}

impl<L: ImageLoader, P: FileProbe, D: SkinDirs> ResourceCache<L, P, D> {
    pub fn new(loader: L, resolver: SkinResolver<P, D>) -> Self {
        Self {
            entries: HashMap::new(),
            resolver,
            loader,
        }
    }

    /// Change the active skin. Cached entries are left as they are.
    pub fn set_skin(&mut self, name: impl Into<String>) {
        self.resolver.set_skin(name);
    }

    pub fn skin(&self) -> &str {
        self.resolver.skin()
    }

    pub fn resolver(&self) -> &SkinResolver<P, D> {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut SkinResolver<P, D> {
        &mut self.resolver
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Resolve a skin file without loading it.
    pub fn skin_file_path(&self, file: &str, use_default: bool) -> Option<PathBuf> {
        self.resolver.resolve_skin_file(file, use_default)
    }

    /// Returns `true` if `key` is cached. Never performs I/O.
    pub fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Cached handle for `key`, without loading on a miss.
    pub fn get(&self, key: &str) -> Option<Handle<L::Resource>> {
        self.entries.get(key).map(Arc::clone)
    }

    /// Load `key` and cache it, replacing any existing entry.
    ///
    /// `skin:<file>` keys resolve through the active skin (with `Default`
    /// fallback), keys containing `#` go to the loader unchecked, anything
    /// else must exist as a literal path. `width`/`height` of 0 keep the
    /// natural size.
    pub fn add(&mut self, key: &str, width: u32, height: u32) -> Option<Handle<L::Resource>> {
        if key.is_empty() {
            return None;
        }
        self.del(key);
        let loaded = self.load_key(key, width, height);
        self.store(key, loaded)
    }

    /// Load `file` from the active skin and cache it under `file`,
    /// replacing any existing entry.
    pub fn add_skin_res(&mut self, file: &str, use_default: bool) -> Option<Handle<L::Resource>> {
        if file.is_empty() {
            return None;
        }
        self.del(file);
        let loaded = self.load_skin_file(file, use_default);
        self.store(file, loaded)
    }

    /// Remove `key` if cached.
    pub fn del(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            log::debug!("Unloading surface: '{key}'");
        }
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        log::debug!("Clearing {} cached surfaces", self.entries.len());
        self.entries.clear();
    }

    /// Move the entry at `from` to `to`, dropping whatever `to` held.
    ///
    /// When `from` is not cached, `to` ends up empty; nothing is loaded.
    pub fn rename(&mut self, from: &str, to: &str) {
        self.entries.remove(to);
        if let Some(handle) = self.entries.remove(from) {
            self.entries.insert(to.to_string(), handle);
        }
    }

    /// Cached handle for `key`, loading it on a miss.
    pub fn lookup_or_load(&mut self, key: &str) -> Option<Handle<L::Resource>> {
        match self.get(key) {
            Some(handle) => Some(handle),
            None => self.add(key, 0, 0),
        }
    }

    /// Cached handle for the skin file `file`, loading it on a miss.
    pub fn lookup_or_load_skin_res(
        &mut self,
        file: &str,
        use_default: bool,
    ) -> Option<Handle<L::Resource>> {
        if file.is_empty() {
            return None;
        }
        match self.get(file) {
            Some(handle) => Some(handle),
            None => self.add_skin_res(file, use_default),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Log every cached key at debug level.
    pub fn log_keys(&self) {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        for key in keys {
            log::debug!("key: {key}");
        }
    }

    fn load_key(&mut self, key: &str, width: u32, height: u32) -> Result<Handle<L::Resource>> {
        let resolved;
        let source = match ResourceKey::parse(key).ok_or(TesseraError::InvalidKey)? {
            ResourceKey::Skin(file) => {
                resolved = self.resolve(file, true)?;
                ImageSource::File(&resolved)
            },
            ResourceKey::Inline(spec) => ImageSource::Inline(spec),
            ResourceKey::Path(path) => {
                let path = Path::new(path);
                if !self.resolver.path_exists(path) {
                    return Err(TesseraError::Missing(key.to_string()));
                }
                ImageSource::File(path)
            },
        };

        log::debug!("Adding surface: '{key}'");
        let resource = self.loader.load_image(source, width, height)?;
        Ok(Arc::new(resource))
    }

    fn load_skin_file(&mut self, file: &str, use_default: bool) -> Result<Handle<L::Resource>> {
        let path = self.resolve(file, use_default)?;
        log::debug!("Adding skin surface: '{file}'");
        let resource = self.loader.load_image(ImageSource::File(&path), 0, 0)?;
        Ok(Arc::new(resource))
    }

    fn resolve(&self, file: &str, use_default: bool) -> Result<PathBuf> {
        if file.is_empty() {
            return Err(TesseraError::Unresolved(String::new()));
        }
        self.resolver
            .resolve_skin_file(file, use_default)
            .ok_or_else(|| TesseraError::Unresolved(file.to_string()))
    }

    fn store(
        &mut self,
        key: &str,
        loaded: Result<Handle<L::Resource>>,
    ) -> Option<Handle<L::Resource>> {
        match loaded {
            Ok(handle) => {
                self.entries.insert(key.to_string(), Arc::clone(&handle));
                Some(handle)
            },
            Err(TesseraError::InvalidKey) => None,
            Err(TesseraError::Unresolved(file)) => {
                log::debug!("Skin file not found for '{key}': '{file}'");
                None
            },
            Err(TesseraError::Missing(_)) => {
                log::warn!("Unable to add image {key}");
                None
            },
            Err(e) => {
                log::warn!("Unable to load image '{key}': {e}");
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashSet};
    use tessera_vfs::MemoryProbe;

    const LOCAL: &str = "/home/u/.tessera/skins";
    const SYSTEM: &str = "/usr/share/tessera/skins";

    /// Loader that records every request and returns a description of it.
    #[derive(Default)]
    struct RecordingLoader {
        calls: Vec<(String, u32, u32)>,
        failing: HashSet<String>,
    }

    impl ImageLoader for RecordingLoader {
        type Resource = String;

        fn load_image(
            &mut self,
            source: ImageSource<'_>,
            width: u32,
            height: u32,
        ) -> Result<String> {
            let name = source.to_string();
            self.calls.push((name.clone(), width, height));
            if self.failing.contains(&name) {
                return Err(TesseraError::Image(format!("cannot decode {name}")));
            }
            Ok(format!("{name}#{}", self.calls.len()))
        }
    }

    type TestCache = ResourceCache<RecordingLoader, MemoryProbe>;

    fn cache_with(files: &[&str]) -> TestCache {
        let mut probe = MemoryProbe::new();
        for f in files {
            probe.add_file(f);
        }
        let resolver = SkinResolver::new(RootedSkinDirs::new(LOCAL, SYSTEM), probe);
        ResourceCache::new(RecordingLoader::default(), resolver)
    }

    fn calls(cache: &TestCache) -> usize {
        cache.loader().calls.len()
    }

    #[test]
    fn add_literal_path() {
        let mut cache = cache_with(&["/opt/icons/app.png"]);
        let handle = cache.add("/opt/icons/app.png", 0, 0).unwrap();
        assert!(cache.exists("/opt/icons/app.png"));
        assert!(handle.starts_with("/opt/icons/app.png"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn add_missing_literal_path_fails_without_loading() {
        let mut cache = cache_with(&[]);
        assert!(cache.add("/opt/icons/ghost.png", 0, 0).is_none());
        assert!(!cache.exists("/opt/icons/ghost.png"));
        assert_eq!(calls(&cache), 0);
    }

    #[test]
    fn add_passes_target_size_to_loader() {
        let mut cache = cache_with(&["/opt/bg.png"]);
        cache.add("/opt/bg.png", 320, 240).unwrap();
        assert_eq!(cache.loader().calls[0], ("/opt/bg.png".to_string(), 320, 240));
    }

    #[test]
    fn skin_prefixed_key_resolves_through_skin() {
        let mut cache = cache_with(&["/usr/share/tessera/skins/Default/imgs/bg.png"]);
        cache.set_skin("Blue");
        let handle = cache.add("skin:imgs/bg.png", 0, 0).unwrap();
        assert!(handle.starts_with("/usr/share/tessera/skins/Default/imgs/bg.png"));
        assert!(cache.exists("skin:imgs/bg.png"));
        assert!(!cache.exists("imgs/bg.png"));
    }

    #[test]
    fn unresolvable_skin_key_is_none() {
        let mut cache = cache_with(&[]);
        assert!(cache.add("skin:imgs/bg.png", 0, 0).is_none());
        assert!(cache.add("skin:", 0, 0).is_none());
        assert!(cache.is_empty());
        assert_eq!(calls(&cache), 0);
    }

    #[test]
    fn inline_spec_bypasses_existence_check() {
        let mut cache = cache_with(&[]);
        let before = cache.resolver().probe().lookups();
        let handle = cache.add("16x16#FF0000", 0, 0).unwrap();
        assert_eq!(cache.resolver().probe().lookups(), before);
        assert!(handle.starts_with("16x16#FF0000"));
        assert_eq!(calls(&cache), 1);
    }

    #[test]
    fn empty_key_guard() {
        let mut cache = cache_with(&["/usr/share/tessera/skins/Default/x.png"]);
        cache.add("/usr/share/tessera/skins/Default/x.png", 0, 0);
        assert!(cache.add("", 0, 0).is_none());
        assert!(cache.add_skin_res("", true).is_none());
        assert!(cache.lookup_or_load("").is_none());
        assert!(cache.lookup_or_load_skin_res("", true).is_none());
        assert_eq!(cache.len(), 1);
        assert_eq!(calls(&cache), 1);
    }

    #[test]
    fn load_failure_is_not_cached() {
        let mut cache = cache_with(&["/opt/broken.png"]);
        cache.loader.failing.insert("/opt/broken.png".into());
        assert!(cache.add("/opt/broken.png", 0, 0).is_none());
        assert!(!cache.exists("/opt/broken.png"));

        // No negative caching: the next lookup tries again.
        assert!(cache.lookup_or_load("/opt/broken.png").is_none());
        assert_eq!(calls(&cache), 2);
    }

    #[test]
    fn lookup_or_load_hits_return_same_instance() {
        let mut cache = cache_with(&["/opt/a.png"]);
        let first = cache.lookup_or_load("/opt/a.png").unwrap();
        let lookups = cache.resolver().probe().lookups();
        let second = cache.lookup_or_load("/opt/a.png").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls(&cache), 1);
        assert_eq!(cache.resolver().probe().lookups(), lookups);
    }

    #[test]
    fn re_add_replaces_entry_but_old_handle_survives() {
        let mut cache = cache_with(&[
            "/usr/share/tessera/skins/Default/icon.png",
            "/usr/share/tessera/skins/Blue/icon.png",
        ]);
        let old = cache.add("skin:icon.png", 0, 0).unwrap();
        cache.set_skin("Blue");
        let new = cache.add("skin:icon.png", 0, 0).unwrap();

        assert!(!Arc::ptr_eq(&old, &new));
        assert_eq!(cache.len(), 1);
        assert!(Arc::ptr_eq(&cache.get("skin:icon.png").unwrap(), &new));
        assert!(old.starts_with("/usr/share/tessera/skins/Default/icon.png"));
        assert!(new.starts_with("/usr/share/tessera/skins/Blue/icon.png"));
        assert_eq!(Arc::strong_count(&old), 1);
    }

    #[test]
    fn add_skin_res_uses_key_as_skin_file() {
        let mut cache = cache_with(&["/home/u/.tessera/skins/Default/imgs/battery/ac.png"]);
        let handle = cache.add_skin_res("imgs/battery/ac.png", true).unwrap();
        assert!(handle.starts_with("/home/u/.tessera/skins/Default/imgs/battery/ac.png"));
        assert!(cache.exists("imgs/battery/ac.png"));
        assert_eq!(cache.loader().calls[0].1, 0);
    }

    #[test]
    fn add_skin_res_never_treats_key_as_literal_path() {
        let mut cache = cache_with(&["/opt/icon.png"]);
        assert!(cache.add_skin_res("/opt/icon.png", true).is_none());
        assert_eq!(calls(&cache), 0);
    }

    #[test]
    fn add_skin_res_respects_default_flag() {
        let mut cache = cache_with(&["/usr/share/tessera/skins/Default/font.png"]);
        cache.set_skin("Blue");
        assert!(cache.add_skin_res("font.png", false).is_none());
        assert!(cache.add_skin_res("font.png", true).is_some());
    }

    #[test]
    fn lookup_or_load_skin_res_caches() {
        let mut cache = cache_with(&["/usr/share/tessera/skins/Default/font.png"]);
        let a = cache.lookup_or_load_skin_res("font.png", true).unwrap();
        let b = cache.lookup_or_load_skin_res("font.png", true).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(calls(&cache), 1);
    }

    #[test]
    fn del_is_silent_for_missing_keys() {
        let mut cache = cache_with(&["/opt/a.png"]);
        cache.del("/opt/nothing.png");
        let held = cache.add("/opt/a.png", 0, 0).unwrap();
        cache.del("/opt/a.png");
        assert!(!cache.exists("/opt/a.png"));
        // A consumer's handle outlives the entry.
        assert!(held.starts_with("/opt/a.png"));
    }

    #[test]
    fn clear_removes_everything() {
        let mut cache = cache_with(&["/opt/a.png", "/opt/b.png"]);
        cache.add("/opt/a.png", 0, 0);
        cache.add("/opt/b.png", 0, 0);
        cache.clear();
        assert!(cache.is_empty());
        assert!(!cache.exists("/opt/a.png"));
    }

    #[test]
    fn rename_moves_the_same_instance() {
        let mut cache = cache_with(&["/opt/a.png"]);
        let a = cache.add("/opt/a.png", 0, 0).unwrap();
        cache.rename("/opt/a.png", "b");
        assert!(!cache.exists("/opt/a.png"));
        assert!(Arc::ptr_eq(&cache.get("b").unwrap(), &a));
    }

    #[test]
    fn rename_over_existing_target_drops_target() {
        let mut cache = cache_with(&["/opt/a.png", "/opt/b.png"]);
        let a = cache.add("/opt/a.png", 0, 0).unwrap();
        cache.add("/opt/b.png", 0, 0).unwrap();
        cache.rename("/opt/a.png", "/opt/b.png");
        assert_eq!(cache.len(), 1);
        assert!(Arc::ptr_eq(&cache.get("/opt/b.png").unwrap(), &a));
    }

    #[test]
    fn rename_from_missing_key_leaves_target_empty() {
        let mut cache = cache_with(&["/opt/b.png"]);
        cache.add("/opt/b.png", 0, 0).unwrap();
        cache.rename("/opt/a.png", "/opt/b.png");
        assert!(!cache.exists("/opt/b.png"));
        assert!(!cache.exists("/opt/a.png"));
        assert!(cache.is_empty());
    }

    #[test]
    fn rename_onto_itself_drops_entry() {
        let mut cache = cache_with(&["/opt/a.png"]);
        cache.add("/opt/a.png", 0, 0).unwrap();
        cache.rename("/opt/a.png", "/opt/a.png");
        assert!(!cache.exists("/opt/a.png"));
    }

    #[test]
    fn set_skin_keeps_stale_entries() {
        let mut cache = cache_with(&[
            "/usr/share/tessera/skins/Default/bg.png",
            "/usr/share/tessera/skins/Blue/bg.png",
        ]);
        let before = cache.lookup_or_load("skin:bg.png").unwrap();
        cache.set_skin("Blue");
        assert_eq!(cache.skin(), "Blue");
        let after = cache.lookup_or_load("skin:bg.png").unwrap();
        assert!(Arc::ptr_eq(&before, &after));

        cache.clear();
        let fresh = cache.lookup_or_load("skin:bg.png").unwrap();
        assert!(fresh.starts_with("/usr/share/tessera/skins/Blue/bg.png"));
    }

    #[test]
    fn distinct_keys_for_same_file_are_distinct_entries() {
        let mut cache = cache_with(&["/usr/share/tessera/skins/Default/bg.png"]);
        let a = cache.add("skin:bg.png", 0, 0).unwrap();
        let b = cache.add("/usr/share/tessera/skins/Default/bg.png", 0, 0).unwrap();
        let c = cache.add_skin_res("bg.png", true).unwrap();
        assert_eq!(cache.len(), 3);
        assert!(!Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
    }

    #[test]
    fn keys_and_skin_file_path() {
        let mut cache = cache_with(&["/usr/share/tessera/skins/Default/bg.png"]);
        cache.add("skin:bg.png", 0, 0);
        cache.add("#000000", 0, 0);
        let keys: BTreeSet<&str> = cache.keys().collect();
        assert_eq!(keys, BTreeSet::from(["#000000", "skin:bg.png"]));
        cache.log_keys();
        assert_eq!(
            cache.skin_file_path("bg.png", true),
            Some(PathBuf::from("/usr/share/tessera/skins/Default/bg.png"))
        );
    }

    #[test]
    fn end_to_end_with_host_filesystem() {
        use crate::image::tests::make_test_png;
        use crate::loader::FsImageLoader;

        let local = tempfile::tempdir().unwrap();
        let system = tempfile::tempdir().unwrap();
        let icons = system.path().join("Default").join("icons");
        std::fs::create_dir_all(&icons).unwrap();
        std::fs::write(icons.join("app.png"), make_test_png(4, 4, [9, 8, 7])).unwrap();

        let resolver = SkinResolver::new(RootedSkinDirs::new(local.path(), system.path()), HostFs);
        let mut cache = ResourceCache::new(FsImageLoader, resolver);
        cache.set_skin("Custom");

        let icon = cache.lookup_or_load("skin:icons/app.png").unwrap();
        assert_eq!((icon.width, icon.height), (4, 4));
        assert!(Arc::ptr_eq(
            &icon,
            &cache.lookup_or_load("skin:icons/app.png").unwrap()
        ));

        let scaled = cache
            .add(&icons.join("app.png").to_string_lossy(), 2, 2)
            .unwrap();
        assert_eq!((scaled.width, scaled.height), (2, 2));

        // Present on disk but not decodable.
        std::fs::write(icons.join("junk.png"), b"not an image").unwrap();
        assert!(cache.lookup_or_load("skin:icons/junk.png").is_none());
    }

    #[test]
    fn oversized_images_are_absent_not_fatal() {
        use crate::image::tests::{make_test_bmp_24bit, make_test_png};
        use crate::loader::FsImageLoader;

        let dir = tempfile::tempdir().unwrap();
        let tile = dir.path().join("tile.png");
        std::fs::write(&tile, make_test_png(2, 2, [1, 2, 3])).unwrap();
        let mut bogus = make_test_bmp_24bit();
        bogus.truncate(54);
        bogus[18..22].copy_from_slice(&i32::MAX.to_le_bytes());
        bogus[22..26].copy_from_slice(&i32::MAX.to_le_bytes());
        let bogus_path = dir.path().join("bogus.bmp");
        std::fs::write(&bogus_path, bogus).unwrap();

        let resolver = SkinResolver::new(RootedSkinDirs::new(dir.path(), dir.path()), HostFs);
        let mut cache = ResourceCache::new(FsImageLoader, resolver);
        let tile = tile.to_string_lossy();

        assert!(cache.add(&tile, 40000, 40000).is_none());
        assert!(cache.add(&tile, 0, 40000).is_none());
        assert!(cache.lookup_or_load(&bogus_path.to_string_lossy()).is_none());
        assert!(cache.is_empty());
        assert!(cache.add(&tile, 8, 8).is_some());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(usize),
            AddSkin(usize),
            Del(usize),
            Rename(usize, usize),
            Lookup(usize),
            Clear,
        }

        const KEYS: [&str; 4] = ["/opt/a.png", "/opt/b.png", "a.png", "#FFFFFF"];

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (0..KEYS.len()).prop_map(Op::Add),
                (0..KEYS.len()).prop_map(Op::AddSkin),
                (0..KEYS.len()).prop_map(Op::Del),
                (0..KEYS.len(), 0..KEYS.len()).prop_map(|(a, b)| Op::Rename(a, b)),
                (0..KEYS.len()).prop_map(Op::Lookup),
                Just(Op::Clear),
            ]
        }

        proptest! {
            #[test]
            fn cache_matches_key_set_model(ops in proptest::collection::vec(op(), 0..40)) {
                let mut cache = cache_with(&[
                    "/opt/a.png",
                    "/opt/b.png",
                    "/usr/share/tessera/skins/Default/a.png",
                ]);
                let mut model: BTreeSet<&str> = BTreeSet::new();

                for op in ops {
                    match op {
                        Op::Add(k) => {
                            let ok = cache.add(KEYS[k], 0, 0).is_some();
                            // "a.png" is not a literal path; the rest load.
                            prop_assert_eq!(ok, KEYS[k] != "a.png");
                            if ok {
                                model.insert(KEYS[k]);
                            } else {
                                model.remove(KEYS[k]);
                            }
                        },
                        Op::AddSkin(k) => {
                            let ok = cache.add_skin_res(KEYS[k], true).is_some();
                            prop_assert_eq!(ok, KEYS[k] == "a.png");
                            if ok {
                                model.insert(KEYS[k]);
                            } else {
                                model.remove(KEYS[k]);
                            }
                        },
                        Op::Del(k) => {
                            cache.del(KEYS[k]);
                            model.remove(KEYS[k]);
                        },
                        Op::Rename(a, b) => {
                            cache.rename(KEYS[a], KEYS[b]);
                            model.remove(KEYS[b]);
                            let had = model.remove(KEYS[a]);
                            if had {
                                model.insert(KEYS[b]);
                            }
                        },
                        Op::Lookup(k) => {
                            let was_cached = cache.exists(KEYS[k]);
                            let before = cache.get(KEYS[k]);
                            let got = cache.lookup_or_load(KEYS[k]);
                            if was_cached {
                                prop_assert!(Arc::ptr_eq(&before.unwrap(), &got.unwrap()));
                            } else if got.is_some() {
                                model.insert(KEYS[k]);
                            }
                        },
                        Op::Clear => {
                            cache.clear();
                            model.clear();
                        },
                    }

                    let keys: BTreeSet<&str> = cache.keys().collect();
                    prop_assert_eq!(&keys, &model);
                    for key in KEYS {
                        prop_assert_eq!(cache.exists(key), model.contains(key));
                    }
                }
            }
        }
    }
}
