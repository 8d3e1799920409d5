//! Process-wide cache of loaded segmenters.
//!
//! One [`SegmenterEntry`] exists per resolved dictionary directory. Entries are
//! created on first use, live for the rest of the process, and can be reloaded
//! in place: the replacement is built without holding any lock, then swapped in
//! under the entry's write lock. Readers hold the entry's read lock for the
//! duration of a [`SegmenterGuard`], so a swap waits for them and the old
//! instance is dropped only once nobody uses it.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use sarissa_jieba::analysis::segmenter::SegmentMode;
//! use sarissa_jieba::analysis::segmenter::registry::SegmenterRegistry;
//!
//! let registry = SegmenterRegistry::global();
//! let a = registry.acquire(None).unwrap();
//! let b = registry.acquire(None).unwrap();
//! assert!(Arc::ptr_eq(&a, &b));
//!
//! let segmenter = a.borrow();
//! let segments = segmenter.tokenize("世界", SegmentMode::Precise, true).unwrap();
//! assert_eq!(segments[0].word, "世界");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use parking_lot::{Mutex, RwLock, RwLockReadGuard};
use serde::{Deserialize, Serialize};

use crate::analysis::segmenter::jieba::JiebaLoader;
use crate::analysis::segmenter::{Segmenter, SegmenterLoader, resolve_config_key};
use crate::error::Result;

static GLOBAL_REGISTRY: LazyLock<SegmenterRegistry> =
    LazyLock::new(|| SegmenterRegistry::new(Arc::new(JiebaLoader)));

/// When and how fast the served instance of an entry was loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadInfo {
    pub loaded_at: DateTime<Utc>,
    pub load_duration: Duration,
}

struct Served {
    segmenter: Box<dyn Segmenter>,
    info: LoadInfo,
}

impl Served {
    fn load(loader: &dyn SegmenterLoader, config_key: &str) -> Result<Self> {
        let loaded_at = Utc::now();
        let start = Instant::now();

        let dict_dir = (!config_key.is_empty()).then(|| Path::new(config_key));
        let segmenter = loader.load(dict_dir)?;

        let load_duration = start.elapsed();
        info!(
            "Loaded {} segmenter for '{}' in {:?}",
            segmenter.name(),
            config_key,
            load_duration
        );

        Ok(Served {
            segmenter,
            info: LoadInfo {
                loaded_at,
                load_duration,
            },
        })
    }
}

/// A registry entry owning the segmenter served for one dictionary directory.
pub struct SegmenterEntry {
    config_key: String,
    loader: Arc<dyn SegmenterLoader>,
    served: RwLock<Served>,
    reloads: AtomicU64,
}

impl SegmenterEntry {
    fn load(config_key: &str, loader: Arc<dyn SegmenterLoader>) -> Result<Self> {
        let served = Served::load(loader.as_ref(), config_key)?;
        Ok(SegmenterEntry {
            config_key: config_key.to_string(),
            loader,
            served: RwLock::new(served),
            reloads: AtomicU64::new(0),
        })
    }

    /// The key this entry is cached under.
    pub fn config_key(&self) -> &str {
        &self.config_key
    }

    /// The dictionary directory, or `None` for the built-in dictionaries.
    pub fn dict_dir(&self) -> Option<&Path> {
        (!self.config_key.is_empty()).then(|| Path::new(&self.config_key))
    }

    /// Load metadata of the currently served instance.
    pub fn load_info(&self) -> LoadInfo {
        self.served.read().info
    }

    /// Number of successful reloads since the entry was created.
    pub fn reload_count(&self) -> u64 {
        self.reloads.load(Ordering::SeqCst)
    }

    /// Borrow the served segmenter.
    ///
    /// The returned guard holds the entry's read lock until dropped. Do not
    /// borrow again on the same thread while holding a guard: a pending
    /// reload blocks new readers.
    pub fn borrow(&self) -> SegmenterGuard<'_> {
        SegmenterGuard {
            served: self.served.read(),
        }
    }

    /// Load a fresh instance and swap it in.
    ///
    /// On failure the served instance is left untouched and the error is
    /// returned. On success the superseded instance is dropped after the write
    /// lock has been released.
    pub fn reload(&self) -> Result<()> {
        let fresh = match Served::load(self.loader.as_ref(), &self.config_key) {
            Ok(fresh) => fresh,
            Err(e) => {
                warn!(
                    "Reloading segmenter for '{}' failed, keeping the current one: {}",
                    self.config_key, e
                );
                return Err(e);
            }
        };

        let superseded = {
            let mut served = self.served.write();
            std::mem::replace(&mut *served, fresh)
        };
        self.reloads.fetch_add(1, Ordering::SeqCst);

        debug!(
            "Swapped segmenter for '{}', dropping instance loaded at {}",
            self.config_key, superseded.info.loaded_at
        );
        drop(superseded);

        Ok(())
    }
}

impl fmt::Debug for SegmenterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmenterEntry")
            .field("config_key", &self.config_key)
            .field("reloads", &self.reload_count())
            .finish_non_exhaustive()
    }
}

/// Shared access to the segmenter served by an entry.
pub struct SegmenterGuard<'a> {
    served: RwLockReadGuard<'a, Served>,
}

impl SegmenterGuard<'_> {
    /// Load metadata of the borrowed instance.
    pub fn load_info(&self) -> LoadInfo {
        self.served.info
    }
}

impl Deref for SegmenterGuard<'_> {
    type Target = dyn Segmenter;

    fn deref(&self) -> &Self::Target {
        self.served.segmenter.as_ref()
    }
}

/// Key-indexed cache of [`SegmenterEntry`]s.
pub struct SegmenterRegistry {
    loader: Arc<dyn SegmenterLoader>,
    entries: RwLock<HashMap<String, Arc<SegmenterEntry>>>,
    /// Per-key creation locks; only callers racing on the same new key wait
    /// on each other.
    creating: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl SegmenterRegistry {
    /// Create an empty registry loading segmenters with `loader`.
    pub fn new(loader: Arc<dyn SegmenterLoader>) -> Self {
        SegmenterRegistry {
            loader,
            entries: RwLock::new(HashMap::new()),
            creating: Mutex::new(HashMap::new()),
        }
    }

    /// The process-wide registry backed by [`JiebaLoader`].
    pub fn global() -> &'static SegmenterRegistry {
        &GLOBAL_REGISTRY
    }

    /// Get the entry for `dict_dir`, loading it on first use.
    ///
    /// `dict_dir` is resolved with [`resolve_config_key`]. All callers with
    /// the same resolved key get the same entry. A failed load installs
    /// nothing, so the next call tries again.
    pub fn acquire(&self, dict_dir: Option<&str>) -> Result<Arc<SegmenterEntry>> {
        self.acquire_key(&resolve_config_key(dict_dir))
    }

    /// Get the entry for an already resolved key, loading it on first use.
    pub fn acquire_key(&self, config_key: &str) -> Result<Arc<SegmenterEntry>> {
        if let Some(entry) = self.find_key(config_key) {
            return Ok(entry);
        }

        let slot = self
            .creating
            .lock()
            .entry(config_key.to_string())
            .or_default()
            .clone();
        let _creating = slot.lock();

        // Another caller may have finished loading while we waited.
        if let Some(entry) = self.find_key(config_key) {
            return Ok(entry);
        }

        let loaded = SegmenterEntry::load(config_key, Arc::clone(&self.loader)).map(Arc::new);
        if let Ok(entry) = &loaded {
            self.entries
                .write()
                .insert(config_key.to_string(), Arc::clone(entry));
        }
        self.release_slot(config_key, &slot);

        loaded
    }

    /// Drop the creation slot for `config_key` unless a newer one replaced it.
    ///
    /// Waiters still holding a clone of `slot` are unaffected.
    fn release_slot(&self, config_key: &str, slot: &Arc<Mutex<()>>) {
        let mut creating = self.creating.lock();
        if creating
            .get(config_key)
            .is_some_and(|current| Arc::ptr_eq(current, slot))
        {
            creating.remove(config_key);
        }
    }

    /// Get the entry for `dict_dir` without loading anything.
    pub fn find(&self, dict_dir: Option<&str>) -> Option<Arc<SegmenterEntry>> {
        self.find_key(&resolve_config_key(dict_dir))
    }

    /// Get the entry for an already resolved key without loading anything.
    pub fn find_key(&self, config_key: &str) -> Option<Arc<SegmenterEntry>> {
        self.entries.read().get(config_key).cloned()
    }

    /// Snapshot of all entries, in no particular order.
    pub fn list(&self) -> Vec<Arc<SegmenterEntry>> {
        self.entries.read().values().cloned().collect()
    }

    /// Reload one entry. See [`SegmenterEntry::reload`].
    pub fn reload(&self, entry: &SegmenterEntry) -> Result<()> {
        entry.reload()
    }

    /// Reload every entry, returning the first error after trying all of them.
    pub fn reload_all(&self) -> Result<()> {
        let mut first_error = None;
        for entry in self.list() {
            if let Err(e) = entry.reload() {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether no entry has been created yet.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl fmt::Debug for SegmenterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmenterRegistry")
            .field("entries", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Barrier;
    use std::sync::atomic::{AtomicBool, AtomicUsize};
    use std::thread;

    use super::*;
    use crate::analysis::segmenter::{Segment, SegmentMode};
    use crate::error::JiebaError;

    /// Segmenter tagged with the load that produced it.
    struct Generation {
        id: usize,
        dropped: Arc<AtomicUsize>,
    }

    impl Segmenter for Generation {
        fn tokenize(&self, text: &str, _mode: SegmentMode, _hmm: bool) -> Result<Vec<Segment>> {
            Ok(vec![Segment::new(self.id.to_string(), 0, text.len())])
        }

        fn is_stop_word(&self, _word: &str) -> bool {
            false
        }

        fn name(&self) -> &'static str {
            "generation"
        }
    }

    impl Drop for Generation {
        fn drop(&mut self) {
            self.dropped.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Default)]
    struct CountingLoader {
        loads: AtomicUsize,
        dropped: Arc<AtomicUsize>,
        fail: AtomicBool,
        delay: Duration,
    }

    impl SegmenterLoader for CountingLoader {
        fn load(&self, _dict_dir: Option<&Path>) -> Result<Box<dyn Segmenter>> {
            thread::sleep(self.delay);
            if self.fail.load(Ordering::SeqCst) {
                return Err(JiebaError::segmenter("dictionary unavailable"));
            }
            let id = self.loads.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(Box::new(Generation {
                id,
                dropped: Arc::clone(&self.dropped),
            }))
        }
    }

    /// Sleeps only when loading the "slow" key.
    struct SlowKeyLoader {
        delay: Duration,
    }

    impl SegmenterLoader for SlowKeyLoader {
        fn load(&self, dict_dir: Option<&Path>) -> Result<Box<dyn Segmenter>> {
            if dict_dir == Some(Path::new("slow")) {
                thread::sleep(self.delay);
            }
            Ok(Box::new(Generation {
                id: 1,
                dropped: Arc::new(AtomicUsize::new(0)),
            }))
        }
    }

    fn generation_of(entry: &SegmenterEntry) -> usize {
        let segments = entry.borrow().tokenize("", SegmentMode::Precise, false).unwrap();
        segments[0].word.parse().unwrap()
    }

    #[test]
    fn test_acquire_returns_same_entry() {
        let loader = Arc::new(CountingLoader::default());
        let registry = SegmenterRegistry::new(loader.clone());

        let a = registry.acquire_key("dict").unwrap();
        let b = registry.acquire_key("dict").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(loader.loads.load(Ordering::SeqCst), 1);
        assert_eq!(a.config_key(), "dict");
        assert_eq!(a.dict_dir(), Some(Path::new("dict")));
    }

    #[test]
    fn test_default_key_has_no_dict_dir() {
        let registry = SegmenterRegistry::new(Arc::new(CountingLoader::default()));
        let entry = registry.acquire_key("").unwrap();
        assert_eq!(entry.dict_dir(), None);
    }

    #[test]
    fn test_find_and_list() {
        let registry = SegmenterRegistry::new(Arc::new(CountingLoader::default()));
        assert!(registry.find_key("a").is_none());
        assert!(registry.is_empty());

        let a = registry.acquire_key("a").unwrap();
        registry.acquire_key("b").unwrap();

        assert!(Arc::ptr_eq(&registry.find_key("a").unwrap(), &a));
        let mut keys: Vec<String> = registry
            .list()
            .iter()
            .map(|e| e.config_key().to_string())
            .collect();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_failed_acquire_installs_nothing() {
        let loader = Arc::new(CountingLoader::default());
        loader.fail.store(true, Ordering::SeqCst);
        let registry = SegmenterRegistry::new(loader.clone());

        assert!(registry.acquire_key("dict").is_err());
        assert!(registry.find_key("dict").is_none());

        loader.fail.store(false, Ordering::SeqCst);
        assert!(registry.acquire_key("dict").is_ok());
        assert!(registry.find_key("dict").is_some());
    }

    #[test]
    fn test_concurrent_acquire_loads_once() {
        let loader = Arc::new(CountingLoader {
            delay: Duration::from_millis(50),
            ..Default::default()
        });
        let registry = Arc::new(SegmenterRegistry::new(loader.clone()));
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    registry.acquire_key("shared").unwrap()
                })
            })
            .collect();
        let entries: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        for entry in &entries[1..] {
            assert!(Arc::ptr_eq(&entries[0], entry));
        }
        assert_eq!(loader.loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_loading_one_key_does_not_block_another() {
        let registry = Arc::new(SegmenterRegistry::new(Arc::new(SlowKeyLoader {
            delay: Duration::from_millis(800),
        })));

        let slow = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.acquire_key("slow").map(|_| Instant::now()))
        };
        thread::sleep(Duration::from_millis(100));

        let start = Instant::now();
        registry.acquire_key("fast").unwrap();
        let fast_done = Instant::now();
        assert!(
            fast_done.duration_since(start) < Duration::from_millis(400),
            "fast acquire took {:?}",
            fast_done.duration_since(start)
        );

        let slow_done = slow.join().unwrap().unwrap();
        assert!(fast_done < slow_done);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_creation_slots_are_released() {
        let loader = Arc::new(CountingLoader::default());
        let registry = SegmenterRegistry::new(loader.clone());

        registry.acquire_key("dict").unwrap();
        assert!(registry.creating.lock().is_empty());

        loader.fail.store(true, Ordering::SeqCst);
        for i in 0..10 {
            assert!(registry.acquire_key(&format!("missing-{i}")).is_err());
        }
        assert!(registry.creating.lock().is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_concurrent_failed_acquire_releases_slot() {
        let loader = Arc::new(CountingLoader {
            delay: Duration::from_millis(20),
            ..Default::default()
        });
        loader.fail.store(true, Ordering::SeqCst);
        let registry = Arc::new(SegmenterRegistry::new(loader));
        let barrier = Arc::new(Barrier::new(4));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    registry.acquire_key("broken").is_err()
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }

        assert!(registry.creating.lock().is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_reload_swaps_and_drops_old_instance() {
        let loader = Arc::new(CountingLoader::default());
        let registry = SegmenterRegistry::new(loader.clone());
        let entry = registry.acquire_key("dict").unwrap();
        let before = entry.load_info();

        registry.reload(&entry).unwrap();

        assert_eq!(generation_of(&entry), 2);
        assert_eq!(entry.reload_count(), 1);
        assert_eq!(loader.dropped.load(Ordering::SeqCst), 1);
        assert!(entry.load_info().loaded_at >= before.loaded_at);
        assert!(Arc::ptr_eq(&entry, &registry.find_key("dict").unwrap()));
    }

    #[test]
    fn test_failed_reload_keeps_current_instance() {
        let loader = Arc::new(CountingLoader::default());
        let registry = SegmenterRegistry::new(loader.clone());
        let entry = registry.acquire_key("dict").unwrap();

        loader.fail.store(true, Ordering::SeqCst);
        let err = entry.reload().unwrap_err();
        assert!(matches!(err, JiebaError::Segmenter(_)));

        assert_eq!(generation_of(&entry), 1);
        assert_eq!(entry.reload_count(), 0);
        assert_eq!(loader.dropped.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_reload_waits_for_borrowers() {
        let loader = Arc::new(CountingLoader::default());
        let registry = SegmenterRegistry::new(loader.clone());
        let entry = registry.acquire_key("dict").unwrap();

        let guard = entry.borrow();
        thread::scope(|s| {
            let reloader = s.spawn(|| entry.reload());

            thread::sleep(Duration::from_millis(100));
            // The replacement is loaded, but the swap waits for our guard.
            assert_eq!(entry.reload_count(), 0);
            assert_eq!(loader.dropped.load(Ordering::SeqCst), 0);
            let segments = guard.tokenize("世界", SegmentMode::Search, true).unwrap();
            assert_eq!(segments[0].word, "1");

            drop(guard);
            reloader.join().unwrap().unwrap();
        });

        assert_eq!(entry.reload_count(), 1);
        assert_eq!(loader.dropped.load(Ordering::SeqCst), 1);
        assert_eq!(generation_of(&entry), 2);
    }

    #[test]
    fn test_reload_all() {
        let loader = Arc::new(CountingLoader::default());
        let registry = SegmenterRegistry::new(loader.clone());
        let a = registry.acquire_key("a").unwrap();
        let b = registry.acquire_key("b").unwrap();

        registry.reload_all().unwrap();
        assert_eq!(a.reload_count(), 1);
        assert_eq!(b.reload_count(), 1);

        loader.fail.store(true, Ordering::SeqCst);
        assert!(registry.reload_all().is_err());
        assert_eq!(a.reload_count(), 1);
    }
}
