//! The mtime-keyed read cache and its filesystem collaborator.
//!
//! Re-parsing a config file that has not changed is wasted work, so
//! [`DocumentCache`] memoizes one parsed snapshot per source path, keyed by
//! the source's last-known modification time:
//!
//! - **Read**: stat the source; on a matching timestamp return the cached
//!   snapshot without touching the file content, otherwise parse and cache.
//! - **Write**: render, persist, then overwrite the entry with the written
//!   tree stamped "now" — a write is trusted, the timestamp is not re-read.
//!
//! Entries are never evicted automatically; [`DocumentCache::invalidate`]
//! and [`DocumentCache::clear`] give callers explicit control. The cache is
//! plain mutable state with no interior locking — share it across threads
//! behind a `Mutex` if you must.
//!
//! Filesystem access goes through the [`SourceStore`] trait; [`FsStore`] is
//! the `std::fs` implementation. Tests substitute their own store.
//!
//! ## Examples
//!
//! ```no_run
//! use yamlet::{DocumentCache, FsStore, Options};
//! use std::path::Path;
//!
//! let mut cache = DocumentCache::new();
//! let options = Options::new();
//!
//! let read = cache.read(Path::new("app.yml"), &FsStore, &options)?;
//! println!("{} keys", read.snapshot.len());
//!
//! // unchanged file: same snapshot back, no re-parse
//! let again = cache.read(Path::new("app.yml"), &FsStore, &options)?;
//! assert!(!again.fresh);
//! # Ok::<(), yamlet::Error>(())
//! ```

use crate::error::{Diagnostic, Error, Result};
use crate::render::{render_with_options, Rendered};
use crate::{parse, DocMap, Options};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Filesystem collaborator: everything the cache needs from the outside
/// world. Implementations decide where bytes actually live.
pub trait SourceStore {
    /// Returns the source's current modification time.
    fn modified(&self, path: &Path) -> Result<DateTime<Utc>>;

    /// Reads the source's full text (UTF-8).
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Writes the full text back to the source.
    fn write_text(&self, path: &Path, content: &str) -> Result<()>;
}

/// The `std::fs` implementation of [`SourceStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl SourceStore for FsStore {
    fn modified(&self, path: &Path) -> Result<DateTime<Utc>> {
        let metadata = std::fs::metadata(path).map_err(|e| Error::from_io(path, e))?;
        let modified = metadata.modified().map_err(|e| Error::from_io(path, e))?;
        Ok(modified.into())
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| Error::from_io(path, e))
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        std::fs::write(path, content).map_err(|e| Error::from_io(path, e))
    }
}

/// One memoized parse: the snapshot and the mtime it corresponds to.
#[derive(Debug, Clone)]
struct CacheEntry {
    modified: DateTime<Utc>,
    snapshot: Arc<DocMap>,
}

/// The outcome of a cached read.
#[derive(Debug, Clone)]
pub struct CachedRead {
    /// The parsed tree. Shared: an unchanged source read twice hands back
    /// the same allocation (`Arc::ptr_eq` holds).
    pub snapshot: Arc<DocMap>,
    /// Diagnostics from the parse. Empty on a cache hit — the original
    /// parse's diagnostics were already reported once.
    pub diagnostics: Vec<Diagnostic>,
    /// `true` when the source was actually (re-)parsed.
    pub fresh: bool,
}

/// Process-lifetime mapping from source path to its last parsed snapshot.
#[derive(Debug, Clone, Default)]
pub struct DocumentCache {
    entries: HashMap<PathBuf, CacheEntry>,
}

impl DocumentCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a source through the cache.
    ///
    /// Stats the source first; if the stored timestamp matches, the cached
    /// snapshot is returned as-is without re-reading the content. Otherwise
    /// the text is read, parsed, and memoized.
    ///
    /// # Errors
    ///
    /// Fails only on filesystem errors from the store. Malformed content is
    /// never an error; it shows up as diagnostics on a partial tree.
    pub fn read(
        &mut self,
        path: &Path,
        store: &impl SourceStore,
        options: &Options,
    ) -> Result<CachedRead> {
        let modified = store.modified(path)?;

        if let Some(entry) = self.entries.get(path) {
            if entry.modified == modified {
                return Ok(CachedRead {
                    snapshot: Arc::clone(&entry.snapshot),
                    diagnostics: Vec::new(),
                    fresh: false,
                });
            }
        }

        let text = store.read_text(path)?;
        let source_id = path.display().to_string();
        let parsed = parse::parse_source(&text, Some(&source_id), options);
        let snapshot = Arc::new(parsed.tree);
        self.entries.insert(
            path.to_path_buf(),
            CacheEntry {
                modified,
                snapshot: Arc::clone(&snapshot),
            },
        );
        Ok(CachedRead {
            snapshot,
            diagnostics: parsed.diagnostics,
            fresh: true,
        })
    }

    /// Renders a tree, persists it, and refreshes the cache entry.
    ///
    /// The entry is stamped with `Utc::now()` rather than a re-stat: the
    /// write is trusted to have succeeded, and the next read only re-parses
    /// if something else touched the file afterwards.
    ///
    /// Returns the rendered text (and any render diagnostics).
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors from the store.
    pub fn write(
        &mut self,
        path: &Path,
        tree: &DocMap,
        store: &impl SourceStore,
        options: &Options,
    ) -> Result<Rendered> {
        let rendered = render_with_options(tree, options);
        store.write_text(path, &rendered.text)?;
        self.entries.insert(
            path.to_path_buf(),
            CacheEntry {
                modified: Utc::now(),
                snapshot: Arc::new(tree.clone()),
            },
        );
        Ok(rendered)
    }

    /// Drops the entry for one source. Returns `true` if one existed.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.entries.remove(path).is_some()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;
    use chrono::TimeZone;
    use std::cell::{Cell, RefCell};

    /// In-memory store with a controllable mtime and a read counter.
    struct FakeStore {
        text: RefCell<String>,
        mtime: Cell<i64>,
        reads: Cell<usize>,
        writes: Cell<usize>,
    }

    impl FakeStore {
        fn new(text: &str) -> Self {
            FakeStore {
                text: RefCell::new(text.to_string()),
                mtime: Cell::new(1_000),
                reads: Cell::new(0),
                writes: Cell::new(0),
            }
        }

        fn touch(&self) {
            self.mtime.set(self.mtime.get() + 1);
        }
    }

    impl SourceStore for FakeStore {
        fn modified(&self, _path: &Path) -> Result<DateTime<Utc>> {
            Ok(Utc.timestamp_opt(self.mtime.get(), 0).unwrap())
        }

        fn read_text(&self, _path: &Path) -> Result<String> {
            self.reads.set(self.reads.get() + 1);
            Ok(self.text.borrow().clone())
        }

        fn write_text(&self, _path: &Path, content: &str) -> Result<()> {
            self.writes.set(self.writes.get() + 1);
            *self.text.borrow_mut() = content.to_string();
            Ok(())
        }
    }

    fn quiet() -> Options {
        Options::new().with_logging(false)
    }

    #[test]
    fn test_unchanged_source_is_not_reparsed() {
        let store = FakeStore::new("x: 1");
        let mut cache = DocumentCache::new();
        let path = Path::new("conf.yml");

        let first = cache.read(path, &store, &quiet()).unwrap();
        assert!(first.fresh);
        assert_eq!(store.reads.get(), 1);

        let second = cache.read(path, &store, &quiet()).unwrap();
        assert!(!second.fresh);
        assert_eq!(store.reads.get(), 1);
        assert!(Arc::ptr_eq(&first.snapshot, &second.snapshot));
    }

    #[test]
    fn test_touched_source_forces_reparse() {
        let store = FakeStore::new("x: 1");
        let mut cache = DocumentCache::new();
        let path = Path::new("conf.yml");

        let first = cache.read(path, &store, &quiet()).unwrap();
        assert_eq!(first.snapshot.get("x"), Some(&Value::Number(1.0)));

        *store.text.borrow_mut() = "x: 2".to_string();
        store.touch();

        let second = cache.read(path, &store, &quiet()).unwrap();
        assert!(second.fresh);
        assert_eq!(store.reads.get(), 2);
        assert_eq!(second.snapshot.get("x"), Some(&Value::Number(2.0)));
    }

    #[test]
    fn test_write_persists_and_refreshes_entry() {
        let store = FakeStore::new("");
        let mut cache = DocumentCache::new();
        let path = Path::new("conf.yml");

        let mut tree = DocMap::new();
        tree.insert("x".to_string(), Value::Number(1.0));

        let rendered = cache.write(path, &tree, &store, &quiet()).unwrap();
        assert_eq!(rendered.text, "x: 1");
        assert_eq!(store.writes.get(), 1);
        assert_eq!(*store.text.borrow(), "x: 1");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_hit_reports_no_diagnostics_twice() {
        let store = FakeStore::new("x: 1\nx: 2");
        let mut cache = DocumentCache::new();
        let path = Path::new("conf.yml");

        let first = cache.read(path, &store, &quiet()).unwrap();
        assert_eq!(first.diagnostics.len(), 1);

        let second = cache.read(path, &store, &quiet()).unwrap();
        assert!(second.diagnostics.is_empty());
    }

    #[test]
    fn test_diagnostics_carry_the_source_path() {
        let store = FakeStore::new("???");
        let mut cache = DocumentCache::new();
        let read = cache.read(Path::new("conf.yml"), &store, &quiet()).unwrap();
        assert_eq!(read.diagnostics[0].source.as_deref(), Some("conf.yml"));
        assert_eq!(read.diagnostics[0].line, Some(1));
    }

    #[test]
    fn test_invalidate_and_clear() {
        let store = FakeStore::new("x: 1");
        let mut cache = DocumentCache::new();
        let path = Path::new("conf.yml");

        cache.read(path, &store, &quiet()).unwrap();
        assert!(!cache.is_empty());

        assert!(cache.invalidate(path));
        assert!(!cache.invalidate(path));

        let read = cache.read(path, &store, &quiet()).unwrap();
        assert!(read.fresh);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_missing_source_is_a_fatal_error() {
        struct MissingStore;
        impl SourceStore for MissingStore {
            fn modified(&self, path: &Path) -> Result<DateTime<Utc>> {
                Err(Error::from_io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
                ))
            }
            fn read_text(&self, path: &Path) -> Result<String> {
                Err(Error::from_io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
                ))
            }
            fn write_text(&self, _path: &Path, _content: &str) -> Result<()> {
                Ok(())
            }
        }

        let mut cache = DocumentCache::new();
        let err = cache
            .read(Path::new("absent.yml"), &MissingStore, &quiet())
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }
}
