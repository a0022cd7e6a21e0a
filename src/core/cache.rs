//! Two-tier cache for season snapshots
//!
//! - L1 Cache: In-memory LRU cache for repeat lookups within one process
//! - L2 Cache: JSON files under the user cache directory, so the last good
//!   live snapshot survives between runs and can stand in when the network
//!   is unavailable.

use lru::LruCache;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};
use tracing::debug;

use crate::error::SplError;
use crate::Result;

/// Directory name under the platform cache directory.
pub const CACHE_DIR_NAME: &str = "spl-board";

/// Base cache directory: `~/.cache/spl-board` on Linux.
pub fn default_cache_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join(CACHE_DIR_NAME)
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Key usable for both memory and disk caching
pub trait CacheKey: Hash + Eq + Clone {
    /// File-system safe name for this entry, without extension
    fn to_file_key(&self) -> String;

    fn to_file_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.json", self.to_file_key()))
    }
}

/// Cache key for a season snapshot, one per source URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnapshotKey {
    pub url: String,
}

impl SnapshotKey {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl CacheKey for SnapshotKey {
    fn to_file_key(&self) -> String {
        let slug: String = self
            .url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        format!("snapshot_{}", slug)
    }
}

/// LRU memory cache backed by JSON files in `dir`
pub struct UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + DeserializeOwned,
{
    memory_cache: Mutex<LruCache<K, V>>,
    memory_capacity: usize,
    dir: PathBuf,
}

impl<K, V> UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + DeserializeOwned,
{
    pub fn new(dir: impl Into<PathBuf>, memory_capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(memory_capacity).ok_or_else(|| SplError::Cache {
            message: "memory capacity must be at least 1".to_string(),
        })?;

        Ok(Self {
            memory_cache: Mutex::new(LruCache::new(capacity)),
            memory_capacity,
            dir: dir.into(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn memory(&self) -> MutexGuard<'_, LruCache<K, V>> {
        self.memory_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get an item (memory first, then disk)
    pub fn get(&self, key: &K) -> Option<V> {
        if let Some(value) = self.memory().get(key) {
            return Some(value.clone());
        }

        let value = self.get_from_disk(key)?;
        // Promote to memory cache
        self.memory().put(key.clone(), value.clone());
        Some(value)
    }

    /// Store an item in memory and on disk
    pub fn put(&self, key: K, value: V) -> Result<()> {
        self.put_to_disk(&key, &value)?;
        self.memory().put(key, value);
        Ok(())
    }

    fn get_from_disk(&self, key: &K) -> Option<V> {
        let path = key.to_file_path(&self.dir);
        let content = try_read_to_string(&path)?;
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "ignoring unreadable cache file");
                None
            }
        }
    }

    fn put_to_disk(&self, key: &K, value: &V) -> Result<()> {
        let path = key.to_file_path(&self.dir);
        let content = serde_json::to_string_pretty(value)?;
        write_string(&path, &content)?;
        Ok(())
    }

    pub fn clear_memory(&self) {
        self.memory().clear();
    }

    /// Drop the disk copy for `key` (the memory copy is dropped too)
    pub fn invalidate(&self, key: &K) -> Result<()> {
        self.memory().pop(key);
        let path = key.to_file_path(&self.dir);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// `(entries in memory, memory capacity)`
    pub fn memory_stats(&self) -> (usize, usize) {
        (self.memory().len(), self.memory_capacity)
    }
}
