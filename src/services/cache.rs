use crate::error::Result;
use crate::models::showcase::AggregateResult;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CACHE_FORMAT_VERSION: u32 = 1;
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Last-known-good storage consulted only when the live fetch fails.
pub trait CacheStore: Send + Sync {
    /// Returns the stored result while it is younger than the TTL. Missing, expired and
    /// unreadable entries all read as `None`.
    fn read(&self) -> Option<AggregateResult>;

    /// Overwrites any previous entry.
    fn write(&self, result: &AggregateResult) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    pub version: u32,
    pub cached_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: AggregateResult,
}

impl CacheEntry {
    pub fn new(result: AggregateResult, cached_at: DateTime<Utc>) -> Self {
        Self {
            version: CACHE_FORMAT_VERSION,
            cached_at,
            result,
        }
    }

    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        let ttl = match chrono::Duration::from_std(ttl) {
            Ok(ttl) => ttl,
            Err(_) => return true,
        };
        now.signed_duration_since(self.cached_at) < ttl
    }
}

pub struct FileCache {
    path: PathBuf,
    ttl: Duration,
}

impl FileCache {
    pub fn new(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            path: path.into(),
            ttl,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Option<CacheEntry>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    pub fn read_at(&self, now: DateTime<Utc>) -> Option<AggregateResult> {
        let entry = match self.load() {
            Ok(Some(entry)) => entry,
            Ok(None) => {
                debug!("No cache file at {}", self.path.display());
                return None;
            }
            Err(e) => {
                warn!("Ignoring unreadable cache file {}: {}", self.path.display(), e);
                return None;
            }
        };

        if entry.version != CACHE_FORMAT_VERSION {
            warn!(
                "Ignoring cache file with format version {} (expected {})",
                entry.version, CACHE_FORMAT_VERSION
            );
            return None;
        }

        if !entry.is_fresh(now, self.ttl) {
            debug!("Cache entry from {} has expired", entry.cached_at);
            return None;
        }

        Some(entry.result)
    }

    /// Writes to a sibling temp file and renames it into place, so readers see either the
    /// old document or the new one.
    pub fn write_entry(&self, entry: &CacheEntry) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let mut tmp = NamedTempFile::new_in(parent)?;
        serde_json::to_writer_pretty(&mut tmp, entry)?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl CacheStore for FileCache {
    fn read(&self) -> Option<AggregateResult> {
        self.read_at(Utc::now())
    }

    fn write(&self, result: &AggregateResult) -> Result<()> {
        self.write_entry(&CacheEntry::new(result.clone(), Utc::now()))
    }
}
