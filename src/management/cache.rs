use std::path::PathBuf;

use md5::{Digest, Md5};
use serde::{Serialize, de::DeserializeOwned};

use crate::types::{SourceId, SpotifySearchResult};

#[derive(Debug)]
pub enum CacheError {
    IoError(std::io::Error),
    SerdeError(serde_json::Error),
}

impl From<std::io::Error> for CacheError {
    fn from(err: std::io::Error) -> Self {
        CacheError::IoError(err)
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        CacheError::SerdeError(err)
    }
}

fn default_cache_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playsync/cache");
    path
}

/// Disk cache for resolved provider payloads (resource details and track
/// record lists), one pretty-printed JSON file per resource.
pub struct ResourceCacheManager {
    base: PathBuf,
}

impl ResourceCacheManager {
    pub fn new() -> Self {
        Self {
            base: default_cache_dir(),
        }
    }

    pub fn with_base(base: PathBuf) -> Self {
        Self { base }
    }

    fn path(&self, source: &SourceId, suffix: Option<&str>) -> PathBuf {
        let name = match suffix {
            Some(suffix) => format!(
                "{}_{}_{}_{suffix}.json",
                source.provider, source.resource_type, source.value
            ),
            None => format!(
                "{}_{}_{}.json",
                source.provider, source.resource_type, source.value
            ),
        };
        self.base.join(name)
    }

    /// Cache read. Absence and corruption both come back as `None`; a
    /// corrupt entry is simply refetched and overwritten.
    pub async fn get<T: DeserializeOwned>(
        &self,
        source: &SourceId,
        suffix: Option<&str>,
    ) -> Option<T> {
        let path = self.path(source, suffix);
        let content = async_fs::read_to_string(&path).await.ok()?;
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("Discarding corrupt cache entry {}: {err}", path.display());
                None
            }
        }
    }

    pub async fn put<T: Serialize>(
        &self,
        source: &SourceId,
        suffix: Option<&str>,
        value: &T,
    ) -> Result<(), CacheError> {
        let path = self.path(source, suffix);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(value)?;
        async_fs::write(path, json).await?;
        Ok(())
    }
}

/// Disk cache for Spotify search results, keyed by the MD5 of the
/// normalized query so arbitrary title text never reaches the filesystem.
pub struct SearchCacheManager {
    base: PathBuf,
}

impl SearchCacheManager {
    pub fn new() -> Self {
        Self {
            base: default_cache_dir(),
        }
    }

    pub fn with_base(base: PathBuf) -> Self {
        Self { base }
    }

    /// Cache key for a query: MD5 hex of the trimmed, lowercased text, so
    /// casing and padding variants share an entry.
    pub fn key(query: &str) -> String {
        let digest = Md5::digest(query.trim().to_lowercase().as_bytes());
        digest.iter().map(|byte| format!("{byte:02x}")).collect()
    }

    fn path(&self, query: &str) -> PathBuf {
        self.base.join(format!("spotify_search_{}.json", Self::key(query)))
    }

    pub async fn get(&self, query: &str) -> Option<SpotifySearchResult> {
        let path = self.path(query);
        let content = async_fs::read_to_string(&path).await.ok()?;
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("Discarding corrupt search cache {}: {err}", path.display());
                None
            }
        }
    }

    pub async fn put(&self, query: &str, result: &SpotifySearchResult) -> Result<(), CacheError> {
        let path = self.path(query);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(result)?;
        async_fs::write(path, json).await?;
        Ok(())
    }
}
