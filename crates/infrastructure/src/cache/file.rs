use async_trait::async_trait;
use certwatch_application::ports::CacheStore;
use certwatch_domain::{CacheEntry, DomainError, ExpiryDate};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const CACHE_FILE_EXTENSION: &str = "txt";

/// One `<key>.txt` file per entry, holding the JSON-serialized expiry date.
///
/// The file's modification time is the entry's `stored_at`, so TTLs keep
/// counting across restarts. Unreadable or corrupt files are treated as cold.
pub struct FileCacheStore {
    directory: PathBuf,
}

impl FileCacheStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Create the cache directory if it does not exist yet.
    pub async fn ensure_directory(&self) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| {
                DomainError::CacheStorage(format!(
                    "cannot create cache directory {}: {}",
                    self.directory.display(),
                    e
                ))
            })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, DomainError> {
        if key.is_empty()
            || key.contains(['/', '\\'])
            || key.contains("..")
            || key.chars().any(char::is_control)
        {
            return Err(DomainError::CacheStorage(format!(
                "key '{}' is not usable as a file name",
                key
            )));
        }
        Ok(self
            .directory
            .join(format!("{}.{}", key, CACHE_FILE_EXTENSION)))
    }
}

#[async_trait]
impl CacheStore for FileCacheStore {
    async fn load(&self, key: &str) -> Result<Option<CacheEntry>, DomainError> {
        let path = self.path_for(key)?;

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DomainError::CacheStorage(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let value: ExpiryDate = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring corrupt cache file");
                return Ok(None);
            }
        };

        let stored_at = tokio::fs::metadata(&path)
            .await
            .and_then(|meta| meta.modified())
            .map_err(|e| {
                DomainError::CacheStorage(format!(
                    "cannot read mtime of {}: {}",
                    path.display(),
                    e
                ))
            })?;

        Ok(Some(CacheEntry {
            key: key.to_string(),
            value,
            stored_at,
        }))
    }

    async fn save(&self, entry: CacheEntry) -> Result<(), DomainError> {
        let path = self.path_for(&entry.key)?;
        let payload = serde_json::to_string(&entry.value)
            .map_err(|e| DomainError::CacheStorage(e.to_string()))?;

        tokio::fs::write(&path, payload).await.map_err(|e| {
            DomainError::CacheStorage(format!("cannot write {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "Cache file written");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
