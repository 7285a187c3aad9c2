//! Filesystem panel storage.

use crate::{PanelStore, StoredPanel};
use mangaka_error::{MangakaResult, StorageError, StorageErrorKind};
use mangaka_rate_limit::StorageConfig;
use sha2::{Digest, Sha256};
use std::path::PathBuf;

/// Hex characters of the content hash kept in file names.
const HASH_PREFIX_LEN: usize = 12;

/// Replace every character outside `[A-Za-z0-9_-]` with `_`.
///
/// ```
/// use mangaka_storage::sanitize_scene_id;
///
/// assert_eq!(sanitize_scene_id("scene_3"), "scene_3");
/// assert_eq!(sanitize_scene_id("../etc/passwd"), "___etc_passwd");
/// ```
pub fn sanitize_scene_id(scene_id: &str) -> String {
    scene_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Hex SHA-256 of `data`.
pub fn content_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// File name for a panel: `panel_<scene id>_<12 hex chars of sha256>.png`.
pub fn panel_file_name(scene_id: &str, hash: &str) -> String {
    let short = hash.get(..HASH_PREFIX_LEN).unwrap_or(hash);
    format!("panel_{}_{}.png", sanitize_scene_id(scene_id), short)
}

/// Panel storage in a flat output directory.
///
/// ```text
/// generated_images/
/// ├── panel_scene_1_3f2a9c01be44.png
/// ├── panel_scene_2_c81d00e7a9b2.png
/// └── panel_scene_3_0aa1f4d5e6c7.png
/// ```
///
/// Writes go to a temp file first and are renamed into place.
#[derive(Debug, Clone)]
pub struct PanelFileStorage {
    output_dir: PathBuf,
    url_prefix: String,
}

impl PanelFileStorage {
    /// Create a storage rooted at `output_dir`, serving under `url_prefix`.
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(output_dir, url_prefix))]
    pub fn new(
        output_dir: impl Into<PathBuf>,
        url_prefix: impl Into<String>,
    ) -> MangakaResult<Self> {
        let output_dir = output_dir.into();

        std::fs::create_dir_all(&output_dir).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                output_dir.display(),
                e
            )))
        })?;

        let url_prefix = url_prefix.into().trim_end_matches('/').to_string();
        tracing::info!(path = %output_dir.display(), url_prefix = %url_prefix, "Opened panel storage");
        Ok(Self {
            output_dir,
            url_prefix,
        })
    }

    /// Create a storage from configuration.
    pub fn from_config(config: &StorageConfig) -> MangakaResult<Self> {
        Self::new(config.output_dir.clone(), config.url_prefix.clone())
    }

    /// Directory panels are written to.
    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    fn verify_hash(data: &[u8], expected: &str) -> MangakaResult<()> {
        let actual = content_hash(data);
        if actual != expected {
            return Err(StorageError::new(StorageErrorKind::HashMismatch {
                expected: expected.to_string(),
                actual,
            })
            .into());
        }
        Ok(())
    }

    fn reference(&self, file_name: String, hash: String, size: usize) -> MangakaResult<StoredPanel> {
        StoredPanel::builder()
            .path(self.output_dir.join(&file_name))
            .url(self.url_for(&file_name))
            .file_name(file_name)
            .content_hash(hash)
            .size_bytes(size as u64)
            .build()
            .map_err(|e| StorageError::new(StorageErrorKind::FileWrite(e.to_string())).into())
    }
}

#[async_trait::async_trait]
impl PanelStore for PanelFileStorage {
    #[tracing::instrument(skip(self, data), fields(size = data.len()))]
    async fn store(&self, scene_id: &str, data: &[u8]) -> MangakaResult<StoredPanel> {
        let hash = content_hash(data);
        let file_name = panel_file_name(scene_id, &hash);
        let path = self.output_dir.join(&file_name);

        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::debug!(path = %path.display(), "Panel already stored");
            return self.reference(file_name, hash, data.len());
        }

        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::info!(
            path = %path.display(),
            size = data.len(),
            "Stored panel image"
        );

        self.reference(file_name, hash, data.len())
    }

    #[tracing::instrument(skip(self, panel), fields(path = %panel.path().display()))]
    async fn retrieve(&self, panel: &StoredPanel) -> MangakaResult<Vec<u8>> {
        let path = panel.path();

        let data = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(path.display().to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        Self::verify_hash(&data, panel.content_hash())?;

        tracing::debug!(size = data.len(), "Retrieved panel image");
        Ok(data)
    }

    async fn exists(&self, panel: &StoredPanel) -> MangakaResult<bool> {
        Ok(tokio::fs::try_exists(panel.path()).await.unwrap_or(false))
    }

    #[tracing::instrument(skip(self, panel), fields(path = %panel.path().display()))]
    async fn delete(&self, panel: &StoredPanel) -> MangakaResult<()> {
        let path = panel.path();

        tokio::fs::remove_file(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(path.display().to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "delete {}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        tracing::info!("Deleted panel image");
        Ok(())
    }

    fn url_for(&self, file_name: &str) -> String {
        format!("{}/{}", self.url_prefix, file_name)
    }
}
