//! Panel image storage for Mangaka.
//!
//! Generated panels (and fallback placeholders) are written to a single output
//! directory under names derived from the scene id and the SHA-256 of the
//! image bytes, then served under a URL prefix.
//!
//! # Example
//!
//! ```rust
//! use mangaka_storage::{PanelFileStorage, PanelStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = PanelFileStorage::new("/tmp/panels", "/images")?;
//!
//! let png = vec![0u8; 1024];
//! let stored = storage.store("scene_1", &png).await?;
//! assert!(stored.url().starts_with("/images/panel_scene_1_"));
//!
//! let retrieved = storage.retrieve(&stored).await?;
//! assert_eq!(png, retrieved);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod stored;

pub use filesystem::{PanelFileStorage, content_hash, panel_file_name, sanitize_scene_id};
pub use mangaka_error::{StorageError, StorageErrorKind};
pub use stored::{StoredPanel, StoredPanelBuilder, StoredPanelBuilderError};

use mangaka_error::MangakaResult;

/// Pluggable storage for panel images.
#[async_trait::async_trait]
pub trait PanelStore: Send + Sync {
    /// Store image bytes for a scene and return where they landed.
    ///
    /// Storing identical bytes for the same scene twice yields the same file.
    async fn store(&self, scene_id: &str, data: &[u8]) -> MangakaResult<StoredPanel>;

    /// Read a stored panel back, verifying its content hash.
    async fn retrieve(&self, panel: &StoredPanel) -> MangakaResult<Vec<u8>>;

    /// Whether the panel file is present.
    async fn exists(&self, panel: &StoredPanel) -> MangakaResult<bool>;

    /// Remove the panel file.
    async fn delete(&self, panel: &StoredPanel) -> MangakaResult<()>;

    /// Public URL for a file name in this store.
    fn url_for(&self, file_name: &str) -> String;
}
