//! Stored panel reference.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location and identity of a stored panel image.
#[derive(
    Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct StoredPanel {
    /// File name within the output directory
    file_name: String,
    /// Full filesystem path
    path: PathBuf,
    /// URL the panel is served under
    url: String,
    /// Hex SHA-256 of the file content
    content_hash: String,
    /// File size in bytes
    size_bytes: u64,
}

impl StoredPanel {
    /// Creates a new builder.
    pub fn builder() -> StoredPanelBuilder {
        StoredPanelBuilder::default()
    }
}
