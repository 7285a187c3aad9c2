//! Tests for filesystem panel storage.

use mangaka_error::MangakaErrorKind;
use mangaka_storage::{PanelFileStorage, PanelStore, StoredPanel, panel_file_name};
use tempfile::TempDir;

#[tokio::test]
async fn test_store_and_retrieve() {
    let temp_dir = TempDir::new().unwrap();
    let storage = PanelFileStorage::new(temp_dir.path(), "/images").unwrap();

    let data = b"fake png bytes";
    let stored = storage.store("scene_1", data).await.unwrap();

    assert!(stored.file_name().starts_with("panel_scene_1_"));
    assert!(stored.file_name().ends_with(".png"));
    // panel_scene_1_ + 12 hex + .png
    assert_eq!(stored.file_name().len(), "panel_scene_1_".len() + 12 + 4);
    assert_eq!(stored.url(), &format!("/images/{}", stored.file_name()));
    assert_eq!(*stored.size_bytes(), data.len() as u64);
    assert!(stored.path().starts_with(temp_dir.path()));

    let retrieved = storage.retrieve(&stored).await.unwrap();
    assert_eq!(retrieved, data);
}

#[tokio::test]
async fn test_same_content_same_file() {
    let temp_dir = TempDir::new().unwrap();
    let storage = PanelFileStorage::new(temp_dir.path(), "/images").unwrap();

    let first = storage.store("scene_2", b"same").await.unwrap();
    let second = storage.store("scene_2", b"same").await.unwrap();
    assert_eq!(first, second);

    let other_scene = storage.store("scene_3", b"same").await.unwrap();
    assert_ne!(first.file_name(), other_scene.file_name());

    let entries = std::fs::read_dir(temp_dir.path()).unwrap().count();
    assert_eq!(entries, 2);
}

#[tokio::test]
async fn test_hash_verification() {
    let temp_dir = TempDir::new().unwrap();
    let storage = PanelFileStorage::new(temp_dir.path(), "/images").unwrap();

    let stored = storage.store("scene_1", b"Original data").await.unwrap();
    tokio::fs::write(stored.path(), b"Corrupted data")
        .await
        .unwrap();

    let result = storage.retrieve(&stored).await;
    assert!(matches!(
        result.unwrap_err().kind(),
        MangakaErrorKind::Storage(_)
    ));
}

#[tokio::test]
async fn test_delete() {
    let temp_dir = TempDir::new().unwrap();
    let storage = PanelFileStorage::new(temp_dir.path(), "/images").unwrap();

    let stored = storage.store("scene_1", b"Delete me").await.unwrap();
    assert!(storage.exists(&stored).await.unwrap());

    storage.delete(&stored).await.unwrap();
    assert!(!storage.exists(&stored).await.unwrap());
    assert!(storage.delete(&stored).await.is_err());
}

#[tokio::test]
async fn test_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let storage = PanelFileStorage::new(temp_dir.path(), "/images").unwrap();

    let missing = StoredPanel::builder()
        .file_name("panel_scene_9_000000000000.png")
        .path(temp_dir.path().join("panel_scene_9_000000000000.png"))
        .url("/images/panel_scene_9_000000000000.png")
        .content_hash("0".repeat(64))
        .size_bytes(0u64)
        .build()
        .unwrap();

    assert!(storage.retrieve(&missing).await.is_err());
}

#[tokio::test]
async fn test_scene_id_is_sanitized() {
    let temp_dir = TempDir::new().unwrap();
    let storage = PanelFileStorage::new(temp_dir.path(), "/images/").unwrap();

    let stored = storage.store("../escape/attempt", b"data").await.unwrap();
    assert!(stored.file_name().starts_with("panel____escape_attempt_"));
    assert_eq!(stored.path().parent().unwrap(), temp_dir.path());
    // Trailing slash on the prefix is not doubled
    assert!(stored.url().starts_with("/images/panel_"));
}

#[test]
fn test_panel_file_name_format() {
    let hash = "abcdef0123456789abcdef";
    assert_eq!(
        panel_file_name("scene_4", hash),
        "panel_scene_4_abcdef012345.png"
    );
}

#[test]
fn test_creates_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("a").join("b");
    let storage = PanelFileStorage::new(&nested, "/images").unwrap();
    assert!(nested.is_dir());
    assert_eq!(storage.output_dir(), &nested);
}
