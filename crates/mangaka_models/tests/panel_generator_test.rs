//! Tests for panel generation and fallback.

mod test_utils;

use image::GenericImageView;
use mangaka_core::{GenerationParams, Mood, PanelSource, Scene, SceneType};
use mangaka_error::BackendErrorKind;
use mangaka_models::{PLACEHOLDER_HEIGHT, PLACEHOLDER_WIDTH, PanelGenerator, PanelPhase};
use mangaka_prompt::PromptCompiler;
use mangaka_script::ScriptParser;
use mangaka_storage::{PanelFileStorage, PanelStore};
use std::sync::Arc;
use tempfile::TempDir;
use test_utils::{MockBackend, MockBehavior};

fn dojo_scene() -> Scene {
    ScriptParser::new()
        .unwrap()
        .parse("[SCENE: Dojo - Morning]\n[CHARACTER: Rin - calm swordswoman]\n[ACTION: Rin draws her blade]\n[DIALOGUE: Rin] \"Stand back.\"")
        .scenes
        .remove(0)
}

fn generator(backend: Arc<MockBackend>, dir: &TempDir) -> PanelGenerator {
    let storage = PanelFileStorage::new(dir.path(), "/images").unwrap();
    PanelGenerator::new(
        backend,
        Arc::new(storage),
        PromptCompiler::default(),
        GenerationParams::default(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_backend_success() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(MockBackend::new(MockBehavior::Image(b"rendered".to_vec())));
    let generator = generator(backend.clone(), &dir);

    let run = generator.generate_panel_traced(&dojo_scene(), "shoujo").await;
    let panel = run.result;

    assert_eq!(
        run.phases,
        vec![
            PanelPhase::NotStarted,
            PanelPhase::Probing,
            PanelPhase::CallingBackend,
            PanelPhase::Saved
        ]
    );
    assert_eq!(panel.source, PanelSource::Backend);
    assert!(panel.error.is_none());
    assert_eq!(panel.scene_id, "scene_0");
    assert!(panel.image_url.starts_with("/images/panel_scene_0_"));
    assert_eq!(std::fs::read(&panel.image_path).unwrap(), b"rendered");
    assert_eq!(panel.metadata.model, "meinamix_meina-v11");
    assert_eq!(panel.metadata.style, "shoujo");
    assert_eq!(panel.metadata.scene_type, SceneType::SliceOfLife);
    assert_eq!(panel.metadata.mood, Mood::Neutral);

    let request = backend.last_request().unwrap();
    assert_eq!(request.prompt, panel.prompt_used);
    assert_eq!(request.negative_prompt, panel.negative_prompt);
    assert_eq!(request.params, GenerationParams::default());
}

#[tokio::test]
async fn test_probe_failure_falls_back() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(MockBackend::new(MockBehavior::Offline));
    let generator = generator(backend.clone(), &dir);

    let run = generator.generate_panel_traced(&dojo_scene(), "shounen").await;
    let panel = run.result;

    assert_eq!(
        run.phases,
        vec![
            PanelPhase::NotStarted,
            PanelPhase::Probing,
            PanelPhase::Fallback,
            PanelPhase::Saved
        ]
    );
    assert_eq!(backend.probe_count(), 1);
    assert_eq!(backend.call_count(), 0);
    assert!(panel.is_fallback());
    assert!(panel.error.as_deref().unwrap().contains("unavailable"));
    assert!(panel.image_url.starts_with("/images/panel_scene_0_"));

    let img = image::open(&panel.image_path).unwrap();
    assert_eq!(img.dimensions(), (PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT));
    assert_eq!(img.get_pixel(10, 10).0, [255, 255, 255, 255]);
}

#[tokio::test]
async fn test_backend_error_falls_back() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(MockBackend::new(MockBehavior::Error(
        BackendErrorKind::EmptyResponse,
    )));
    let generator = generator(backend.clone(), &dir);

    let run = generator.generate_panel_traced(&dojo_scene(), "shounen").await;

    assert_eq!(
        run.phases,
        vec![
            PanelPhase::NotStarted,
            PanelPhase::Probing,
            PanelPhase::CallingBackend,
            PanelPhase::Fallback,
            PanelPhase::Saved
        ]
    );
    assert_eq!(backend.call_count(), 1);
    assert_eq!(run.result.source, PanelSource::Fallback);
    assert!(run.result.error.as_deref().unwrap().contains("No images"));
    // Prompts are still reported on the fallback path
    assert!(run.result.prompt_used.starts_with("manga panel, shounen style"));
}

#[tokio::test]
async fn test_fallback_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(MockBackend::new(MockBehavior::Offline));
    let generator = generator(backend, &dir);
    let scene = dojo_scene();

    let first = generator.generate_panel(&scene, "shounen").await;
    let second = generator.generate_panel(&scene, "shounen").await;

    assert_eq!(first.image_url, second.image_url);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[tokio::test]
async fn test_unknown_style_records_default_model() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(MockBackend::new(MockBehavior::Image(vec![1, 2, 3])));
    let generator = generator(backend, &dir);

    let panel = generator.generate_panel(&dojo_scene(), "watercolor").await;
    assert_eq!(panel.metadata.model, "default");
}

#[tokio::test]
async fn test_stored_panel_is_retrievable() {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(PanelFileStorage::new(dir.path(), "/images").unwrap());
    let backend = Arc::new(MockBackend::new(MockBehavior::Image(b"abc".to_vec())));
    let generator = PanelGenerator::new(
        backend,
        storage.clone(),
        PromptCompiler::default(),
        GenerationParams::default(),
    )
    .unwrap();

    let panel = generator.generate_panel(&Scene::empty(7), "comedy").await;
    let file_name = panel.image_url.trim_start_matches("/images/");
    assert_eq!(storage.url_for(file_name), panel.image_url);
    assert!(dir.path().join(file_name).exists());
}
