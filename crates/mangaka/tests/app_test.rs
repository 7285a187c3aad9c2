//! End-to-end tests through the facade.

use async_trait::async_trait;
use mangaka::{
    BackendStatus, ImageBackend, InMemoryJobRepository, JobStatus, Mangaka, MangakaConfig,
    MangakaErrorKind, MangakaResult, PanelSource, PacingConfig, ScriptErrorKind, Txt2ImgRequest,
};
use std::io::Write;
use std::sync::Arc;
use tempfile::TempDir;

const SCRIPT: &str = r#"[SCENE: Dojo - Morning]
[CHARACTER: Rin - calm swordswoman]
[ACTION: Rin draws her blade]
[DIALOGUE: Rin] "Stand back."

[SCENE: Dojo - Noon]
[CHARACTER: Kai - eager apprentice]
[ACTION: Kai attacks with a wooden sword]
[DIALOGUE: Kai] "Here I come!"
"#;

struct OfflineBackend;

#[async_trait]
impl ImageBackend for OfflineBackend {
    async fn probe(&self) -> BackendStatus {
        BackendStatus::Unavailable {
            reason: "offline".to_string(),
        }
    }

    async fn txt2img(&self, _request: &Txt2ImgRequest) -> MangakaResult<Vec<u8>> {
        unreachable!("probe never succeeds")
    }

    fn backend_name(&self) -> &'static str {
        "offline"
    }
}

fn app(dir: &TempDir) -> Mangaka {
    let mut config = MangakaConfig::default();
    config.storage.output_dir = dir.path().join("panels");
    config.pacing = PacingConfig {
        delay_ms: 0,
        max_in_flight: 1,
    };
    Mangaka::with_parts(
        config,
        Arc::new(OfflineBackend),
        Arc::new(InMemoryJobRepository::new()),
    )
    .unwrap()
}

#[tokio::test]
async fn test_read_script_and_select_scene() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let path = dir.path().join("chapter.txt");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(SCRIPT.as_bytes())
        .unwrap();

    let (text, parsed) = app.read_script(&path).await.unwrap();
    assert_eq!(text, SCRIPT);
    assert_eq!(parsed.total_scenes, 2);
    assert_eq!(parsed.character_list, vec!["Kai", "Rin"]);

    let scene = Mangaka::scene(&parsed, 1).unwrap();
    assert_eq!(scene.time, "Noon");

    let err = Mangaka::scene(&parsed, 2).unwrap_err();
    match err.kind() {
        MangakaErrorKind::Script(e) => {
            assert_eq!(e.kind, ScriptErrorKind::SceneOutOfRange { index: 2, total: 2 })
        }
        other => panic!("unexpected error {}", other),
    }
}

#[tokio::test]
async fn test_default_style_and_prompts() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    assert_eq!(app.style(None), "shounen");
    assert_eq!(app.style(Some("shoujo")), "shoujo");

    let parsed = app.parser().parse(SCRIPT);
    let compiled = app.compiler().compile(&parsed.scenes[1], app.style(None));
    assert!(compiled.prompt.contains("dramatic lighting"));
}

#[tokio::test]
async fn test_panel_without_backend() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let parsed = app.parser().parse(SCRIPT);
    let panel = app
        .generator()
        .generate_panel(&parsed.scenes[0], "shounen")
        .await;

    assert_eq!(panel.source, PanelSource::Fallback);
    assert!(std::path::Path::new(&panel.image_path).exists());
    assert_eq!(panel.metadata.model, "anythingV5_PrtRE");
}

#[tokio::test]
async fn test_full_job_without_backend() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);
    let runner = app.runner();

    let script = runner.submit_script("Dojo", SCRIPT, None).await.unwrap();
    let job = runner.start(script.id, Some("seinen")).await.unwrap();
    let done = runner.run(job.id).await.unwrap();

    assert_eq!(done.status, JobStatus::Completed);
    assert_eq!(done.completed_panels, 2);
    assert_eq!(done.result.unwrap().panels.len(), 2);
}
