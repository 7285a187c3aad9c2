//! Tests for the Stable Diffusion HTTP client.

mod test_utils;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use mangaka_core::{CompiledPrompt, GenerationParams, Txt2ImgRequest};
use mangaka_error::{BackendErrorKind, MangakaErrorKind};
use mangaka_interface::ImageBackend;
use mangaka_models::StableDiffusionClient;
use mangaka_rate_limit::BackendConfig;
use test_utils::{MockServer, MockServerResponse};

fn client_for(url: &str) -> StableDiffusionClient {
    StableDiffusionClient::new(&BackendConfig {
        url: url.to_string(),
        probe_timeout_secs: 2,
        request_timeout_secs: 5,
    })
    .unwrap()
}

fn request() -> Txt2ImgRequest {
    Txt2ImgRequest::new(
        &CompiledPrompt::new("manga panel", "blurry"),
        &GenerationParams::default(),
    )
}

fn backend_kind(err: &mangaka_error::MangakaError) -> BackendErrorKind {
    match err.kind() {
        MangakaErrorKind::Backend(e) => e.kind.clone(),
        other => panic!("expected backend error, got {}", other),
    }
}

#[tokio::test]
async fn test_unreachable_backend() {
    let client = client_for("http://127.0.0.1:1");

    let status = client.probe().await;
    assert!(!status.is_available());

    let err = client.txt2img(&request()).await.unwrap_err();
    assert!(matches!(backend_kind(&err), BackendErrorKind::Request(_)));
}

#[tokio::test]
async fn test_probe_and_generate() {
    let image = b"\x89PNG fake".to_vec();
    let body = format!(r#"{{"images": ["{}"], "info": "{{}}"}}"#, STANDARD.encode(&image));
    let server = MockServer::start(MockServerResponse::ok("{}"), MockServerResponse::ok(body)).await;
    let client = client_for(&server.url);

    assert!(client.probe().await.is_available());
    assert_eq!(client.txt2img(&request()).await.unwrap(), image);
}

#[tokio::test]
async fn test_probe_requires_200() {
    let server = MockServer::start(
        MockServerResponse::status(204, ""),
        MockServerResponse::ok("{}"),
    )
    .await;
    let client = client_for(&server.url);

    assert!(!client.probe().await.is_available());
}

#[tokio::test]
async fn test_error_status() {
    let server = MockServer::start(
        MockServerResponse::ok("{}"),
        MockServerResponse::status(500, r#"{"error": "CUDA out of memory"}"#),
    )
    .await;
    let client = client_for(&server.url);

    let err = client.txt2img(&request()).await.unwrap_err();
    match backend_kind(&err) {
        BackendErrorKind::Status { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("CUDA"));
        }
        other => panic!("unexpected kind {}", other),
    }
}

#[tokio::test]
async fn test_empty_image_list() {
    let server = MockServer::start(
        MockServerResponse::ok("{}"),
        MockServerResponse::ok(r#"{"images": []}"#),
    )
    .await;
    let client = client_for(&server.url);

    let err = client.txt2img(&request()).await.unwrap_err();
    assert_eq!(backend_kind(&err), BackendErrorKind::EmptyResponse);
}

#[tokio::test]
async fn test_malformed_json_and_base64() {
    let server = MockServer::start(
        MockServerResponse::ok("{}"),
        MockServerResponse::ok("not json"),
    )
    .await;
    let err = client_for(&server.url)
        .txt2img(&request())
        .await
        .unwrap_err();
    assert!(matches!(backend_kind(&err), BackendErrorKind::Decode(_)));

    let server = MockServer::start(
        MockServerResponse::ok("{}"),
        MockServerResponse::ok(r#"{"images": ["***"]}"#),
    )
    .await;
    let err = client_for(&server.url)
        .txt2img(&request())
        .await
        .unwrap_err();
    assert!(matches!(backend_kind(&err), BackendErrorKind::Decode(_)));
}

#[tokio::test]
async fn test_data_url_prefix_is_accepted() {
    let body = format!(
        r#"{{"images": ["data:image/png;base64,{}"]}}"#,
        STANDARD.encode(b"pixels")
    );
    let server = MockServer::start(MockServerResponse::ok("{}"), MockServerResponse::ok(body)).await;

    let bytes = client_for(&server.url).txt2img(&request()).await.unwrap();
    assert_eq!(bytes, b"pixels");
}

#[test]
fn test_trailing_slash_trimmed() {
    let client = client_for("http://127.0.0.1:7860/");
    assert_eq!(client.base_url(), "http://127.0.0.1:7860");
}
