//! Stable Diffusion WebUI API client.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use mangaka_core::{Txt2ImgRequest, Txt2ImgResponse};
use mangaka_error::{BackendError, BackendErrorKind, HttpError, MangakaResult};
use mangaka_interface::{BackendStatus, ImageBackend};
use mangaka_rate_limit::BackendConfig;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

const PING_PATH: &str = "/internal/ping";
const TXT2IMG_PATH: &str = "/sdapi/v1/txt2img";

/// Longest error body kept in an error message.
const MAX_ERROR_BODY: usize = 512;

/// Client for a Stable Diffusion WebUI style HTTP API.
#[derive(Debug, Clone)]
pub struct StableDiffusionClient {
    client: Client,
    base_url: String,
    probe_timeout: Duration,
    request_timeout: Duration,
}

impl StableDiffusionClient {
    /// Creates a client from backend configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(url = %config.url))]
    pub fn new(config: &BackendConfig) -> MangakaResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            probe_timeout: config.probe_timeout(),
            request_timeout: config.request_timeout(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn decode_first_image(response: Txt2ImgResponse) -> MangakaResult<Vec<u8>> {
        let first = response
            .images
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::new(BackendErrorKind::EmptyResponse))?;

        // Some builds prefix a data URL header
        let payload = match first.split_once(',') {
            Some((header, data)) if header.starts_with("data:") => data,
            _ => first.as_str(),
        };

        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|e| BackendError::new(BackendErrorKind::Decode(e.to_string())))?;
        Ok(bytes)
    }
}

#[async_trait]
impl ImageBackend for StableDiffusionClient {
    #[instrument(skip(self), fields(url = %self.base_url))]
    async fn probe(&self) -> BackendStatus {
        let url = format!("{}{}", self.base_url, PING_PATH);

        match self
            .client
            .get(&url)
            .timeout(self.probe_timeout)
            .send()
            .await
        {
            Ok(response) if response.status() == reqwest::StatusCode::OK => {
                debug!("Backend answered probe");
                BackendStatus::Available
            }
            Ok(response) => {
                let reason = format!("probe returned HTTP {}", response.status().as_u16());
                warn!(%reason, "Backend probe failed");
                BackendStatus::Unavailable { reason }
            }
            Err(e) => {
                let reason = format!("probe failed: {}", e);
                warn!(%reason, "Backend probe failed");
                BackendStatus::Unavailable { reason }
            }
        }
    }

    #[instrument(skip(self, request), fields(url = %self.base_url, prompt_len = request.prompt.len()))]
    async fn txt2img(&self, request: &Txt2ImgRequest) -> MangakaResult<Vec<u8>> {
        let url = format!("{}{}", self.base_url, TXT2IMG_PATH);
        debug!("Sending txt2img request");

        let response = self
            .client
            .post(&url)
            .timeout(self.request_timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| BackendError::new(BackendErrorKind::Request(e.to_string())))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|i| body.is_char_boundary(*i))
                    .unwrap_or(0);
                body.truncate(cut);
            }
            return Err(BackendError::new(BackendErrorKind::Status { status, body }).into());
        }

        let text = response
            .text()
            .await
            .map_err(|e| BackendError::new(BackendErrorKind::Request(e.to_string())))?;
        let parsed: Txt2ImgResponse = serde_json::from_str(&text)
            .map_err(|e| BackendError::new(BackendErrorKind::Decode(e.to_string())))?;

        let bytes = Self::decode_first_image(parsed)?;
        debug!(size = bytes.len(), "Decoded backend image");
        Ok(bytes)
    }

    fn backend_name(&self) -> &'static str {
        "stable-diffusion"
    }
}
