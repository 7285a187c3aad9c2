//! Request and response types for the text-to-image backend.

use crate::CompiledPrompt;
use serde::{Deserialize, Serialize};

/// Fixed sampling parameters sent with every generation request.
///
/// # Examples
///
/// ```
/// use mangaka_core::GenerationParams;
///
/// let params = GenerationParams::builder().steps(30u32).build().unwrap();
/// assert_eq!(params.steps, 30);
/// assert_eq!(params.width, 512);
/// assert_eq!(params.height, 768);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(default, setter(into))]
#[serde(default)]
pub struct GenerationParams {
    /// Denoising steps
    pub steps: u32,
    /// Classifier-free guidance scale
    pub cfg_scale: f32,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels (manga panel aspect)
    pub height: u32,
    /// Sampler name as understood by the backend
    pub sampler_name: String,
    /// Seed, `-1` for random
    pub seed: i64,
    /// Images per batch
    pub batch_size: u32,
    /// Number of batches
    pub n_iter: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            steps: 20,
            cfg_scale: 7.0,
            width: 512,
            height: 768,
            sampler_name: "DPM++ 2M Karras".to_string(),
            seed: -1,
            batch_size: 1,
            n_iter: 1,
        }
    }
}

impl GenerationParams {
    /// Creates a new parameter builder.
    pub fn builder() -> GenerationParamsBuilder {
        GenerationParamsBuilder::default()
    }
}

/// Body of a `txt2img` request.
///
/// # Examples
///
/// ```
/// use mangaka_core::{CompiledPrompt, GenerationParams, Txt2ImgRequest};
///
/// let prompt = CompiledPrompt::new("manga panel", "blurry");
/// let request = Txt2ImgRequest::new(&prompt, &GenerationParams::default());
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["prompt"], "manga panel");
/// assert_eq!(json["negative_prompt"], "blurry");
/// assert_eq!(json["height"], 768);
/// assert_eq!(json["sampler_name"], "DPM++ 2M Karras");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Txt2ImgRequest {
    /// Positive prompt
    pub prompt: String,
    /// Negative prompt
    pub negative_prompt: String,
    /// Sampling parameters, flattened into the request body
    #[serde(flatten)]
    pub params: GenerationParams,
}

impl Txt2ImgRequest {
    /// Combine a compiled prompt with sampling parameters.
    pub fn new(prompt: &CompiledPrompt, params: &GenerationParams) -> Self {
        Self {
            prompt: prompt.prompt.clone(),
            negative_prompt: prompt.negative_prompt.clone(),
            params: params.clone(),
        }
    }
}

/// Body of a `txt2img` response. Only the image list is read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Txt2ImgResponse {
    /// Base64-encoded images
    #[serde(default)]
    pub images: Vec<String>,
}
