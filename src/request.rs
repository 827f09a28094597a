//! The downstream generation payload. Assembled here, sent elsewhere.

use crate::compiler::{PromptMetadata, PromptOutput};
use crate::input::{ImageInput, RawGenerationInput};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_MODEL: &str = "fal-ai/flux-2/lora/edit";
pub const DEFAULT_IMAGE_SIZE: &str = "square_hd";

/// Sampling parameters for the generation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub model: String,
    pub image_strength: f64,
    pub num_inference_steps: u32,
    pub guidance_scale: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            image_strength: 0.67,
            num_inference_steps: 24,
            guidance_scale: 4.5,
        }
    }
}

/// Maps a UI aspect-ratio label to the engine's size preset.
pub fn image_size_for(aspect_ratio: Option<&str>) -> &'static str {
    match aspect_ratio {
        Some("1:1" | "1:1 (Square)") => "square_hd",
        Some("4:5" | "4:5 (Portrait)" | "3:4" | "3:4 (Portrait)" | "2:3" | "2:3 (Portrait)") => {
            "portrait_4_3"
        }
        Some("16:9" | "16:9 (Landscape)") => "landscape_16_9",
        Some("4:3") => "landscape_4_3",
        Some("9:16" | "9:16 (Story)") => "portrait_9_16",
        _ => DEFAULT_IMAGE_SIZE,
    }
}

/// What a reference image slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceRole {
    Subject,
    Background,
    OptionalSubject,
    Face,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceImage {
    pub role: ReferenceRole,
    #[serde(flatten)]
    pub image: ImageInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub negative_prompt: String,
    pub model: String,
    pub image_strength: f64,
    pub num_inference_steps: u32,
    pub guidance_scale: f64,
    pub image_size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PromptMetadata>,
    /// Slot order is subject, background, then the optional subject or the face.
    pub reference_images: Vec<ReferenceImage>,
}

impl GenerationRequest {
    /// Builds the payload. Empty images never occupy a slot, and the face only
    /// takes the third slot when no optional subject image was supplied.
    pub fn assemble(
        raw: &RawGenerationInput,
        face_image: Option<&ImageInput>,
        output: PromptOutput,
        settings: &EngineSettings,
    ) -> Self {
        let present = |image: Option<&ImageInput>| image.filter(|image| !image.is_empty()).cloned();

        let mut reference_images = Vec::with_capacity(3);
        if let Some(image) = present(Some(&raw.subject_image)) {
            reference_images.push(ReferenceImage {
                role: ReferenceRole::Subject,
                image,
            });
        }
        if let Some(image) = present(raw.background_image.as_ref()) {
            reference_images.push(ReferenceImage {
                role: ReferenceRole::Background,
                image,
            });
        }
        let third = match present(raw.optional_subject_image.as_ref()) {
            Some(image) => Some(ReferenceImage {
                role: ReferenceRole::OptionalSubject,
                image,
            }),
            None => present(face_image).map(|image| ReferenceImage {
                role: ReferenceRole::Face,
                image,
            }),
        };
        reference_images.extend(third);

        let aspect_ratio = raw.aspect_ratio.clone().filter(|ratio| !ratio.is_empty());
        let image_size = image_size_for(aspect_ratio.as_deref()).to_string();
        debug!(
            slots = reference_images.len(),
            %image_size,
            model = %settings.model,
            "assembled generation request"
        );

        Self {
            prompt: output.positive_prompt,
            negative_prompt: output.negative_prompt,
            model: settings.model.clone(),
            image_strength: settings.image_strength,
            num_inference_steps: settings.num_inference_steps,
            guidance_scale: settings.guidance_scale,
            image_size,
            aspect_ratio,
            metadata: output.metadata,
            reference_images,
        }
    }
}
