use super::conversion::IntoGenerationInput;
use super::definition::{ImageInput, RawGenerationInput, RequestedMode};
use crate::error::ConversionError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static DATA_URL_MIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"data:([^;]+);").expect("valid mime regex"));

const DEFAULT_MIME: &str = "image/jpeg";

/// The older flat generation form, where images arrive as data URLs and the
/// human/product decision is an explicit content type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyGenerationForm {
    pub content_type: String,
    pub model_type: String,
    pub category: String,
    pub style: String,
    pub lighting: String,
    pub camera_angle: String,
    pub pose: String,
    pub aspect_ratio: String,
    pub background: String,
    pub interaction_type: String,
    pub custom_style_prompt: String,
    pub custom_pose_prompt: String,
    pub custom_background_prompt: String,
    pub custom_lighting_prompt: String,

    pub product_image: Option<String>,
    pub second_product_image: Option<String>,
    pub background_image: Option<String>,
}

impl IntoGenerationInput for LegacyGenerationForm {
    fn into_generation_input(self) -> Result<RawGenerationInput, ConversionError> {
        let subject_image = self
            .product_image
            .as_deref()
            .map(image_from_data_url)
            .filter(|image| !image.is_empty())
            .ok_or(ConversionError::MissingSubject)?;

        let mode = match self.style.as_str() {
            "Lifestyle" => RequestedMode::Lifestyle,
            "Studio Clean" => RequestedMode::Catalog,
            _ => RequestedMode::Auto,
        };

        let model_type = if self.content_type == "Model" {
            let model_type = non_empty(self.model_type).ok_or_else(|| {
                ConversionError::ValidationError(
                    "model content requires a model type".to_string(),
                )
            })?;
            Some(model_type)
        } else {
            None
        };

        Ok(RawGenerationInput {
            subject_image,
            background_image: self.background_image.as_deref().map(image_from_data_url),
            optional_subject_image: self.second_product_image.as_deref().map(image_from_data_url),
            mode,
            category: non_empty(self.category),
            style: non_empty(self.style),
            lighting: non_empty(self.lighting),
            camera_angle: non_empty(self.camera_angle),
            pose: non_empty(self.pose),
            aspect_ratio: non_empty(self.aspect_ratio),
            background: non_empty(self.background),
            model_type,
            interaction_type: non_empty(self.interaction_type),
            custom_style_prompt: non_empty(self.custom_style_prompt),
            custom_pose_prompt: non_empty(self.custom_pose_prompt),
            custom_background_prompt: non_empty(self.custom_background_prompt),
            custom_lighting_prompt: non_empty(self.custom_lighting_prompt),
        })
    }
}

/// Splits a `data:<mime>;base64,<payload>` URL. Bare payloads keep the default MIME type.
pub fn image_from_data_url(data_url: &str) -> ImageInput {
    let base64 = match data_url.find(',') {
        Some(index) => &data_url[index + 1..],
        None => data_url,
    };
    let mime_type = DATA_URL_MIME
        .captures(data_url)
        .and_then(|caps| caps.get(1))
        .map_or(DEFAULT_MIME, |m| m.as_str());
    ImageInput::new(base64, mime_type)
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_data_url() {
        let image = image_from_data_url("data:image/png;base64,AAAA");
        assert_eq!(image.base64, "AAAA");
        assert_eq!(image.mime_type, "image/png");
    }

    #[test]
    fn blank_fields_become_absent() {
        assert_eq!(non_empty("   ".to_string()), None);
        assert_eq!(non_empty(" Wanita ".to_string()).as_deref(), Some("Wanita"));
    }

    #[test]
    fn bare_payload_defaults_to_jpeg() {
        let image = image_from_data_url("QkFTRTY0");
        assert_eq!(image.base64, "QkFTRTY0");
        assert_eq!(image.mime_type, "image/jpeg");
    }
}
