use serde::{Deserialize, Serialize};

/// An opaque reference image payload. The compiler never inspects the pixels.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInput {
    pub base64: String,
    pub mime_type: String,
}

impl ImageInput {
    pub fn new(base64: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            base64: base64.into(),
            mime_type: mime_type.into(),
        }
    }

    /// True when the payload carries no image data.
    pub fn is_empty(&self) -> bool {
        self.base64.is_empty()
    }
}

/// The photography mode as selected in the UI, before `auto` is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestedMode {
    #[default]
    Auto,
    Catalog,
    Lifestyle,
}

/// Everything the capture layer collected for one generation, verbatim.
///
/// Descriptive fields hold the UI labels exactly as they were selected
/// (mostly Indonesian). `subject_image` is always supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGenerationInput {
    pub subject_image: ImageInput,
    pub background_image: Option<ImageInput>,
    pub optional_subject_image: Option<ImageInput>,

    pub mode: RequestedMode,

    pub category: Option<String>,
    pub style: Option<String>,
    pub lighting: Option<String>,
    pub camera_angle: Option<String>,
    pub pose: Option<String>,
    pub aspect_ratio: Option<String>,
    pub background: Option<String>,

    pub model_type: Option<String>,
    pub interaction_type: Option<String>,
    pub custom_style_prompt: Option<String>,
    pub custom_pose_prompt: Option<String>,
    pub custom_background_prompt: Option<String>,
    pub custom_lighting_prompt: Option<String>,
}

impl RawGenerationInput {
    /// Creates an input with only the mandatory subject image and `auto` mode.
    pub fn new(subject_image: ImageInput) -> Self {
        Self {
            subject_image,
            ..Self::default()
        }
    }
}
