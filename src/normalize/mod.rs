use crate::input::{ImageInput, RawGenerationInput};
use crate::mode::{Mode, resolve_photography_mode};
use tracing::debug;

pub mod variants;

pub use variants::*;

/// User-typed free text that overrides a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomPrompts {
    pub style: Option<String>,
    pub pose: Option<String>,
    pub background: Option<String>,
    pub lighting: Option<String>,
}

/// The backend-ready form of a `RawGenerationInput`.
///
/// Flags are derived purely from presence checks, labels are resolved into
/// closed variants, and `mode` is always concrete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput {
    pub has_subject: bool,
    pub has_background: bool,
    pub has_optional_subject: bool,
    /// Single source of truth for "a human subject is present": `model_type` was non-empty.
    pub has_human: bool,
    pub has_face_image: bool,
    pub is_product_only: bool,
    pub use_background: bool,

    pub mode: Mode,

    pub category: Option<Category>,
    pub style: Option<String>,
    pub lighting: Option<Lighting>,
    pub camera_angle: Option<String>,
    pub pose: Option<Pose>,
    pub aspect_ratio: Option<String>,
    pub background: Option<Background>,
    pub model_type: Option<ModelType>,
    pub interaction: Option<Interaction>,
    pub custom: CustomPrompts,
}

/// Normalizes raw UI input. Total: absent fields simply become `false`/`None`.
///
/// `has_face_image` is computed by the capture layer. Callers must only set it
/// when a human subject is present; that pairing is not re-validated here.
pub fn normalize(raw: &RawGenerationInput, has_face_image: bool) -> NormalizedInput {
    let has_subject = !raw.subject_image.is_empty();
    let has_background = is_present(raw.background_image.as_ref());
    let has_optional_subject = is_present(raw.optional_subject_image.as_ref());
    let has_human = label(&raw.model_type).is_some();

    // Mode stays provisional until the resolver has seen the rest of the record.
    let mut normalized = NormalizedInput {
        has_subject,
        has_background,
        has_optional_subject,
        has_human,
        has_face_image,
        is_product_only: !has_human,
        use_background: has_background,
        mode: Mode::Catalog,
        category: label(&raw.category).map(Category::parse),
        style: label(&raw.style).map(str::to_string),
        lighting: label(&raw.lighting).map(Lighting::parse),
        camera_angle: label(&raw.camera_angle).map(str::to_string),
        pose: label(&raw.pose).map(Pose::parse),
        aspect_ratio: label(&raw.aspect_ratio).map(str::to_string),
        background: label(&raw.background).map(Background::parse),
        model_type: label(&raw.model_type).map(ModelType::parse),
        interaction: label(&raw.interaction_type).map(Interaction::parse),
        custom: CustomPrompts {
            style: label(&raw.custom_style_prompt).map(str::to_string),
            pose: label(&raw.custom_pose_prompt).map(str::to_string),
            background: label(&raw.custom_background_prompt).map(str::to_string),
            lighting: label(&raw.custom_lighting_prompt).map(str::to_string),
        },
    };
    normalized.mode = resolve_photography_mode(&normalized, raw.mode);

    debug!(
        has_subject,
        has_background,
        has_optional_subject,
        has_human,
        has_face_image,
        mode = %normalized.mode,
        "normalized generation input"
    );
    normalized
}

fn is_present(image: Option<&ImageInput>) -> bool {
    image.is_some_and(|image| !image.is_empty())
}

/// Trimmed text, or `None` when nothing but whitespace was typed.
fn label(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
