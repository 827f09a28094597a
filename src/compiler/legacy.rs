//! The first-generation revision.
//!
//! Coarse, mode-sensitive axes with a fixed negative list and no metadata. Kept
//! separate from the canonical branches so the two never drift into each other.

use super::clauses::{Axis, ClauseSet, PromptMetadata};
use super::{CompileContext, PromptRevision};
use crate::mode::Mode;
use crate::normalize::{Interaction, Lighting, Pose};
use crate::translate::{Translator, describe};
use itertools::Itertools;
use tracing::trace;

const CUSTOM_STYLE_LABEL: &str = "Custom";

const NEGATIVES: &[&str] = &[
    "plastic skin",
    "artificial smoothness",
    "airbrushed",
    "CGI",
    "3d render",
    "cartoon",
    "anime",
    "illustration",
    "sketch",
    "blurry",
    "low resolution",
    "distorted hands",
    "extra fingers",
    "mutated fingers",
    "fused fingers",
    "deformed anatomy",
    "bad proportions",
    "double heads",
    "cloned face",
    "unnatural eyes",
    "watermark",
    "text",
    "signature",
    "grainy",
    "low quality",
    "overexposed",
    "messy background elements",
    "floating products",
    "disconnected limbs",
    "scale mismatch",
    "incorrect perspective",
    "unrealistic shadows",
    "floating objects",
    "composition errors",
    "hallucinated elements",
    "added objects",
    "removed objects",
    "perspective distortion",
    "fabric smoothing",
    "fabric blur",
    "plastic fabric",
    "synthetic texture",
    "over-smoothed cloth",
    "washed fabric detail",
];

const BACKGROUND_PLATE: &[&str] = &[
    "static background environment, subject composited onto uploaded background",
    "preserve subject scale relative to background, maintain correct perspective and proportions",
    "realistic shadow grounding, subject casts shadow onto background surface, shadow matches lighting direction",
    "subject placed on ground/surface of background with shadow integration and color matching",
    "background remains unchanged, static reference, no compositional changes",
];

const PRODUCT_FIDELITY: &[&str] = &[
    "preserve original fabric texture",
    "visible knit pattern",
    "no smoothing on fabric",
    "retain original fabric grain",
    "fabric texture from reference image",
    "preserve original garment color",
    "no color reinterpretation",
    "no hue shift",
    "match reference garment color exactly",
];

const FACE_FIDELITY: &[&str] = &[
    "face reference is identity locked",
    "do not alter facial structure",
    "do not beautify face",
    "no facial reshaping",
    "no face regeneration",
];

const LIFESTYLE_REALISM: &str = "natural everyday context, realistic product usage, honest photography, product visually dominant, no compositional hallucination";
const CATALOG_REALISM: &str = "catalog photography, natural skin texture with subtle imperfections, realistic fabric and material, no beauty retouching, no artificial smoothing, no CGI, commercial-ready, strict reference fidelity";
const SHADOW_GROUNDING: &str =
    "realistic shadow grounding, subject connected to surface, no floating objects";

#[derive(Debug, Clone, Copy, Default)]
pub struct Legacy;

impl PromptRevision for Legacy {
    fn compose(&self, ctx: &CompileContext<'_>) -> ClauseSet {
        trace!(mode = %ctx.mode, "composing legacy prompt");
        let mut out = ClauseSet::new();
        style(ctx, &mut out);
        subject(ctx, &mut out);
        interaction(ctx, &mut out);
        background(ctx, &mut out);
        lighting(ctx, &mut out);
        camera_angle(ctx, &mut out);
        reference_fidelity(ctx, &mut out);
        realism(ctx, &mut out);
        aspect_ratio(ctx, &mut out);
        out.negate_all(Axis::SafetyNet, NEGATIVES);
        out
    }

    fn metadata(&self) -> Option<PromptMetadata> {
        None
    }
}

fn lifestyle(ctx: &CompileContext<'_>) -> bool {
    ctx.mode == Mode::Lifestyle
}

fn style(ctx: &CompileContext<'_>, out: &mut ClauseSet) {
    let input = ctx.input;
    match input.style.as_deref() {
        Some(style) if style != CUSTOM_STYLE_LABEL => {
            if let Some(descriptor) = describe(ctx.translator, style) {
                out.push(
                    Axis::BaseStyle,
                    format!("professional {}", descriptor.to_lowercase()),
                );
            }
        }
        _ => match &input.custom.style {
            Some(custom) => out.push(
                Axis::BaseStyle,
                format!("professional {}", custom.to_lowercase()),
            ),
            None => out.push(Axis::BaseStyle, "professional photography"),
        },
    }
}

fn subject(ctx: &CompileContext<'_>, out: &mut ClauseSet) {
    let input = ctx.input;
    let translator: &dyn Translator = ctx.translator;

    if input.is_product_only {
        match &input.category {
            Some(category) => out.push(
                Axis::Subject,
                format!("{} product", translator.translate(category.label()).to_lowercase()),
            ),
            None => out.push(Axis::Subject, "product"),
        }
        return;
    }

    if let Some(model_type) = &input.model_type {
        out.push(Axis::Subject, translator.translate(model_type.label()));
    }
    if let Some(category) = &input.category {
        out.push(
            Axis::Subject,
            format!("{} category", translator.translate(category.label()).to_lowercase()),
        );
    }

    let pose = match input.pose.as_ref().and_then(Pose::label) {
        Some(label) => describe(translator, label).map(|descriptor| descriptor.to_lowercase()),
        None => input.custom.pose.as_ref().map(|custom| custom.to_lowercase()),
    };
    if let Some(pose) = pose {
        if lifestyle(ctx) {
            out.push(Axis::Subject, format!("{}, natural posture", pose));
        } else {
            out.push(Axis::Subject, pose);
        }
    }
}

fn interaction(ctx: &CompileContext<'_>, out: &mut ClauseSet) {
    let input = ctx.input;
    match &input.interaction {
        Some(Interaction::NoInteraction) => {
            if input.is_product_only {
                out.push(Axis::Interaction, "product placement");
            }
        }
        Some(interaction) => {
            if let Some(descriptor) = describe(ctx.translator, interaction.label()) {
                let descriptor = descriptor.to_lowercase();
                if lifestyle(ctx) {
                    out.push(Axis::Interaction, format!("{}, practical usage", descriptor));
                } else {
                    out.push(Axis::Interaction, descriptor);
                }
            }
        }
        None => {}
    }
}

fn background(ctx: &CompileContext<'_>, out: &mut ClauseSet) {
    let input = ctx.input;
    if input.use_background {
        out.extend(Axis::Background, BACKGROUND_PLATE);
    } else if let Some(custom) = &input.custom.background {
        out.push(Axis::Background, format!("background: {}", custom.to_lowercase()));
    } else if let Some(category) = input.category.as_ref().filter(|_| lifestyle(ctx)) {
        let descriptor = ctx.translator.translate(category.label());
        out.push(
            Axis::Background,
            format!("natural everyday setting, {} context", descriptor.to_lowercase()),
        );
    }
}

fn lighting(ctx: &CompileContext<'_>, out: &mut ClauseSet) {
    let input = ctx.input;
    let everyday = lifestyle(ctx);
    match &input.lighting {
        Some(Lighting::Named(label)) => {
            if let Some(descriptor) = describe(ctx.translator, label) {
                let lower = descriptor.to_lowercase();
                let natural = ["daylight", "natural", "window"]
                    .iter()
                    .any(|word| lower.contains(word));
                if everyday && natural {
                    out.push(Axis::Lighting, format!("lighting: {}, realistic everyday", lower));
                } else {
                    out.push(Axis::Lighting, format!("lighting: {}", lower));
                }
            }
        }
        Some(Lighting::Custom) | None => {
            if let Some(custom) = &input.custom.lighting {
                let lower = custom.to_lowercase();
                if everyday {
                    out.push(Axis::Lighting, format!("lighting: {}, realistic everyday", lower));
                } else {
                    out.push(Axis::Lighting, format!("lighting: {}", lower));
                }
            } else if everyday {
                out.push(Axis::Lighting, "lighting: realistic daylight or soft indoor");
            }
        }
    }
}

fn camera_angle(ctx: &CompileContext<'_>, out: &mut ClauseSet) {
    if let Some(descriptor) = ctx
        .input
        .camera_angle
        .as_deref()
        .and_then(|angle| describe(ctx.translator, angle))
    {
        out.push(
            Axis::CameraAngle,
            format!("angle: {}", descriptor.to_lowercase()),
        );
    }
}

fn reference_fidelity(ctx: &CompileContext<'_>, out: &mut ClauseSet) {
    let input = ctx.input;
    let has_product = input.has_subject || input.has_optional_subject;
    let mut summary: Vec<&str> = Vec::new();

    if has_product {
        summary.push(
            "strict fidelity to product reference, maintain exact design, colors, textures, proportions",
        );
        out.extend(Axis::ReferenceFidelity, PRODUCT_FIDELITY);
    }
    if input.has_human {
        summary.push(
            "strict fidelity to facial reference, maintain exact features, skin tone, structure",
        );
        out.extend(Axis::ReferenceFidelity, FACE_FIDELITY);
    }
    if input.use_background {
        summary.push(
            "background reference as static environment, no compositional changes, preserve scale relationships",
        );
        if has_product {
            summary.push(
                "preserve subject scale relative to background, maintain correct size relationships",
            );
        }
    }

    if !summary.is_empty() {
        out.push(
            Axis::ReferenceFidelity,
            format!("reference fidelity: {}", summary.iter().join(", ")),
        );
    }
}

fn realism(ctx: &CompileContext<'_>, out: &mut ClauseSet) {
    let input = ctx.input;
    if lifestyle(ctx) {
        out.push(Axis::Realism, LIFESTYLE_REALISM);
    } else {
        out.push(Axis::Realism, CATALOG_REALISM);
    }
    if input.use_background || input.has_subject || input.has_human {
        out.push(Axis::Realism, SHADOW_GROUNDING);
    }
}

fn aspect_ratio(ctx: &CompileContext<'_>, out: &mut ClauseSet) {
    if let Some(descriptor) = ctx
        .input
        .aspect_ratio
        .as_deref()
        .and_then(|ratio| describe(ctx.translator, ratio))
    {
        out.push(Axis::AspectRatio, format!("format: {}", descriptor));
    }
}
