use super::AxisContext;
use crate::compiler::clauses::{Axis, ClauseSet};
use crate::normalize::{Background, Lighting};
use crate::translate::describe;

// The background plate is always the second reference image in the request.
const BACKGROUND_PLATE: &[&str] = &[
    "second reference image is background environment",
    "use second reference image as static background",
    "background from second reference image must be used exactly",
    "static background environment from second reference image",
    "background not reinterpreted",
    "background unchanged from second reference image",
    "background is the scene environment",
    "composite subject onto uploaded background from second reference image",
    "subject placed on ground/surface of background from second reference image",
    "subject scale preserved relative to background from second reference image",
    "correct subject-to-background ratio",
    "realistic grounded shadow on background",
    "natural contact shadow on background surface",
    "shadow integration with background",
    "color temperature match with background",
    "background environment must be visible",
    "use entire background from reference image",
    "do not crop or modify background",
    "preserve background composition exactly",
    "background is critical for scene composition",
    "background defines the entire environment",
];

const STUDIO_BACKDROP: &[&str] = &[
    "neutral studio backdrop",
    "plain background",
    "no background stylization",
];

const BACKGROUND_NEGATIVES: &[&str] = &[
    "floating subject",
    "scale mismatch",
    "incorrect subject-to-background ratio",
    "detached shadow",
    "distorted proportions",
    "incorrect shadow direction",
    "unrealistic lighting",
    "fake lighting",
];

const DEFAULT_LIGHTING: &[&str] = &[
    "soft natural lighting",
    "balanced exposure",
    "no dramatic lighting",
    "no cinematic lighting",
];

const LIGHTING_NEGATIVES: &[&str] = &[
    "dramatic lighting",
    "cinematic light",
    "harsh shadow",
    "oversoft lighting",
    "glow effect",
];

pub(super) fn compose_background(ctx: &AxisContext<'_>, out: &mut ClauseSet) {
    let input = ctx.input;
    if input.use_background {
        out.extend(Axis::Background, BACKGROUND_PLATE);
    } else if let Some(custom) = &input.custom.background {
        out.push(Axis::Background, format!("background: {}", custom.to_lowercase()));
    } else {
        let named = match &input.background {
            Some(Background::Named(label)) => describe(ctx.translator, label),
            _ => None,
        };
        match named {
            Some(descriptor) => out.push(
                Axis::Background,
                format!("background: {}", descriptor.to_lowercase()),
            ),
            None => out.extend(Axis::Background, STUDIO_BACKDROP),
        }
    }
    out.negate_all(Axis::Background, BACKGROUND_NEGATIVES);
}

pub(super) fn compose_lighting(ctx: &AxisContext<'_>, out: &mut ClauseSet) {
    let input = ctx.input;
    match &input.lighting {
        Some(Lighting::Named(label)) => {
            // An unmapped preset contributes nothing rather than leaking the raw label.
            if let Some(descriptor) = describe(ctx.translator, label) {
                let lower = descriptor.to_lowercase();
                if ["daylight", "natural", "window"]
                    .iter()
                    .any(|word| lower.contains(word))
                {
                    out.push(Axis::Lighting, "soft natural lighting");
                } else {
                    out.push(Axis::Lighting, format!("lighting: {}", lower));
                }
            }
        }
        Some(Lighting::Custom) | None => match &input.custom.lighting {
            Some(custom) => out.push(Axis::Lighting, format!("lighting: {}", custom.to_lowercase())),
            None => out.extend(Axis::Lighting, DEFAULT_LIGHTING),
        },
    }
    out.negate_all(Axis::Lighting, LIGHTING_NEGATIVES);
}
