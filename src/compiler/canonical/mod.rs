//! The canonical revision.
//!
//! Axes run in a fixed order: base style, subject and interaction, face,
//! pose script, garment, background, lighting, safety net. Earlier axes set the
//! scene and later ones narrow it, so the order must not change.

use super::clauses::{Axis, ClauseSet, PromptMetadata};
use super::{CompileContext, OutfitHeuristics, PromptRevision};
use crate::normalize::NormalizedInput;
use crate::translate::{Translator, describe};
use tracing::trace;

mod face;
mod garment;
mod scene;
mod subject;

pub use face::{FaceMode, ModelProfile, model_profile};
pub use garment::OutfitPolicy;

pub const ENGINE: &str = "flux-2";
pub const VERSION: &str = "v2";

const BASE_STYLE: &[&str] = &[
    "professional ecommerce catalog photography",
    "photorealistic",
    "commercial ready",
    "no stylization",
    "no artistic interpretation",
];

const SAFETY_NET: &[&str] = &[
    "anime",
    "cartoon",
    "illustration",
    "stylized",
    "artistic",
    "unrealistic",
    "cgi",
    "mannequin",
    "manikin",
    "doll-like",
    "statue-like",
    "rigid pose",
    "stiff pose",
    "lifeless",
    "robotic",
    "artificial human",
    "fake human",
    "wax figure",
    "museum display",
    "posed mannequin",
    "store display mannequin",
    "unrealistic pose",
    "unnatural posture",
    "plastic appearance",
    "synthetic look",
];

/// Per-call view shared by every axis.
pub(crate) struct AxisContext<'a> {
    pub input: &'a NormalizedInput,
    pub translator: &'a dyn Translator,
    pub heuristics: &'a OutfitHeuristics,
    /// The translated category, lowercased. `None` when the category is absent or unmapped.
    pub garment: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Canonical;

impl PromptRevision for Canonical {
    fn compose(&self, ctx: &CompileContext<'_>) -> ClauseSet {
        let garment = ctx
            .input
            .category
            .as_ref()
            .and_then(|category| describe(ctx.translator, category.label()))
            .map(|descriptor| descriptor.to_lowercase());
        trace!(mode = %ctx.mode, ?garment, "composing canonical prompt");

        let axes = AxisContext {
            input: ctx.input,
            translator: ctx.translator,
            heuristics: ctx.heuristics,
            garment,
        };

        let mut out = ClauseSet::new();
        out.extend(Axis::BaseStyle, BASE_STYLE);
        subject::compose(&axes, &mut out);
        subject::compose_interaction(&axes, &mut out);
        face::compose(&axes, &mut out);
        face::compose_pose_script(&axes, &mut out);
        garment::compose(&axes, &mut out);
        scene::compose_background(&axes, &mut out);
        scene::compose_lighting(&axes, &mut out);
        out.negate_all(Axis::SafetyNet, SAFETY_NET);
        out
    }

    fn metadata(&self) -> Option<PromptMetadata> {
        Some(PromptMetadata {
            engine: ENGINE.to_string(),
            version: VERSION.to_string(),
        })
    }
}
