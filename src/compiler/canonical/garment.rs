use super::AxisContext;
use crate::compiler::OutfitHeuristics;
use crate::compiler::clauses::{Axis, ClauseSet};
use crate::normalize::{Category, ModelType, NormalizedInput};
use tracing::trace;

const FIDELITY_LOCK: &[&str] = &[
    "exact garment from reference image",
    "preserve original garment color",
    "no color reinterpretation",
    "no hue shift",
    "preserve original fabric texture",
    "visible fabric weave",
    "retain fabric grain",
    "no fabric smoothing",
];

const GARMENT_NEGATIVES: &[&str] = &[
    "missing bottom garment",
    "incomplete outfit",
    "exposed underwear",
    "naked lower body",
    "fabric smoothing",
    "plastic fabric",
    "washed fabric detail",
    "synthetic texture",
    "blurred fabric",
    "color shift",
    "hue change",
];

/// How the rest of the outfit is filled in around the reference product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutfitPolicy {
    /// Both product images are worn as-is.
    FromReferences,
    /// Top plus footwear supplied; the bottom is always jeans.
    JeansWithFootwear,
    /// Footwear supplied; top and bottom are synthesized to match it.
    MatchFootwear,
    /// A women's top supplied alone; bottom and footwear match its color and style.
    MatchTop,
    Complementary,
}

impl OutfitPolicy {
    /// Picks the first policy that applies, or `None` when no outfit needs completing.
    pub fn select(
        input: &NormalizedInput,
        garment: &str,
        heuristics: &OutfitHeuristics,
    ) -> Option<Self> {
        let female_fashion = input.category == Some(Category::Fashion)
            && input.model_type == Some(ModelType::Female);
        let worn_by_human = input.has_subject && input.has_human;

        if heuristics.optional_subject_is_footwear
            && female_fashion
            && worn_by_human
            && input.has_optional_subject
        {
            return Some(OutfitPolicy::JeansWithFootwear);
        }
        if input.has_subject && input.has_optional_subject {
            return Some(OutfitPolicy::FromReferences);
        }
        if !worn_by_human {
            return None;
        }
        if is_footwear(input, garment) {
            Some(OutfitPolicy::MatchFootwear)
        } else if female_fashion && !input.has_optional_subject {
            Some(OutfitPolicy::MatchTop)
        } else {
            Some(OutfitPolicy::Complementary)
        }
    }

    fn clauses(self) -> &'static [&'static str] {
        match self {
            OutfitPolicy::FromReferences => &[
                "complete outfit from reference",
                "wearing matching bottom garment from reference",
                "wearing footwear from reference",
                "full outfit visible from reference images",
            ],
            OutfitPolicy::JeansWithFootwear => &[
                "complete outfit with jeans bottom garment",
                "wearing blue denim jeans",
                "wearing jeans that match the top garment style",
                "wearing appropriate footwear that matches the outfit",
                "full outfit visible",
                "jeans complement the reference top garment",
                "footwear complements the reference top garment",
                "jeans style coordinates with top garment",
                "jeans color coordinates with top garment",
            ],
            OutfitPolicy::MatchFootwear => &[
                "complete outfit with appropriate matching top garment",
                "wearing appropriate top that matches the footwear",
                "wearing appropriate matching bottom garment",
                "wearing appropriate lower garment that matches the footwear",
                "full outfit visible",
                "top garment complements the reference footwear",
                "bottom garment complements the reference footwear",
            ],
            OutfitPolicy::MatchTop => &[
                "complete outfit with matching bottom garment",
                "wearing bottom garment that matches the top garment color",
                "wearing bottom garment that matches the top garment style",
                "wearing bottom garment that complements the reference top garment",
                "wearing shoes or sandals",
                "wearing footwear that matches the outfit",
                "wearing appropriate footwear that complements the outfit",
                "full outfit visible",
                "bottom garment color coordinates with top garment",
                "bottom garment style coordinates with top garment",
                "bottom garment fabric coordinates with top garment",
                "footwear complements the reference top garment",
                "footwear style coordinates with top garment",
                "footwear color coordinates with outfit",
            ],
            OutfitPolicy::Complementary => &[
                "complete outfit with appropriate matching garments",
                "wearing appropriate top garment that complements the reference",
                "wearing appropriate bottom garment that complements the reference",
                "wearing appropriate footwear that matches the outfit",
                "full outfit visible",
                "all garments complement each other and the reference product",
            ],
        }
    }
}

fn is_footwear(input: &NormalizedInput, garment: &str) -> bool {
    input
        .category
        .as_ref()
        .is_some_and(Category::is_footwear)
        || ["footwear", "shoe", "sandal"]
            .iter()
            .any(|word| garment.contains(word))
}

pub(super) fn compose(ctx: &AxisContext<'_>, out: &mut ClauseSet) {
    let input = ctx.input;
    let Some(garment) = ctx.garment.as_deref() else {
        return;
    };
    if !(input.has_subject || input.has_optional_subject) {
        return;
    }

    out.push(Axis::Garment, format!("wearing {}", garment));
    out.extend(Axis::Garment, FIDELITY_LOCK);

    let policy = OutfitPolicy::select(input, garment, ctx.heuristics);
    trace!(?policy, "outfit completion");
    if let Some(policy) = policy {
        out.extend(Axis::Garment, policy.clauses());
    }
    out.negate_all(Axis::Garment, GARMENT_NEGATIVES);
}
