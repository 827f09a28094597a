use super::AxisContext;
use crate::compiler::clauses::{Axis, ClauseSet};
use crate::normalize::{Grip, Interaction, ModelType, Pose};
use crate::translate::describe;
use tracing::trace;

const HUMAN_REALISM: &[&str] = &[
    "real human model",
    "lifelike appearance",
    "natural body proportion",
    "natural body posture",
    "relaxed natural pose",
    "organic body movement",
    "natural human expression",
    "not mannequin",
    "not doll-like",
    "not statue-like",
    "living person",
    "breathing human",
    "natural skin texture",
    "realistic human anatomy",
];

const PRODUCT_PLACEMENT: &[&str] = &["product placement", "no human model"];
const NO_BODY_PARTS: &[&str] = &["no hands", "no feet", "no human body parts"];
const PRODUCT_FRAMING: &[&str] = &[
    "balanced composition",
    "product clearly visible",
    "full product in frame",
];

pub(super) fn compose(ctx: &AxisContext<'_>, out: &mut ClauseSet) {
    let input = ctx.input;
    if input.has_human {
        out.extend(Axis::Subject, HUMAN_REALISM);
        return;
    }

    match &ctx.garment {
        Some(garment) => out.push(Axis::Subject, format!("{} product", garment)),
        None => out.push(Axis::Subject, "product"),
    }

    match &input.interaction {
        Some(interaction) if *interaction != Interaction::NoInteraction => {
            if let Some(descriptor) = describe(ctx.translator, interaction.label()) {
                out.push(Axis::Subject, descriptor.to_lowercase());
            }
        }
        // No selection at all is treated like an explicit "no interaction".
        _ => {
            out.extend(Axis::Subject, PRODUCT_PLACEMENT);
            out.negate_all(Axis::Subject, NO_BODY_PARTS);
        }
    }

    match input.pose.as_ref().and_then(Pose::label) {
        Some(label) => {
            if let Some(descriptor) = describe(ctx.translator, label) {
                out.push(Axis::Subject, descriptor.to_lowercase());
            }
        }
        None => {
            if let Some(custom) = &input.custom.pose {
                out.push(Axis::Subject, custom.to_lowercase());
            }
        }
    }

    out.extend(Axis::Subject, PRODUCT_FRAMING);
}

const SWEATER: &[&str] = &[
    "female model wearing a high-quality oversized cream cashmere sweater",
    "long sleeves partially covering the hands",
    "soft fabric texture with visible knit patterns",
    "sleeves providing a cozy and warm aesthetic",
    "soft natural lighting catching the fabric fibers",
];

const HANDS_ONLY: &[&str] = &[
    "reaching from the bottom center of the frame",
    "palm facing upwards to support the product",
    "hand gently cradling the product",
    "hands only",
    "no feet",
    "no legs",
    "no shoes worn on feet",
    "realistic skin texture",
    "natural skin tone",
    "lifelike hand anatomy",
    "visible skin pores",
    "natural finger proportions",
    "no full body",
    "no face visible",
];

const SINGLE_HAND: &[&str] = &["single hand only", "one hand holding product"];
const SINGLE_HAND_NEGATIVES: &[&str] = &["two hands", "both hands"];
const SINGLE_SANDAL: &[&str] = &[
    "single hand holding a single sandal",
    "clean single-sandal presentation",
    "focus on stitching, logo, and material texture",
    "no second sandal in the hand",
];
const SINGLE_SANDAL_NEGATIVES: &[&str] =
    &["two sandals in one hand", "crowded grip", "mismatched shoes"];

const TWO_HANDS: &[&str] = &[
    "two hands only",
    "both hands holding product",
    "symmetrical hand placement",
    "both hands visible",
    "balanced grip",
    "gently cradling with both hands",
    "cupping the product",
    "hands meeting at the center",
    "arms reaching from the bottom corners",
    "sleeves covering both wrists",
    "fingers wrapped naturally around the edges",
    "thumbs visible on top",
];
const TWO_HANDS_NEGATIVES: &[&str] = &["single hand", "one hand only"];
const MATCHED_PAIR: &[&str] = &[
    "both hands holding a pair of sandals/shoes",
    "matched pair, both shoes visible",
];
const MATCHED_PAIR_NEGATIVES: &[&str] = &["single shoe", "missing pair", "mismatched shoes"];

const HAND_LIMB_NEGATIVES: &[&str] = &[
    "extra hands",
    "extra fingers",
    "extra legs",
    "extra feet",
    "detached limbs",
    "floating limbs",
];

const LONG_PANTS: &[&str] = &["straight-leg jeans", "denim straight-leg pants"];
const LONG_PANTS_NEGATIVES: &[&str] = &["bare legs", "bare skin legs", "shorts", "mini skirt"];

const FEET_ONLY: &[&str] = &[
    "feet only",
    "no hands",
    "realistic skin texture",
    "natural skin tone",
    "lifelike foot anatomy",
    "visible skin pores",
    "natural foot proportions",
    "no full body",
    "no face visible",
];
const FOOT_LIMB_NEGATIVES: &[&str] = &[
    "extra feet",
    "extra legs",
    "extra hands",
    "detached limbs",
    "floating limbs",
];

/// Hand and foot framing. Applies to every subject kind.
pub(super) fn compose_interaction(ctx: &AxisContext<'_>, out: &mut ClauseSet) {
    let input = ctx.input;
    let female_model = matches!(input.model_type, Some(ModelType::Female));
    let footwear = input
        .category
        .as_ref()
        .is_some_and(|category| category.is_footwear());

    match &input.interaction {
        Some(Interaction::Hand { grip, female, .. }) => {
            trace!(?grip, footwear, "hand interaction");
            if *female || female_model {
                out.extend(Axis::Interaction, SWEATER);
            }
            out.extend(Axis::Interaction, HANDS_ONLY);
            match grip {
                Grip::Single => {
                    out.extend(Axis::Interaction, SINGLE_HAND);
                    out.negate_all(Axis::Interaction, SINGLE_HAND_NEGATIVES);
                    if footwear {
                        out.extend(Axis::Interaction, SINGLE_SANDAL);
                        out.negate_all(Axis::Interaction, SINGLE_SANDAL_NEGATIVES);
                    }
                }
                Grip::Double => {
                    out.extend(Axis::Interaction, TWO_HANDS);
                    out.negate_all(Axis::Interaction, TWO_HANDS_NEGATIVES);
                    if footwear {
                        out.extend(Axis::Interaction, MATCHED_PAIR);
                        out.negate_all(Axis::Interaction, MATCHED_PAIR_NEGATIVES);
                    }
                }
                Grip::Unspecified => {}
            }
            out.negate_all(Axis::Interaction, HAND_LIMB_NEGATIVES);
        }
        Some(Interaction::Foot { female, .. }) => {
            trace!("foot interaction");
            if *female || female_model {
                out.extend(Axis::Interaction, LONG_PANTS);
                out.negate_all(Axis::Interaction, LONG_PANTS_NEGATIVES);
            }
            out.extend(Axis::Interaction, FEET_ONLY);
            out.negate_all(Axis::Interaction, FOOT_LIMB_NEGATIVES);
        }
        _ => {}
    }
}
