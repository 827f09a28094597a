//! Face and identity axis, including the special pose scripts.

use super::AxisContext;
use crate::compiler::clauses::{Axis, ClauseSet};
use crate::normalize::{ModelType, PoseScript};
use tracing::trace;

/// How the face axis treats the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceMode {
    /// A face reference exists; the output must reproduce it exactly.
    IdentityLock,
    /// No face reference; a face is generated from the model type.
    Synthesize,
}

/// Per-model-type clauses shared by both face modes.
pub struct ModelProfile {
    /// Generated-face descriptors, used only when synthesizing.
    pub face: &'static [&'static str],
    pub face_negatives: &'static [&'static str],
    pub pose_tone: &'static [&'static str],
    pub pose_negatives: &'static [&'static str],
    /// Extra composition clauses appended after the pose tone under an identity lock.
    pub lock_composition: &'static [&'static str],
}

const FEMALE: ModelProfile = ModelProfile {
    face: &[
        "natural female face",
        "feminine facial features",
        "natural female facial structure",
        "realistic female appearance",
        "natural female skin texture",
        "feminine facial proportions",
        "natural female expression",
    ],
    face_negatives: &["masculine face", "male features", "manly appearance"],
    pose_tone: &[
        "feminine pose",
        "elegant posture",
        "graceful stance",
        "feminine body language",
    ],
    pose_negatives: &["masculine pose", "aggressive posture", "manly stance"],
    lock_composition: &[],
};

const MALE: ModelProfile = ModelProfile {
    face: &[
        "natural male face",
        "masculine facial features",
        "natural male facial structure",
        "realistic male appearance",
        "natural male skin texture",
        "masculine facial proportions",
        "natural male expression",
    ],
    face_negatives: &["feminine face", "female features", "girly appearance"],
    pose_tone: &[
        "gentle pose",
        "soft posture",
        "calm stance",
        "gentle body language",
        "relaxed masculine pose",
    ],
    pose_negatives: &[
        "aggressive pose",
        "harsh posture",
        "intimidating stance",
        "feminine pose",
    ],
    lock_composition: &[],
};

const CHILD_POSE_TONE: &[&str] = &[
    "child-like pose",
    "playful posture",
    "natural child stance",
    "youthful body language",
    "energetic pose",
];
const CHILD_FACE_NEGATIVES: &[&str] = &["adult face", "mature features", "grown-up appearance"];
const CHILD_POSE_NEGATIVES: &[&str] = &["adult pose", "serious posture", "mature stance"];

const BOY: ModelProfile = ModelProfile {
    face: &[
        "natural child boy face",
        "boyish facial features",
        "natural child facial structure",
        "realistic child boy appearance",
        "natural child skin texture",
        "child facial proportions",
        "natural child expression",
        "youthful appearance",
        "child-like features",
    ],
    face_negatives: CHILD_FACE_NEGATIVES,
    pose_tone: CHILD_POSE_TONE,
    pose_negatives: CHILD_POSE_NEGATIVES,
    lock_composition: &[],
};

const GIRL: ModelProfile = ModelProfile {
    face: &[
        "natural child girl face",
        "girlish facial features",
        "natural child facial structure",
        "realistic child girl appearance",
        "natural child skin texture",
        "child facial proportions",
        "natural child expression",
        "youthful appearance",
        "child-like features",
    ],
    face_negatives: CHILD_FACE_NEGATIVES,
    pose_tone: &[
        "child-like pose",
        "playful posture",
        "natural child stance",
        "youthful body language",
        "energetic pose",
        "innocent expression",
    ],
    pose_negatives: CHILD_POSE_NEGATIVES,
    lock_composition: &[],
};

const ANIMAL: ModelProfile = ModelProfile {
    face: &[
        "natural pet animal",
        "realistic animal appearance",
        "natural animal features",
        "realistic animal proportions",
        "natural animal expression",
        "pet-like appearance",
        "domesticated animal",
        "friendly animal expression",
    ],
    face_negatives: &["wild animal", "feral appearance"],
    pose_tone: &[
        "pet-like pose",
        "natural animal posture",
        "domesticated animal stance",
        "friendly animal pose",
        "natural pet behavior",
    ],
    pose_negatives: &[
        "wild animal pose",
        "aggressive animal",
        "dangerous animal",
        "predator stance",
    ],
    lock_composition: &[
        "balanced composition",
        "subject centered",
        "accessory product clearly visible",
        "pet and accessory equally prominent",
        "clean framing with full product visibility",
    ],
};

const CARTOON: ModelProfile = ModelProfile {
    face: &[
        "cartoon character face",
        "animated character appearance",
        "cartoon style facial features",
        "animated character proportions",
        "cartoon character expression",
        "illustrated character",
        "animated style",
        "cartoon art style",
    ],
    face_negatives: &["photorealistic face", "realistic appearance", "real human face"],
    pose_tone: &[
        "cartoon character pose",
        "animated character posture",
        "illustrated character stance",
        "cartoon style pose",
        "animated style body language",
    ],
    pose_negatives: &[
        "photorealistic pose",
        "realistic proportions",
        "realistic features",
    ],
    lock_composition: &[],
};

/// Looks up the profile for a model type. Unrecognised types have none.
pub fn model_profile(model_type: &ModelType) -> Option<&'static ModelProfile> {
    match model_type {
        ModelType::Female => Some(&FEMALE),
        ModelType::Male => Some(&MALE),
        ModelType::Boy => Some(&BOY),
        ModelType::Girl => Some(&GIRL),
        ModelType::Animal => Some(&ANIMAL),
        ModelType::Cartoon => Some(&CARTOON),
        ModelType::Other(_) => None,
    }
}

const IDENTITY_LOCK: &[&str] = &[
    "face identity locked",
    "exact facial features from reference image",
    "exact face from reference image",
    "face must match reference image exactly",
    "preserve exact face from reference",
    "maintain face identity from reference image",
    "face unchanged from reference",
    "do not change face",
    "keep face unchanged from reference",
    "exact facial structure from reference",
    "exact eye shape from reference",
    "exact nose shape from reference",
    "exact mouth shape from reference",
    "exact face shape from reference",
    "exact skin tone from reference",
    "exact facial proportions from reference",
    "natural skin texture",
    "realistic skin appearance",
    "visible skin pores",
    "natural skin imperfections",
    "do not alter facial structure",
    "no face regeneration",
    "no beautification",
    "no facial reshaping",
    "no face modification",
    "no face changes",
    "single identity face only",
    "preserve face exactly as in reference",
    "face must be identical to reference image",
    "preserve head covering from reference image",
    "exact head covering color from reference",
    "exact head covering pattern from reference",
    "exact head covering details from reference",
    "do not alter head covering",
    "do not change hijab color",
    "do not change hijab pattern",
    "do not change hijab style",
    "head covering unchanged from reference",
];

const IDENTITY_LOCK_NEGATIVES: &[&str] = &[
    "beautified face",
    "face reshaping",
    "face regeneration",
    "face modification",
    "face changes",
    "different face",
    "face not matching reference",
    "altered facial features",
    "changed facial structure",
    "modified face",
    "cgi face",
    "plastic skin",
    "over-smooth skin",
    "airbrushed skin",
    "artificial smoothness",
    "face not from reference",
    "wrong face",
    "different person",
    "face mismatch",
    "changed head covering",
    "altered hijab",
    "different head covering color",
    "different head covering pattern",
];

const SYNTHETIC_FACE_COMMON: &[&str] = &[
    "natural facial expression",
    "realistic appearance",
    "natural skin texture",
    "lifelike features",
];

pub(super) fn face_mode(ctx: &AxisContext<'_>) -> Option<FaceMode> {
    if ctx.input.has_face_image {
        Some(FaceMode::IdentityLock)
    } else if ctx.input.has_human {
        Some(FaceMode::Synthesize)
    } else {
        None
    }
}

pub(super) fn compose(ctx: &AxisContext<'_>, out: &mut ClauseSet) {
    let Some(mode) = face_mode(ctx) else {
        return;
    };
    trace!(?mode, "face axis");

    // A lock without a model type falls back to the female profile.
    let profile = match &ctx.input.model_type {
        Some(model_type) => model_profile(model_type),
        None => Some(&FEMALE),
    };

    match mode {
        FaceMode::IdentityLock => {
            out.extend(Axis::Face, IDENTITY_LOCK);
            if let Some(profile) = profile {
                out.extend(Axis::Face, profile.pose_tone);
                out.extend(Axis::Face, profile.lock_composition);
                out.negate_all(Axis::Face, profile.pose_negatives);
            }
            out.negate_all(Axis::Face, IDENTITY_LOCK_NEGATIVES);
        }
        FaceMode::Synthesize => {
            if let Some(profile) = profile {
                out.extend(Axis::Face, profile.face);
                out.extend(Axis::Face, profile.pose_tone);
                out.negate_all(Axis::Face, profile.face_negatives);
                out.negate_all(Axis::Face, profile.pose_negatives);
            }
            out.extend(Axis::Face, SYNTHETIC_FACE_COMMON);
        }
    }
}

const MIRROR_SELFIE: &[&str] = &[
    "mirror selfie pose",
    "standing in front of mirror",
    "holding iPhone in hand",
    "iPhone partially covering lower portion of face naturally",
    "face visible through iPhone screen area",
    "eyes and upper face clearly visible above iPhone",
    "forehead and eyes area not covered",
    "cheek and chin area may be partially covered by iPhone",
    "realistic iPhone size and proportions",
    "iPhone size matches real iPhone device dimensions",
    "iPhone held at natural selfie angle",
    "iPhone positioned at chest to face level",
    "hand holding iPhone naturally",
    "realistic hand position",
    "fingers visible holding iPhone",
    "natural phone grip",
    "iPhone screen showing camera view",
    "iPhone screen reflection visible",
    "mirror shows full reflection of person",
    "reflection visible in mirror",
    "natural mirror selfie composition",
    "face not completely hidden",
    "face partially visible behind iPhone",
    "natural selfie expression",
    "relaxed selfie pose",
    "authentic mirror selfie moment",
    "natural selfie angle",
    "authentic smartphone selfie",
    "realistic mirror reflection",
    "natural pose as if taking selfie",
    "realistic iPhone bezels and screen",
    "proportional iPhone to face ratio",
    "iPhone covers approximately 30-40% of face area",
    "upper 60-70% of face clearly visible",
    "natural mirror selfie lighting",
    "realistic iPhone dimensions",
    "iPhone width approximately 7-8cm in real scale",
    "iPhone height approximately 15-16cm in real scale",
    "proportional phone size relative to face",
    "natural hand-to-phone-to-face proportions",
];

const MIRROR_SELFIE_NEGATIVES: &[&str] = &[
    "face completely hidden",
    "face fully covered by phone",
    "no face visible",
    "face not visible",
    "completely hidden face",
    "no facial features visible",
    "eyes not visible",
    "forehead covered by phone",
    "oversized iPhone",
    "undersized iPhone",
    "unrealistic phone size",
    "iPhone too large",
    "iPhone too small",
    "disproportionate phone",
    "fake phone size",
    "unnatural phone position",
    "phone covering entire face",
    "phone covering eyes",
    "phone covering forehead",
    "unrealistic phone dimensions",
    "cartoon phone",
    "fake phone",
    "not real iPhone",
    "wrong phone size",
    "giant phone",
    "tiny phone",
    "unnatural selfie pose",
    "not mirror selfie",
    "no mirror reflection",
    "fake mirror",
    "unrealistic reflection",
    "no reflection visible",
    "phone floating",
    "phone not held by hand",
    "unnatural phone grip",
    "phone covering more than 50% of face",
];

const FRONT_CAMERA_SELFIE: &[&str] = &[
    "front-facing camera selfie",
    "holding smartphone in hand",
    "natural selfie angle",
    "camera pointing at face",
    "natural selfie expression",
    "relaxed selfie pose",
    "authentic smartphone selfie",
    "natural hand position",
    "realistic smartphone size",
    "smartphone held at natural selfie distance",
    "face clearly visible",
    "natural selfie lighting",
    "authentic selfie moment",
    "realistic smartphone dimensions",
    "proportional phone to face ratio",
    "natural phone grip",
    "fingers visible holding phone",
    "phone screen showing camera view",
    "natural selfie composition",
    "authentic front camera selfie",
    "face fills frame appropriately",
    "natural facial proportions",
    "realistic selfie appearance",
];

const FRONT_CAMERA_SELFIE_NEGATIVES: &[&str] = &[
    "face not visible",
    "face hidden",
    "oversized phone",
    "undersized phone",
    "unrealistic phone size",
    "unnatural selfie pose",
    "not selfie",
    "fake phone",
    "wrong phone size",
    "phone covering face",
    "unnatural phone position",
    "blurry face",
    "distorted face",
    "unrealistic facial features",
];

const CLOSE_UP_PORTRAIT: &[&str] = &[
    "close-up portrait",
    "face clearly visible",
    "natural facial expression",
    "professional portrait composition",
    "natural skin texture",
    "realistic facial features",
    "natural portrait lighting",
    "focused on face and product",
    "product visible in frame",
    "natural portrait pose",
    "professional close-up framing",
    "face fills frame appropriately",
    "natural facial proportions",
    "realistic portrait appearance",
    "natural portrait expression",
    "professional portrait quality",
    "clear facial details",
    "natural portrait composition",
];

const CLOSE_UP_PORTRAIT_NEGATIVES: &[&str] = &[
    "face not visible",
    "face hidden",
    "blurry face",
    "distorted face",
    "unnatural facial features",
    "fake face",
    "unrealistic portrait",
    "face too small",
    "face too large",
    "wrong portrait composition",
    "unrealistic facial proportions",
    "distorted facial structure",
];

/// Injects at most one framing script. Only a synthesized face gets one; a
/// locked face already constrains the framing.
pub(super) fn compose_pose_script(ctx: &AxisContext<'_>, out: &mut ClauseSet) {
    if face_mode(ctx) != Some(FaceMode::Synthesize) {
        return;
    }
    let Some(script) = ctx.input.pose.as_ref().and_then(|pose| pose.script()) else {
        return;
    };
    trace!(?script, "pose script");

    let (clauses, negatives) = match script {
        PoseScript::MirrorSelfie => (MIRROR_SELFIE, MIRROR_SELFIE_NEGATIVES),
        PoseScript::FrontCameraSelfie => (FRONT_CAMERA_SELFIE, FRONT_CAMERA_SELFIE_NEGATIVES),
        PoseScript::CloseUpPortrait => (CLOSE_UP_PORTRAIT, CLOSE_UP_PORTRAIT_NEGATIVES),
    };
    out.extend(Axis::PoseScript, clauses);
    out.negate_all(Axis::PoseScript, negatives);
}
