//! Closed variants for the UI labels the compiler branches on.
//!
//! Every label is parsed once during normalization; the compiler matches on
//! these enums and never re-inspects the original text. Each variant keeps its
//! source label so it can still be handed to the `Translator`.

use regex::Regex;
use std::sync::LazyLock;

static FOOTWEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)sandal|sepatu|shoe|footwear").expect("valid footwear regex"));
static HAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)tangan").expect("valid hand regex"));
static FOOT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)kaki").expect("valid foot regex"));
static SINGLE_GRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)pegang\s*1").expect("valid single grip regex"));
static DOUBLE_GRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)pegang\s*2").expect("valid double grip regex"));
static FEMALE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)wanita").expect("valid female regex"));

pub const NO_INTERACTION_LABEL: &str = "Tanpa Interaksi";
pub const CUSTOM_POSE_LABELS: [&str; 2] = ["Prompt Kustom", "Prompt Custom (bisa diedit)"];
pub const UPLOAD_BACKGROUND_LABEL: &str = "Upload Background";
pub const REMOVE_BACKGROUND_LABEL: &str = "Hapus Latar";
pub const CUSTOM_LIGHTING_LABEL: &str = "Custom";

/// Product category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Fashion,
    Beauty,
    Bag,
    Footwear,
    Accessories,
    HomeLiving,
    FoodBeverage,
    Other(String),
}

impl Category {
    pub fn parse(label: &str) -> Self {
        match label {
            "Fashion" => Category::Fashion,
            "Beauty" => Category::Beauty,
            "Tas" => Category::Bag,
            "Sandal/Sepatu" => Category::Footwear,
            "Aksesoris" => Category::Accessories,
            "Home Living" => Category::HomeLiving,
            "Food & Beverage" => Category::FoodBeverage,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::Fashion => "Fashion",
            Category::Beauty => "Beauty",
            Category::Bag => "Tas",
            Category::Footwear => "Sandal/Sepatu",
            Category::Accessories => "Aksesoris",
            Category::HomeLiving => "Home Living",
            Category::FoodBeverage => "Food & Beverage",
            Category::Other(label) => label,
        }
    }

    pub fn is_footwear(&self) -> bool {
        match self {
            Category::Footwear => true,
            Category::Other(label) => FOOTWEAR_RE.is_match(label),
            _ => false,
        }
    }
}

/// Who (or what) models the product.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelType {
    Female,
    Male,
    Boy,
    Girl,
    Animal,
    Cartoon,
    Other(String),
}

impl ModelType {
    pub fn parse(label: &str) -> Self {
        match label {
            "Wanita" => ModelType::Female,
            "Pria" => ModelType::Male,
            "Anak LakiLaki" => ModelType::Boy,
            "Anak Perempuan" => ModelType::Girl,
            "Hewan" => ModelType::Animal,
            "Cartoon" => ModelType::Cartoon,
            other => ModelType::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ModelType::Female => "Wanita",
            ModelType::Male => "Pria",
            ModelType::Boy => "Anak LakiLaki",
            ModelType::Girl => "Anak Perempuan",
            ModelType::Animal => "Hewan",
            ModelType::Cartoon => "Cartoon",
            ModelType::Other(label) => label,
        }
    }
}

/// How many hands grip the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grip {
    Single,
    Double,
    Unspecified,
}

/// How a person interacts with the product.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Interaction {
    NoInteraction,
    Hand {
        grip: Grip,
        female: bool,
        label: String,
    },
    Foot {
        female: bool,
        label: String,
    },
    Other(String),
}

impl Interaction {
    pub fn parse(label: &str) -> Self {
        if label == NO_INTERACTION_LABEL {
            return Interaction::NoInteraction;
        }
        let female = FEMALE_RE.is_match(label);
        if HAND_RE.is_match(label) {
            let grip = if SINGLE_GRIP_RE.is_match(label) {
                Grip::Single
            } else if DOUBLE_GRIP_RE.is_match(label) {
                Grip::Double
            } else {
                Grip::Unspecified
            };
            Interaction::Hand {
                grip,
                female,
                label: label.to_string(),
            }
        } else if FOOT_RE.is_match(label) {
            Interaction::Foot {
                female,
                label: label.to_string(),
            }
        } else {
            Interaction::Other(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Interaction::NoInteraction => NO_INTERACTION_LABEL,
            Interaction::Hand { label, .. }
            | Interaction::Foot { label, .. }
            | Interaction::Other(label) => label,
        }
    }
}

/// Poses with a dedicated framing script for device-to-face occlusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoseScript {
    MirrorSelfie,
    FrontCameraSelfie,
    CloseUpPortrait,
}

/// The selected pose.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pose {
    /// The user chose to type a custom pose prompt instead.
    Custom,
    Scripted { script: PoseScript, label: String },
    Named(String),
}

impl Pose {
    pub fn parse(label: &str) -> Self {
        if CUSTOM_POSE_LABELS.contains(&label) {
            return Pose::Custom;
        }
        let script = match label {
            "Mirror Selfie" | "Mirror selfie menggunakan iPhone" => Some(PoseScript::MirrorSelfie),
            "Front Camera Selfie" => Some(PoseScript::FrontCameraSelfie),
            "Close-Up Portrait" => Some(PoseScript::CloseUpPortrait),
            _ => None,
        };
        match script {
            Some(script) => Pose::Scripted {
                script,
                label: label.to_string(),
            },
            None => Pose::Named(label.to_string()),
        }
    }

    /// The translatable label, `None` for the custom sentinel.
    pub fn label(&self) -> Option<&str> {
        match self {
            Pose::Custom => None,
            Pose::Scripted { label, .. } | Pose::Named(label) => Some(label),
        }
    }

    pub fn script(&self) -> Option<PoseScript> {
        match self {
            Pose::Scripted { script, .. } => Some(*script),
            _ => None,
        }
    }
}

/// The background chosen from the UI list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Background {
    Upload,
    RemoveBackground,
    Named(String),
}

impl Background {
    pub fn parse(label: &str) -> Self {
        match label {
            UPLOAD_BACKGROUND_LABEL => Background::Upload,
            REMOVE_BACKGROUND_LABEL => Background::RemoveBackground,
            other => Background::Named(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Background::Upload => UPLOAD_BACKGROUND_LABEL,
            Background::RemoveBackground => REMOVE_BACKGROUND_LABEL,
            Background::Named(label) => label,
        }
    }
}

/// The lighting preset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Lighting {
    Custom,
    Named(String),
}

impl Lighting {
    pub fn parse(label: &str) -> Self {
        if label == CUSTOM_LIGHTING_LABEL {
            Lighting::Custom
        } else {
            Lighting::Named(label.to_string())
        }
    }
}
