use crate::input::RequestedMode;
use crate::normalize::NormalizedInput;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Categories that imply the product is shown in everyday use.
pub const LIFESTYLE_CATEGORIES: [&str; 3] = ["Home Living", "Food & Beverage", "Tas"];

/// Styles that imply the product is shown in everyday use.
pub const LIFESTYLE_STYLES: [&str; 3] = ["Lifestyle", "Indoor/Outdoor", "Outdoor Cafe"];

/// A resolved photography mode. Never `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Catalog,
    Lifestyle,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Catalog => write!(f, "catalog"),
            Mode::Lifestyle => write!(f, "lifestyle"),
        }
    }
}

/// Resolves the requested mode against the normalized input.
///
/// An explicit choice always wins. For `auto`, lifestyle requires a background
/// reference image *and* a style or category that implies everyday use; every
/// other combination falls back to catalog.
pub fn resolve_photography_mode(input: &NormalizedInput, requested: RequestedMode) -> Mode {
    let mode = match requested {
        RequestedMode::Catalog => Mode::Catalog,
        RequestedMode::Lifestyle => Mode::Lifestyle,
        RequestedMode::Auto => {
            let style_implies = input
                .style
                .as_deref()
                .is_some_and(|style| LIFESTYLE_STYLES.contains(&style));
            let category_implies = input
                .category
                .as_ref()
                .is_some_and(|category| LIFESTYLE_CATEGORIES.contains(&category.label()));

            if input.has_background && (style_implies || category_implies) {
                Mode::Lifestyle
            } else {
                Mode::Catalog
            }
        }
    };
    debug!(?requested, %mode, "resolved photography mode");
    mode
}
