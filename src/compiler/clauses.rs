use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// The decision block that contributed a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    BaseStyle,
    Subject,
    Interaction,
    Face,
    PoseScript,
    Garment,
    Background,
    Lighting,
    SafetyNet,
    // Legacy-only axes.
    CameraAngle,
    ReferenceFidelity,
    Realism,
    AspectRatio,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::BaseStyle => "base style",
            Axis::Subject => "subject",
            Axis::Interaction => "interaction",
            Axis::Face => "face",
            Axis::PoseScript => "pose script",
            Axis::Garment => "garment",
            Axis::Background => "background",
            Axis::Lighting => "lighting",
            Axis::SafetyNet => "safety net",
            Axis::CameraAngle => "camera angle",
            Axis::ReferenceFidelity => "reference fidelity",
            Axis::Realism => "realism",
            Axis::AspectRatio => "aspect ratio",
        };
        f.write_str(name)
    }
}

/// An atomic prompt fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub axis: Axis,
    pub text: Cow<'static, str>,
}

/// Which revision of the compiler produced a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMetadata {
    pub engine: String,
    pub version: String,
}

/// The final prompt pair handed to the generation API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptOutput {
    pub positive_prompt: String,
    pub negative_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PromptMetadata>,
}

/// Two append-only, ordered accumulators.
///
/// Duplicates are kept: repeating a clause is how the downstream renderer is
/// told to weight it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseSet {
    positive: Vec<Clause>,
    negative: Vec<Clause>,
}

impl ClauseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, axis: Axis, text: impl Into<Cow<'static, str>>) {
        self.positive.push(Clause {
            axis,
            text: text.into(),
        });
    }

    pub fn extend(&mut self, axis: Axis, texts: &[&'static str]) {
        self.positive
            .extend(texts.iter().map(|text| Clause {
                axis,
                text: Cow::Borrowed(*text),
            }));
    }

    pub fn negate(&mut self, axis: Axis, text: impl Into<Cow<'static, str>>) {
        self.negative.push(Clause {
            axis,
            text: text.into(),
        });
    }

    pub fn negate_all(&mut self, axis: Axis, texts: &[&'static str]) {
        self.negative
            .extend(texts.iter().map(|text| Clause {
                axis,
                text: Cow::Borrowed(*text),
            }));
    }

    pub fn positive(&self) -> &[Clause] {
        &self.positive
    }

    pub fn negative(&self) -> &[Clause] {
        &self.negative
    }

    /// True when the positive accumulator holds exactly this clause text.
    pub fn has_positive(&self, text: &str) -> bool {
        self.positive.iter().any(|c| c.text == text)
    }

    pub fn has_negative(&self, text: &str) -> bool {
        self.negative.iter().any(|c| c.text == text)
    }

    /// Joins both accumulators into the final prompt strings.
    pub fn assemble(&self, metadata: Option<PromptMetadata>) -> PromptOutput {
        let positive = join_clauses(&self.positive);
        PromptOutput {
            positive_prompt: format!("{}.", positive),
            negative_prompt: join_clauses(&self.negative),
            metadata,
        }
    }
}

/// Comma-joins non-blank clauses, collapses whitespace, and strips trailing periods.
fn join_clauses(clauses: &[Clause]) -> String {
    let joined = clauses
        .iter()
        .map(|c| c.text.as_ref())
        .filter(|text| !text.trim_matches(is_tail_char).is_empty())
        .join(", ");
    joined
        .split_whitespace()
        .join(" ")
        .trim_end_matches(is_tail_char)
        .to_string()
}

fn is_tail_char(c: char) -> bool {
    c == '.' || c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembly_collapses_whitespace_and_terminates_once() {
        let mut set = ClauseSet::new();
        set.push(Axis::BaseStyle, "  photorealistic  ");
        set.push(Axis::Background, "background:   a   plain wall.");
        set.push(Axis::Lighting, "   ");
        set.negate(Axis::SafetyNet, "anime");
        set.negate(Axis::SafetyNet, "cartoon ");

        let output = set.assemble(None);
        assert_eq!(
            output.positive_prompt,
            "photorealistic, background: a plain wall."
        );
        assert_eq!(output.negative_prompt, "anime, cartoon");
    }

    #[test]
    fn spaced_trailing_periods_collapse_to_one() {
        for tail in ["lighting: warm . .", "warm lamp. . .", " . "] {
            let mut set = ClauseSet::new();
            set.push(Axis::BaseStyle, "photorealistic");
            set.push(Axis::Lighting, tail);
            let positive = set.assemble(None).positive_prompt;
            assert!(positive.ends_with('.'), "{positive}");
            assert!(!positive.ends_with(".."), "{positive}");
            assert!(!positive.trim_end_matches('.').ends_with([' ', '.', ',']), "{positive}");
        }
    }

    #[test]
    fn duplicates_are_kept() {
        let mut set = ClauseSet::new();
        set.extend(Axis::Subject, &["natural skin texture", "natural skin texture"]);
        assert_eq!(
            set.assemble(None).positive_prompt,
            "natural skin texture, natural skin texture."
        );
    }
}
