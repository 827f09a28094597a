//! Compiles a `NormalizedInput` into a positive/negative prompt pair.
//!
//! Two revisions are kept side by side. The canonical revision is the one new
//! callers should use; the legacy revision reproduces the coarse first-generation
//! prompts for requests that still depend on them. They share the `ClauseSet`
//! accumulator and nothing else.

use crate::input::RawGenerationInput;
use crate::mode::Mode;
use crate::normalize::{NormalizedInput, normalize};
use crate::translate::Translator;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

mod canonical;
pub mod clauses;
mod legacy;

pub use canonical::{Canonical, FaceMode, ModelProfile, OutfitPolicy, model_profile};
pub use clauses::{Axis, Clause, ClauseSet, PromptMetadata, PromptOutput};
pub use legacy::Legacy;

/// Everything a revision reads while composing clauses.
pub struct CompileContext<'a> {
    pub input: &'a NormalizedInput,
    pub mode: Mode,
    pub translator: &'a dyn Translator,
    pub heuristics: &'a OutfitHeuristics,
}

/// A prompt-compilation strategy.
///
/// Implementations append to the accumulators in a fixed axis order and must
/// be pure: the same context always yields the same clauses.
pub trait PromptRevision: Send + Sync {
    fn compose(&self, ctx: &CompileContext<'_>) -> ClauseSet;

    /// The literal attached to every output of this revision.
    fn metadata(&self) -> Option<PromptMetadata>;
}

/// The built-in revisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevisionChoice {
    /// Fine-grained axes with identity lock and outfit completion.
    #[default]
    Canonical,
    /// The first-generation coarse axes with a fixed negative list.
    Legacy,
}

impl RevisionChoice {
    fn into_revision(self) -> Box<dyn PromptRevision> {
        match self {
            RevisionChoice::Canonical => Box::new(Canonical),
            RevisionChoice::Legacy => Box::new(Legacy),
        }
    }
}

/// Tunables for the outfit-completion policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutfitHeuristics {
    /// Treat the optional product image of a female Fashion request as footwear,
    /// completing the outfit with jeans. Nothing in the request says what that
    /// image actually shows, so this is off unless configured.
    pub optional_subject_is_footwear: bool,
}

pub struct PromptCompiler {
    translator: Arc<dyn Translator>,
    revision: Box<dyn PromptRevision>,
    heuristics: OutfitHeuristics,
}

pub struct PromptCompilerBuilder {
    translator: Arc<dyn Translator>,
    revision: Box<dyn PromptRevision>,
    heuristics: OutfitHeuristics,
}

impl PromptCompilerBuilder {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator,
            revision: RevisionChoice::default().into_revision(),
            heuristics: OutfitHeuristics::default(),
        }
    }

    pub fn revision(mut self, choice: RevisionChoice) -> Self {
        self.revision = choice.into_revision();
        self
    }

    /// Replaces the revision with a caller-provided strategy.
    pub fn with_custom_revision(mut self, revision: Box<dyn PromptRevision>) -> Self {
        self.revision = revision;
        self
    }

    pub fn outfit_heuristics(mut self, heuristics: OutfitHeuristics) -> Self {
        self.heuristics = heuristics;
        self
    }

    pub fn build(self) -> PromptCompiler {
        PromptCompiler {
            translator: self.translator,
            revision: self.revision,
            heuristics: self.heuristics,
        }
    }
}

impl PromptCompiler {
    pub fn builder(translator: Arc<dyn Translator>) -> PromptCompilerBuilder {
        PromptCompilerBuilder::new(translator)
    }

    /// Compiles using the mode already resolved on `normalized`.
    pub fn compile(&self, normalized: &NormalizedInput) -> PromptOutput {
        self.compile_with_mode(normalized, normalized.mode)
    }

    pub fn compile_with_mode(&self, normalized: &NormalizedInput, mode: Mode) -> PromptOutput {
        let clauses = self.explain_with_mode(normalized, mode);
        let output = clauses.assemble(self.revision.metadata());
        debug!(
            %mode,
            positive_clauses = clauses.positive().len(),
            negative_clauses = clauses.negative().len(),
            "compiled prompt"
        );
        output
    }

    /// Normalizes and compiles in one step.
    pub fn compile_raw(&self, raw: &RawGenerationInput, has_face_image: bool) -> PromptOutput {
        self.compile(&normalize(raw, has_face_image))
    }

    /// Returns the axis-tagged clauses without joining them.
    pub fn explain(&self, normalized: &NormalizedInput) -> ClauseSet {
        self.explain_with_mode(normalized, normalized.mode)
    }

    fn explain_with_mode(&self, normalized: &NormalizedInput, mode: Mode) -> ClauseSet {
        let ctx = CompileContext {
            input: normalized,
            mode,
            translator: self.translator.as_ref(),
            heuristics: &self.heuristics,
        };
        self.revision.compose(&ctx)
    }
}

/// The canonical compiler with default heuristics.
pub fn compile(
    normalized: &NormalizedInput,
    mode: Mode,
    translator: &dyn Translator,
) -> PromptOutput {
    compose_with(&Canonical, normalized, mode, translator)
}

/// The retained first-generation compiler. Its output carries no metadata.
pub fn compile_legacy(
    normalized: &NormalizedInput,
    mode: Mode,
    translator: &dyn Translator,
) -> PromptOutput {
    compose_with(&Legacy, normalized, mode, translator)
}

fn compose_with(
    revision: &dyn PromptRevision,
    normalized: &NormalizedInput,
    mode: Mode,
    translator: &dyn Translator,
) -> PromptOutput {
    let heuristics = OutfitHeuristics::default();
    let ctx = CompileContext {
        input: normalized,
        mode,
        translator,
        heuristics: &heuristics,
    };
    revision.compose(&ctx).assemble(revision.metadata())
}
