//! Common test utilities for building generation inputs.
use std::sync::Arc;
use studio_prompt::prelude::*;

/// A tiny stand-in payload; the compiler never looks inside it.
#[allow(dead_code)]
pub fn image() -> ImageInput {
    ImageInput::new("iVBORw0KGgo=", "image/png")
}

/// A raw input with only the mandatory subject image.
#[allow(dead_code)]
pub fn product_input() -> RawGenerationInput {
    RawGenerationInput::new(image())
}

/// A raw input modelled by `model_type`.
#[allow(dead_code)]
pub fn human_input(model_type: &str) -> RawGenerationInput {
    RawGenerationInput {
        model_type: Some(model_type.to_string()),
        ..product_input()
    }
}

#[allow(dead_code)]
pub fn indonesian() -> MappingTranslator {
    MappingTranslator::indonesian()
}

/// Normalizes and compiles with the canonical revision and the built-in table.
#[allow(dead_code)]
pub fn compile_canonical(raw: &RawGenerationInput, has_face_image: bool) -> PromptOutput {
    let normalized = normalize(raw, has_face_image);
    compile(&normalized, normalized.mode, &indonesian())
}

#[allow(dead_code)]
pub fn compile_with_legacy(raw: &RawGenerationInput, has_face_image: bool) -> PromptOutput {
    let normalized = normalize(raw, has_face_image);
    compile_legacy(&normalized, normalized.mode, &indonesian())
}

#[allow(dead_code)]
pub fn compiler(heuristics: OutfitHeuristics) -> PromptCompiler {
    PromptCompiler::builder(Arc::new(indonesian()))
        .outfit_heuristics(heuristics)
        .build()
}

/// Splits an assembled prompt back into its clauses.
///
/// Only reliable for clauses without internal commas.
#[allow(dead_code)]
pub fn clauses(prompt: &str) -> Vec<String> {
    prompt
        .trim_end_matches('.')
        .split(", ")
        .map(str::to_string)
        .collect()
}

#[allow(dead_code)]
pub fn has_clause(prompt: &str, clause: &str) -> bool {
    clauses(prompt).iter().any(|c| c == clause)
}

/// Request fixture with a female model, a face reference and a background plate.
#[allow(dead_code)]
pub const FULL_REQUEST_JSON: &str = r#"{
    "subjectImage": { "base64": "AAAA", "mimeType": "image/png" },
    "backgroundImage": { "base64": "BBBB", "mimeType": "image/jpeg" },
    "faceImage": { "base64": "CCCC", "mimeType": "image/jpeg" },
    "mode": "auto",
    "category": "Fashion",
    "style": "Lifestyle",
    "modelType": "Wanita",
    "pose": "Natural Half Body",
    "aspectRatio": "9:16"
}"#;
