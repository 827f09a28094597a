//! # studio-prompt - Product Photo Prompt Compiler
//!
//! **studio-prompt** turns the selections a shopper-facing photo studio UI collects
//! (reference images, category, pose, lighting, model type, interaction, background)
//! into a deterministic positive/negative prompt pair for a text-conditioned image
//! generation engine. Every stage is pure and synchronous: the same input always
//! yields the same prompt, byte for byte.
//!
//! ## Core Workflow
//!
//! 1.  **Capture**: Build a `RawGenerationInput`, or implement `IntoGenerationInput`
//!     for your own request format (the older flat form ships as `LegacyGenerationForm`).
//! 2.  **Normalize**: `normalize` derives presence flags, resolves every UI label into a
//!     closed variant and settles the photography mode (`resolve_photography_mode`).
//! 3.  **Compile**: A `PromptCompiler` walks the fixed axes (base style, subject,
//!     interaction, face, pose script, garment, background, lighting, safety net) and
//!     assembles the prompts. Labels are turned into English through an injected
//!     `Translator`.
//! 4.  **Assemble**: `GenerationRequest::assemble` packs the prompts, engine settings and
//!     reference images into the payload the generation API expects.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use studio_prompt::prelude::*;
//! use std::sync::Arc;
//!
//! fn main() -> Result<()> {
//!     let raw = RawGenerationInput {
//!         model_type: Some("Wanita".to_string()),
//!         category: Some("Fashion".to_string()),
//!         pose: Some("Mirror Selfie".to_string()),
//!         ..RawGenerationInput::new(ImageInput::new("iVBORw0...", "image/png"))
//!     };
//!
//!     let compiler = PromptCompiler::builder(Arc::new(MappingTranslator::indonesian()))
//!         .revision(RevisionChoice::Canonical)
//!         .build();
//!
//!     let normalized = normalize(&raw, false);
//!     let output = compiler.compile(&normalized);
//!     println!("+ {}", output.positive_prompt);
//!     println!("- {}", output.negative_prompt);
//!
//!     // Which axis contributed what
//!     print!("{}", ClauseTraceFormatter::format(&compiler.explain(&normalized)));
//!
//!     let request = GenerationRequest::assemble(&raw, None, output, &EngineSettings::default());
//!     println!("{}", serde_json::to_string_pretty(&request)?);
//!     Ok(())
//! }
//! ```

pub mod compiler;
pub mod config;
pub mod data;
pub mod error;
pub mod input;
pub mod mode;
pub mod normalize;
pub mod prelude;
pub mod request;
pub mod trace;
pub mod translate;
