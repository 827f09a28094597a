//! Prelude module for convenient imports
//!
//! Re-exports the types needed to capture, normalize, compile and assemble a request.
//!
//! # Example
//!
//! ```rust,no_run
//! use studio_prompt::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let request = GenerationRequestFile::from_file("path/to/request.json")?;
//! let config = CompilerConfig::from_file("path/to/studio.toml")?;
//!
//! let compiler = config.build_compiler();
//! let output = compiler.compile_raw(&request.input, request.has_face_image());
//! println!("{}", output.positive_prompt);
//! # Ok(())
//! # }
//! ```

// Capture and normalization
pub use crate::input::{
    ImageInput, IntoGenerationInput, LegacyGenerationForm, RawGenerationInput, RequestedMode,
};
pub use crate::mode::{Mode, resolve_photography_mode};
pub use crate::normalize::{NormalizedInput, normalize};

// Compilation
pub use crate::compiler::{
    Axis, ClauseSet, OutfitHeuristics, PromptCompiler, PromptOutput, RevisionChoice, compile,
    compile_legacy,
};
pub use crate::translate::{MappingTranslator, Passthrough, Translator};

// Downstream payload and configuration
pub use crate::config::CompilerConfig;
pub use crate::data::GenerationRequestFile;
pub use crate::request::{EngineSettings, GenerationRequest};

// Error types
pub use crate::error::{ConfigError, ConversionError, RequestFileError};

// Trace formatting
pub use crate::trace::ClauseTraceFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
