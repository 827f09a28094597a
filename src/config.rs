//! Compiler configuration loaded from TOML.
//!
//! ```toml
//! revision = "canonical"
//!
//! [outfit]
//! optional_subject_is_footwear = true
//!
//! [engine]
//! guidance_scale = 5.0
//!
//! [translations]
//! "Studio Minimalis" = "minimalist studio"
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use crate::compiler::{OutfitHeuristics, PromptCompiler, RevisionChoice};
use crate::error::ConfigError;
use crate::request::EngineSettings;
use crate::translate::MappingTranslator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    pub revision: RevisionChoice,
    pub outfit: OutfitHeuristics,
    pub engine: EngineSettings,
    /// Entries added on top of the built-in Indonesian label table.
    pub translations: BTreeMap<String, String>,
}

impl CompilerConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::TomlParseError(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&text)?;
        debug!(
            path = %path.display(),
            revision = ?config.revision,
            extra_translations = config.translations.len(),
            "loaded compiler config"
        );
        Ok(config)
    }

    /// The built-in table with this config's entries applied over it.
    pub fn translator(&self) -> MappingTranslator {
        let mut translator = MappingTranslator::indonesian();
        translator.extend(
            self.translations
                .iter()
                .map(|(label, english)| (label.clone(), english.clone())),
        );
        translator
    }

    pub fn build_compiler(&self) -> PromptCompiler {
        PromptCompiler::builder(Arc::new(self.translator()))
            .revision(self.revision)
            .outfit_heuristics(self.outfit)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::Translator;

    #[test]
    fn empty_config_uses_defaults() {
        let config = CompilerConfig::from_toml("").unwrap();
        assert_eq!(config, CompilerConfig::default());
        assert_eq!(config.engine.num_inference_steps, 24);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = CompilerConfig::from_toml(
            r#"
            revision = "legacy"

            [outfit]
            optional_subject_is_footwear = true

            [engine]
            guidance_scale = 5.0

            [translations]
            "Studio Minimalis" = "minimalist studio"
            "#,
        )
        .unwrap();

        assert_eq!(config.revision, RevisionChoice::Legacy);
        assert!(config.outfit.optional_subject_is_footwear);
        assert_eq!(config.engine.guidance_scale, 5.0);
        assert_eq!(config.engine.model, "fal-ai/flux-2/lora/edit");
        assert_eq!(
            config.translator().translate("Studio Minimalis"),
            "minimalist studio"
        );
        assert_eq!(config.translator().translate("Wanita"), "female model");
    }

    #[test]
    fn rejects_unknown_revision() {
        let err = CompilerConfig::from_toml(r#"revision = "v3""#).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParseError(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = CompilerConfig::from_file("does/not/exist.toml").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
