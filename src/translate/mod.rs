//! The term-translation collaborator.
//!
//! The compiler never owns a translation table. It receives a `Translator` and
//! treats `translate(term) == term` as "no descriptor available".

use crate::error::ConfigError;
use ahash::AHashMap;

mod table;

/// A pure, idempotent mapping from a UI label to an English descriptor.
///
/// Implementations must return the input unchanged when the term is unmapped.
pub trait Translator: Send + Sync {
    fn translate(&self, term: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn translate(&self, term: &str) -> String {
        self(term)
    }
}

/// Returns every term unchanged, so no descriptor is ever available.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Translator for Passthrough {
    fn translate(&self, term: &str) -> String {
        term.to_string()
    }
}

/// A table-backed translator.
#[derive(Debug, Clone, Default)]
pub struct MappingTranslator {
    table: AHashMap<String, String>,
}

impl MappingTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The storefront's built-in Indonesian UI label table.
    pub fn indonesian() -> Self {
        let table = table::INDONESIAN_LABELS
            .iter()
            .map(|(label, english)| (label.to_string(), english.to_string()))
            .collect();
        Self { table }
    }

    /// Loads a flat `{ "label": "descriptor" }` JSON object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let table: AHashMap<String, String> = serde_json::from_str(json)
            .map_err(|e| ConfigError::TranslationTableError(e.to_string()))?;
        Ok(Self { table })
    }

    pub fn with_entry(mut self, label: &str, english: &str) -> Self {
        self.table.insert(label.to_string(), english.to_string());
        self
    }

    /// Adds or overrides entries.
    pub fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.table.extend(entries);
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Translator for MappingTranslator {
    fn translate(&self, term: &str) -> String {
        // Empty descriptors (custom-prompt sentinels) count as unmapped.
        match self.table.get(term) {
            Some(english) if !english.is_empty() => english.clone(),
            _ => term.to_string(),
        }
    }
}

/// Translates `term`, returning `None` when no descriptor is available.
pub fn describe(translator: &dyn Translator, term: &str) -> Option<String> {
    let translated = translator.translate(term);
    if translated == term || translated.trim().is_empty() {
        None
    } else {
        Some(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_terms_come_back_unchanged() {
        let translator = MappingTranslator::indonesian();
        assert_eq!(translator.translate("Not A Label"), "Not A Label");
        assert_eq!(translator.translate("Prompt Kustom"), "Prompt Kustom");
        assert_eq!(translator.translate("Wanita"), "female model");
    }

    #[test]
    fn describe_treats_identity_as_missing() {
        let translator = MappingTranslator::indonesian();
        assert_eq!(describe(&translator, "Custom"), None);
        assert_eq!(describe(&Passthrough, "Fashion"), None);
        assert_eq!(
            describe(&translator, "Fashion").as_deref(),
            Some("fashion photography")
        );
    }

    #[test]
    fn closures_are_translators() {
        let upper = |term: &str| term.to_uppercase();
        assert_eq!(describe(&upper, "tas").as_deref(), Some("TAS"));
    }

    #[test]
    fn loads_overrides_from_json() {
        let translator = MappingTranslator::from_json(r#"{"Tas": "handbag"}"#).unwrap();
        assert_eq!(translator.translate("Tas"), "handbag");
        assert!(MappingTranslator::from_json("[1, 2]").is_err());
    }
}
