use thiserror::Error;

/// Errors that can occur while loading a `CompilerConfig`.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config TOML: {0}")]
    TomlParseError(String),

    #[error("Failed to parse translation table JSON: {0}")]
    TranslationTableError(String),
}

/// Errors that can occur while loading a generation request from disk.
#[derive(Error, Debug, Clone)]
pub enum RequestFileError {
    #[error("Failed to read request file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse request JSON: {0}")]
    JsonParseError(String),
}

/// Errors that can occur when converting a custom capture format into a `RawGenerationInput`.
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("No primary subject image was supplied")]
    MissingSubject,

    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}
