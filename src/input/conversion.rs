use super::definition::RawGenerationInput;
use crate::error::ConversionError;

/// A trait for capture formats that can be converted into a `RawGenerationInput`.
///
/// This is the extension point for feeding the compiler from forms other than the
/// canonical one. Implement it on your own request structs and hand the result to
/// `normalize`.
///
/// # Example
///
/// ```rust,no_run
/// use studio_prompt::prelude::*;
/// use studio_prompt::error::ConversionError;
///
/// struct MyForm { photo: String, gender: Option<String> }
///
/// impl IntoGenerationInput for MyForm {
///     fn into_generation_input(self) -> std::result::Result<RawGenerationInput, ConversionError> {
///         if self.photo.is_empty() {
///             return Err(ConversionError::MissingSubject);
///         }
///         Ok(RawGenerationInput {
///             model_type: self.gender,
///             ..RawGenerationInput::new(ImageInput::new(self.photo, "image/png"))
///         })
///     }
/// }
/// ```
pub trait IntoGenerationInput {
    /// Consumes the object and converts it into the canonical raw input.
    fn into_generation_input(self) -> Result<RawGenerationInput, ConversionError>;
}

impl IntoGenerationInput for RawGenerationInput {
    fn into_generation_input(self) -> Result<RawGenerationInput, ConversionError> {
        Ok(self)
    }
}
