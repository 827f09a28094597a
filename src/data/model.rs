use crate::error::RequestFileError;
use crate::input::{ImageInput, RawGenerationInput};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A captured generation request as stored on disk.
///
/// The raw input sits at the top level; the face reference and its flag are
/// kept beside it because the capture layer computes them separately.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequestFile {
    #[serde(flatten)]
    pub input: RawGenerationInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_image: Option<ImageInput>,
    /// Overrides the flag derived from `face_image` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_face_image: Option<bool>,
}

impl GenerationRequestFile {
    pub fn from_json(json: &str) -> Result<Self, RequestFileError> {
        serde_json::from_str(json).map_err(|e| RequestFileError::JsonParseError(e.to_string()))
    }

    /// Load a request from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RequestFileError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| RequestFileError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// A face only counts when the request carries a human subject.
    pub fn has_face_image(&self) -> bool {
        let has_human = self.input.model_type.as_deref().is_some_and(|m| !m.trim().is_empty());
        let has_face = self
            .has_face_image
            .unwrap_or_else(|| self.face_image.as_ref().is_some_and(|face| !face.is_empty()));
        has_human && has_face
    }

    pub fn face_image(&self) -> Option<&ImageInput> {
        self.face_image.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_flattened_request() {
        let request = GenerationRequestFile::from_json(
            r#"{
                "subjectImage": { "base64": "AAAA", "mimeType": "image/png" },
                "mode": "auto",
                "modelType": "Wanita",
                "faceImage": { "base64": "BBBB", "mimeType": "image/jpeg" }
            }"#,
        )
        .unwrap();

        assert_eq!(request.input.subject_image.mime_type, "image/png");
        assert_eq!(request.input.model_type.as_deref(), Some("Wanita"));
        assert!(request.has_face_image());
    }

    #[test]
    fn face_without_human_is_ignored() {
        let request = GenerationRequestFile {
            face_image: Some(ImageInput::new("BBBB", "image/jpeg")),
            ..Default::default()
        };
        assert!(!request.has_face_image());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            GenerationRequestFile::from_json("{ not json"),
            Err(RequestFileError::JsonParseError(_))
        ));
    }
}
