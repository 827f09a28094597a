//! Normalization tests
//!
//! Presence flags, label resolution and the human/product split.
mod common;
use common::*;
use studio_prompt::normalize::{Background, Category, Grip, Interaction, Lighting, ModelType, Pose};
use studio_prompt::prelude::*;

#[cfg(test)]
mod normalize_tests {
    use super::*;

    #[test]
    fn test_has_human_tracks_model_type_presence() {
        let cases: [(Option<&str>, bool); 5] = [
            (None, false),
            (Some(""), false),
            (Some("Wanita"), true),
            (Some("Hewan"), true),
            (Some("Robot"), true),
        ];
        for (model_type, expected) in cases {
            let raw = RawGenerationInput {
                model_type: model_type.map(str::to_string),
                ..product_input()
            };
            let normalized = normalize(&raw, false);
            assert_eq!(normalized.has_human, expected, "modelType {:?}", model_type);
            assert_eq!(normalized.is_product_only, !expected);
        }
    }

    #[test]
    fn test_unrecognised_model_type_is_kept() {
        let normalized = normalize(&human_input("Robot"), false);
        assert_eq!(
            normalized.model_type,
            Some(ModelType::Other("Robot".to_string()))
        );
    }

    #[test]
    fn test_image_flags_ignore_empty_payloads() {
        let raw = RawGenerationInput {
            background_image: Some(ImageInput::default()),
            optional_subject_image: Some(image()),
            ..product_input()
        };
        let normalized = normalize(&raw, false);
        assert!(normalized.has_subject);
        assert!(!normalized.has_background);
        assert!(!normalized.use_background);
        assert!(normalized.has_optional_subject);
    }

    #[test]
    fn test_background_image_enables_use_background() {
        let raw = RawGenerationInput {
            background_image: Some(image()),
            ..product_input()
        };
        let normalized = normalize(&raw, false);
        assert!(normalized.has_background);
        assert!(normalized.use_background);
    }

    #[test]
    fn test_empty_labels_become_absent() {
        let raw = RawGenerationInput {
            category: Some(String::new()),
            pose: Some(String::new()),
            custom_pose_prompt: Some(String::new()),
            ..product_input()
        };
        let normalized = normalize(&raw, false);
        assert_eq!(normalized.category, None);
        assert_eq!(normalized.pose, None);
        assert_eq!(normalized.custom.pose, None);
    }

    #[test]
    fn test_blank_text_is_absent_and_text_is_trimmed() {
        let raw = RawGenerationInput {
            model_type: Some("  ".to_string()),
            lighting: Some(" Golden Hour ".to_string()),
            custom_background_prompt: Some("   ".to_string()),
            custom_lighting_prompt: Some("  Warm Lamp  ".to_string()),
            ..product_input()
        };
        let normalized = normalize(&raw, false);
        assert!(!normalized.has_human);
        assert!(normalized.is_product_only);
        assert_eq!(normalized.model_type, None);
        assert_eq!(normalized.custom.background, None);
        assert_eq!(normalized.custom.lighting.as_deref(), Some("Warm Lamp"));
        assert_eq!(normalized.lighting, Some(Lighting::Named("Golden Hour".to_string())));
    }

    #[test]
    fn test_labels_resolve_to_variants() {
        let raw = RawGenerationInput {
            category: Some("Sandal/Sepatu".to_string()),
            interaction_type: Some("Pegang 2 Tangan".to_string()),
            pose: Some("Prompt Custom (bisa diedit)".to_string()),
            background: Some("Hapus Latar".to_string()),
            lighting: Some("Custom".to_string()),
            ..human_input("Wanita")
        };
        let normalized = normalize(&raw, false);

        assert_eq!(normalized.category, Some(Category::Footwear));
        assert_eq!(normalized.model_type, Some(ModelType::Female));
        assert!(matches!(
            normalized.interaction,
            Some(Interaction::Hand {
                grip: Grip::Double,
                female: false,
                ..
            })
        ));
        assert_eq!(normalized.pose, Some(Pose::Custom));
        assert_eq!(normalized.background, Some(Background::RemoveBackground));
        assert_eq!(normalized.lighting, Some(Lighting::Custom));
    }

    #[test]
    fn test_face_flag_is_passed_through() {
        assert!(normalize(&human_input("Pria"), true).has_face_image);
        assert!(!normalize(&human_input("Pria"), false).has_face_image);
    }

    #[test]
    fn test_raw_input_reads_camel_case_json() {
        let request = GenerationRequestFile::from_json(FULL_REQUEST_JSON).unwrap();
        let normalized = normalize(&request.input, request.has_face_image());

        assert!(normalized.has_face_image);
        assert!(normalized.use_background);
        assert_eq!(normalized.aspect_ratio.as_deref(), Some("9:16"));
        assert_eq!(normalized.mode, Mode::Lifestyle);
    }
}
