//! Downstream request assembly tests
mod common;
use common::*;
use studio_prompt::prelude::*;
use studio_prompt::request::{ReferenceRole, image_size_for};

#[cfg(test)]
mod request_tests {
    use super::*;

    fn roles(request: &GenerationRequest) -> Vec<ReferenceRole> {
        request.reference_images.iter().map(|r| r.role).collect()
    }

    #[test]
    fn test_default_engine_settings() {
        let settings = EngineSettings::default();
        assert_eq!(settings.model, "fal-ai/flux-2/lora/edit");
        assert_eq!(settings.image_strength, 0.67);
        assert_eq!(settings.num_inference_steps, 24);
        assert_eq!(settings.guidance_scale, 4.5);
    }

    #[test]
    fn test_image_size_presets() {
        assert_eq!(image_size_for(None), "square_hd");
        assert_eq!(image_size_for(Some("1:1 (Square)")), "square_hd");
        assert_eq!(image_size_for(Some("4:5")), "portrait_4_3");
        assert_eq!(image_size_for(Some("2:3 (Portrait)")), "portrait_4_3");
        assert_eq!(image_size_for(Some("16:9")), "landscape_16_9");
        assert_eq!(image_size_for(Some("4:3")), "landscape_4_3");
        assert_eq!(image_size_for(Some("9:16 (Story)")), "portrait_9_16");
        assert_eq!(image_size_for(Some("21:9")), "square_hd");
    }

    #[test]
    fn test_reference_slot_order() {
        let face = ImageInput::new("FACE", "image/jpeg");
        let raw = RawGenerationInput {
            background_image: Some(image()),
            optional_subject_image: Some(image()),
            ..human_input("Wanita")
        };
        let output = compile_canonical(&raw, true);
        let request =
            GenerationRequest::assemble(&raw, Some(&face), output, &EngineSettings::default());
        assert_eq!(
            roles(&request),
            vec![
                ReferenceRole::Subject,
                ReferenceRole::Background,
                ReferenceRole::OptionalSubject
            ]
        );

        let raw = RawGenerationInput {
            background_image: Some(image()),
            ..human_input("Wanita")
        };
        let output = compile_canonical(&raw, true);
        let request =
            GenerationRequest::assemble(&raw, Some(&face), output, &EngineSettings::default());
        assert_eq!(
            roles(&request),
            vec![
                ReferenceRole::Subject,
                ReferenceRole::Background,
                ReferenceRole::Face
            ]
        );
        assert_eq!(request.reference_images[2].image.base64, "FACE");
    }

    #[test]
    fn test_empty_images_take_no_slot() {
        let raw = RawGenerationInput {
            background_image: Some(ImageInput::default()),
            ..product_input()
        };
        let output = compile_canonical(&raw, false);
        let request = GenerationRequest::assemble(
            &raw,
            Some(&ImageInput::default()),
            output,
            &EngineSettings::default(),
        );
        assert_eq!(roles(&request), vec![ReferenceRole::Subject]);
    }

    #[test]
    fn test_payload_carries_prompts_and_settings() {
        let request_file = GenerationRequestFile::from_json(FULL_REQUEST_JSON).unwrap();
        let config = CompilerConfig::from_toml("[engine]\nguidance_scale = 5.0").unwrap();
        let output = config
            .build_compiler()
            .compile_raw(&request_file.input, request_file.has_face_image());
        let positive = output.positive_prompt.clone();

        let request = GenerationRequest::assemble(
            &request_file.input,
            request_file.face_image(),
            output,
            &config.engine,
        );
        assert_eq!(request.prompt, positive);
        assert_eq!(request.guidance_scale, 5.0);
        assert_eq!(request.num_inference_steps, 24);
        assert_eq!(request.image_size, "portrait_9_16");
        assert_eq!(request.aspect_ratio.as_deref(), Some("9:16"));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["negative_prompt"], request.negative_prompt.as_str());
        assert_eq!(json["metadata"]["version"], "v2");
        assert_eq!(json["reference_images"][0]["role"], "subject");
        assert_eq!(json["reference_images"][0]["mimeType"], "image/png");
        assert_eq!(json["reference_images"][2]["role"], "face");
    }

    #[test]
    fn test_legacy_payload_omits_metadata() {
        let raw = product_input();
        let output = compile_with_legacy(&raw, false);
        let request = GenerationRequest::assemble(&raw, None, output, &EngineSettings::default());
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("metadata").is_none());
        assert!(json.get("aspect_ratio").is_none());
    }

    #[test]
    fn test_shipped_sample_request_compiles() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/request.json");
        let request = GenerationRequestFile::from_file(path).unwrap();
        assert!(request.has_face_image());

        let output = compile_canonical(&request.input, request.has_face_image());
        assert!(has_clause(&output.positive_prompt, "face identity locked"));

        let payload = GenerationRequest::assemble(
            &request.input,
            request.face_image(),
            output,
            &EngineSettings::default(),
        );
        assert_eq!(roles(&payload), vec![ReferenceRole::Subject, ReferenceRole::Face]);
        assert_eq!(payload.image_size, "portrait_4_3");
    }
}
