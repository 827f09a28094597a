//! Photography mode resolution tests
mod common;
use common::*;
use studio_prompt::prelude::*;

#[cfg(test)]
mod mode_tests {
    use super::*;

    fn resolve(
        requested: RequestedMode,
        background: bool,
        style: Option<&str>,
        category: Option<&str>,
    ) -> Mode {
        let raw = RawGenerationInput {
            mode: requested,
            background_image: background.then(image),
            style: style.map(str::to_string),
            category: category.map(str::to_string),
            ..product_input()
        };
        normalize(&raw, false).mode
    }

    #[test]
    fn test_auto_requires_background_and_lifestyle_hint() {
        let style_hint = Some("Outdoor Cafe");
        let category_hint = Some("Tas");

        for background in [false, true] {
            for style in [None, style_hint] {
                for category in [None, category_hint] {
                    let expected = if background && (style.is_some() || category.is_some()) {
                        Mode::Lifestyle
                    } else {
                        Mode::Catalog
                    };
                    assert_eq!(
                        resolve(RequestedMode::Auto, background, style, category),
                        expected,
                        "background={} style={:?} category={:?}",
                        background,
                        style,
                        category
                    );
                }
            }
        }
    }

    #[test]
    fn test_explicit_mode_always_wins() {
        assert_eq!(
            resolve(RequestedMode::Catalog, true, Some("Lifestyle"), Some("Home Living")),
            Mode::Catalog
        );
        assert_eq!(
            resolve(RequestedMode::Lifestyle, false, None, None),
            Mode::Lifestyle
        );
    }

    #[test]
    fn test_every_lifestyle_label_counts() {
        for style in ["Lifestyle", "Indoor/Outdoor", "Outdoor Cafe"] {
            assert_eq!(
                resolve(RequestedMode::Auto, true, Some(style), None),
                Mode::Lifestyle
            );
        }
        for category in ["Home Living", "Food & Beverage", "Tas"] {
            assert_eq!(
                resolve(RequestedMode::Auto, true, None, Some(category)),
                Mode::Lifestyle
            );
        }
        assert_eq!(
            resolve(RequestedMode::Auto, true, Some("Studio Clean"), Some("Fashion")),
            Mode::Catalog
        );
    }

    #[test]
    fn test_resolver_is_callable_on_its_own() {
        let normalized = normalize(&product_input(), false);
        assert_eq!(
            resolve_photography_mode(&normalized, RequestedMode::Lifestyle),
            Mode::Lifestyle
        );
        assert_eq!(
            resolve_photography_mode(&normalized, RequestedMode::Auto),
            Mode::Catalog
        );
    }
}
