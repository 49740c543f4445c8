//! Image heuristic tests
//!
//! Covers the color conversion, the pixel detectors, ripeness scoring and
//! the health classification priority.

use proptest::prelude::*;
use shared::{
    analyze_pixels, classify_health, detect_pest_damage_ratio, detect_spot_ratio, ripeness_score,
    rgb_to_hsv, HealthStatus, Hsv, Language, PixelBuffer,
};

/// Build an RGBA buffer from a list of RGB pixels
fn rgba(pixels: &[[u8; 3]]) -> Vec<u8> {
    pixels
        .iter()
        .flat_map(|p| [p[0], p[1], p[2], 255])
        .collect()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// A buffer with 20% spots and 90% pest marks is still diseased
    #[test]
    fn test_spot_check_wins_over_pest_check() {
        let health = classify_health(0.20, 0.90, Language::Chinese);
        assert_eq!(health.status, HealthStatus::Diseased);
        assert_eq!(health.disease_type.as_deref(), Some("炭疽病/霜霉病"));
        assert_eq!(
            health.recommendations,
            vec!["建议喷施多菌灵或代森锰锌", "及时清除病果，防止传染"]
        );
    }

    #[test]
    fn test_pest_infected_texts() {
        let health = classify_health(0.0, 0.10, Language::Chinese);
        assert_eq!(health.status, HealthStatus::PestInfected);
        assert_eq!(health.pest_type.as_deref(), Some("荔枝霜疫霉/炭疽病"));
        assert_eq!(health.recommendations.len(), 2);
    }

    #[test]
    fn test_ripeness_boundaries() {
        let score = ripeness_score(Hsv { h: 50.0, s: 30.0, v: 50.0 });
        assert!((score - 59.0).abs() < 1e-9);

        let score = ripeness_score(Hsv { h: 60.0, s: 80.0, v: 50.0 });
        assert!((score - 80.0).abs() < 1e-9);
    }

    /// 10 of 100 pixels are dark marks: pest damage wins over minor spots
    #[test]
    fn test_analyze_pest_damaged_fruit() {
        let mut pixels = vec![[210u8, 50u8, 60u8]; 90];
        pixels.extend(vec![[45u8, 35u8, 35u8]; 10]);
        let data = rgba(&pixels);
        let buffer = PixelBuffer::new(10, 10, &data).unwrap();

        assert!((detect_spot_ratio(&buffer) - 0.10).abs() < 1e-12);
        assert!((detect_pest_damage_ratio(&buffer) - 0.10).abs() < 1e-12);

        let result = analyze_pixels(&buffer, Language::English);
        assert_eq!(result.health_status, HealthStatus::PestInfected);
        assert!(result.pest_type.is_some());
        // 60 + (1 - 0.2) * 40 = 92
        assert_eq!(result.confidence, 92);
    }

    /// 8 of 100 pixels are brownish but not dark enough for pest marks
    #[test]
    fn test_analyze_lightly_spotted_fruit() {
        let mut pixels = vec![[210u8, 50u8, 60u8]; 92];
        pixels.extend(vec![[90u8, 70u8, 55u8]; 8]);
        let data = rgba(&pixels);
        let buffer = PixelBuffer::new(10, 10, &data).unwrap();

        let result = analyze_pixels(&buffer, Language::English);
        assert_eq!(result.health_status, HealthStatus::Damaged);
        assert_eq!(
            result.recommendations[0],
            "Minor spots found, strengthen orchard management"
        );
    }

    #[test]
    fn test_empty_buffer_is_invalid_input() {
        assert!(PixelBuffer::new(0, 0, &[]).is_err());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn pixel_strategy() -> impl Strategy<Value = [u8; 3]> {
        prop::array::uniform3(any::<u8>())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// HSV components stay in range for any RGB triple
        #[test]
        fn prop_hsv_in_range(r in 0.0f64..=255.0, g in 0.0f64..=255.0, b in 0.0f64..=255.0) {
            let hsv = rgb_to_hsv(r, g, b);
            prop_assert!(hsv.h >= 0.0 && hsv.h < 360.0);
            prop_assert!(hsv.s >= 0.0 && hsv.s <= 100.0 + 1e-9);
            prop_assert!(hsv.v >= 0.0 && hsv.v <= 100.0 + 1e-9);
        }

        /// Ripeness score stays in [0, 100] for any HSV input
        #[test]
        fn prop_ripeness_in_range(h in 0.0f64..360.0, s in 0.0f64..=100.0, v in 0.0f64..=100.0) {
            let score = ripeness_score(Hsv { h, s, v });
            prop_assert!((0.0..=100.0).contains(&score));
        }

        /// Detector ratios stay in [0, 1]
        #[test]
        fn prop_ratios_in_range(pixels in prop::collection::vec(pixel_strategy(), 1..200)) {
            let data = rgba(&pixels);
            let buffer = PixelBuffer::new(pixels.len() as u32, 1, &data).unwrap();
            let spot = detect_spot_ratio(&buffer);
            let pest = detect_pest_damage_ratio(&buffer);
            prop_assert!((0.0..=1.0).contains(&spot));
            prop_assert!((0.0..=1.0).contains(&pest));
        }

        /// Replacing a pixel with a black one never lowers either ratio
        #[test]
        fn prop_ratios_monotonic(
            pixels in prop::collection::vec(pixel_strategy(), 1..100),
            index in any::<prop::sample::Index>()
        ) {
            let data = rgba(&pixels);
            let before = PixelBuffer::new(pixels.len() as u32, 1, &data).unwrap();

            let mut darker = pixels.clone();
            darker[index.index(pixels.len())] = [0, 0, 0];
            let darker_data = rgba(&darker);
            let after = PixelBuffer::new(darker.len() as u32, 1, &darker_data).unwrap();

            prop_assert!(detect_spot_ratio(&after) >= detect_spot_ratio(&before));
            prop_assert!(detect_pest_damage_ratio(&after) >= detect_pest_damage_ratio(&before));
        }

        /// Analysis output respects its documented ranges
        #[test]
        fn prop_analysis_ranges(pixels in prop::collection::vec(pixel_strategy(), 1..100)) {
            let data = rgba(&pixels);
            let buffer = PixelBuffer::new(pixels.len() as u32, 1, &data).unwrap();
            let result = analyze_pixels(&buffer, Language::Chinese);
            prop_assert!(result.ripeness_score <= 100);
            prop_assert!(result.confidence <= 95);
        }
    }
}
