//! Pixel threshold detectors for spots and pest damage

use super::PixelBuffer;

/// Brownish or dark-spot pixel
pub fn is_spot_pixel(r: u8, g: u8, b: u8) -> bool {
    let brownish = r < 100 && g < 80 && b < 60;
    let dark_spot = r < 50 && g < 50 && b < 50;
    brownish || dark_spot
}

/// Hole or dark-mark pixel
pub fn is_pest_damage_pixel(r: u8, g: u8, b: u8) -> bool {
    let hole = r < 30 && g < 30 && b < 30;
    let dark_mark = r < 50 && g < 40 && b < 40;
    hole || dark_mark
}

fn pixel_ratio(buffer: &PixelBuffer<'_>, predicate: impl Fn(u8, u8, u8) -> bool) -> f64 {
    let hits = buffer
        .pixels()
        .filter(|px| predicate(px[0], px[1], px[2]))
        .count();
    hits as f64 / buffer.pixel_count() as f64
}

/// Fraction of pixels that look like disease spots, in [0, 1]
pub fn detect_spot_ratio(buffer: &PixelBuffer<'_>) -> f64 {
    pixel_ratio(buffer, is_spot_pixel)
}

/// Fraction of pixels that look like pest damage, in [0, 1]
pub fn detect_pest_damage_ratio(buffer: &PixelBuffer<'_>) -> f64 {
    pixel_ratio(buffer, is_pest_damage_pixel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_predicates() {
        assert!(is_spot_pixel(90, 70, 50));
        assert!(is_spot_pixel(40, 40, 40));
        assert!(!is_spot_pixel(100, 70, 50));
        assert!(!is_spot_pixel(200, 30, 30));
    }

    #[test]
    fn test_pest_predicates() {
        assert!(is_pest_damage_pixel(10, 10, 10));
        assert!(is_pest_damage_pixel(45, 35, 35));
        assert!(!is_pest_damage_pixel(45, 45, 35));
        assert!(!is_pest_damage_pixel(60, 10, 10));
    }

    #[test]
    fn test_ratios() {
        // one spot-only pixel, one black pixel, two bright pixels
        let data = [
            90, 70, 50, 255, //
            0, 0, 0, 255, //
            220, 60, 40, 255, //
            220, 60, 40, 255,
        ];
        let buffer = PixelBuffer::new(2, 2, &data).unwrap();
        assert_eq!(detect_spot_ratio(&buffer), 0.5);
        assert_eq!(detect_pest_damage_ratio(&buffer), 0.25);
    }
}
