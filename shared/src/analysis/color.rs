//! Average color and RGB to HSV conversion

use serde::{Deserialize, Serialize};

use super::PixelBuffer;

/// Averaged RGB triple, channels in 0-255
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// HSV triple: hue in [0, 360), saturation and value in [0, 100]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Arithmetic mean of each color channel across every pixel.
///
/// Alpha is ignored. `PixelBuffer` guarantees at least one pixel.
pub fn average_color(buffer: &PixelBuffer<'_>) -> Rgb {
    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for px in buffer.pixels() {
        r += u64::from(px[0]);
        g += u64::from(px[1]);
        b += u64::from(px[2]);
    }

    let count = buffer.pixel_count() as f64;
    Rgb {
        r: r as f64 / count,
        g: g as f64 / count,
        b: b as f64 / count,
    }
}

/// Convert RGB (0-255 per channel) to HSV.
///
/// Ties between channels resolve red first, then green, then blue. Hue is 0
/// for achromatic colors.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> Hsv {
    let r = r / 255.0;
    let g = g / 255.0;
    let b = b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;

    let h = if diff == 0.0 {
        0.0
    } else if max == r {
        (60.0 * ((g - b) / diff) + 360.0).rem_euclid(360.0)
    } else if max == g {
        (60.0 * ((b - r) / diff) + 120.0).rem_euclid(360.0)
    } else {
        (60.0 * ((r - g) / diff) + 240.0).rem_euclid(360.0)
    };

    let s = if max == 0.0 { 0.0 } else { diff / max * 100.0 };
    let v = max * 100.0;

    Hsv { h, s, v }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsv(rgb.r, rgb.g, rgb.b)
    }
}
