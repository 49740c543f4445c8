//! Borrowed RGBA pixel buffers

use crate::error::{CoreError, CoreResult};

/// Read-only view over tightly packed RGBA8 samples
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Wrap `data`, which must hold exactly `width * height` RGBA pixels.
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> CoreResult<Self> {
        let pixel_count = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| CoreError::InvalidInput("Image dimensions overflow".to_string()))?;

        if pixel_count == 0 {
            return Err(CoreError::InvalidInput(
                "Pixel buffer contains no pixels".to_string(),
            ));
        }

        let expected = pixel_count
            .checked_mul(4)
            .ok_or_else(|| CoreError::InvalidInput("Image dimensions overflow".to_string()))?;
        if data.len() != expected {
            return Err(CoreError::InvalidInput(format!(
                "Expected {} bytes for a {}x{} RGBA buffer, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels; never zero
    pub fn pixel_count(&self) -> usize {
        self.data.len() / 4
    }

    /// Iterate `[r, g, b, a]` samples in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = &'a [u8]> + 'a {
        let data: &'a [u8] = self.data;
        data.chunks_exact(4)
    }
}
