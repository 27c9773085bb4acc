//! Decoded RGBA pixel buffer
//!
//! The in-memory image every autocrop stage works on: `width * height` pixels,
//! four bytes each (R, G, B, A), row-major, top row first.

use image::{DynamicImage, RgbaImage};

use crate::margin::{AutocropError, Result};

/// Bytes per RGBA pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Owned RGBA8 pixel buffer
///
/// `data.len() == width * height * 4` holds for every value of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes, checking the length invariant
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::byte_len(width, height);
        if data.len() != expected {
            return Err(AutocropError::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Buffer with every pixel set to `rgba`
    pub fn blank(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = width as usize * height as usize;
        Self {
            width,
            height,
            data: rgba.repeat(pixels),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True for zero-width or zero-height images
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of pixel `(x, y)`
    #[inline]
    pub fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (self.width as usize * y as usize + x as usize) * BYTES_PER_PIXEL
    }

    /// RGB channels of pixel `(x, y)`
    #[inline]
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = self.pixel_offset(x, y);
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    /// RGBA channels of pixel `(x, y)`
    #[inline]
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = self.pixel_offset(x, y);
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    #[inline]
    pub fn set_rgba(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = self.pixel_offset(x, y);
        self.data[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&rgba);
    }

    fn byte_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * BYTES_PER_PIXEL
    }
}

/// Average of the RGB channels, truncated; alpha is ignored
#[inline]
pub fn brightness(rgb: [u8; 3]) -> u8 {
    let [r, g, b] = rgb;
    // max sum is 765, so the average always fits in u8
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

impl From<RgbaImage> for PixelBuffer {
    fn from(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

impl From<&DynamicImage> for PixelBuffer {
    fn from(img: &DynamicImage) -> Self {
        Self::from(img.to_rgba8())
    }
}

impl TryFrom<PixelBuffer> for RgbaImage {
    type Error = AutocropError;

    fn try_from(buffer: PixelBuffer) -> Result<Self> {
        let (width, height) = buffer.dimensions();
        let actual = buffer.data.len();
        RgbaImage::from_raw(width, height, buffer.data).ok_or(AutocropError::BufferSizeMismatch {
            width,
            height,
            expected: PixelBuffer::byte_len(width, height),
            actual,
        })
    }
}
