//! Autocrop pipeline
//!
//! Glues the image decoder, the bounds finder, the region cropper and the
//! encoder together: bytes in, cropped bytes out in the same image format.

use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;
use tracing::{info, warn};

use crate::buffer::PixelBuffer;
use crate::margin::{
    AutocropError, AutocropOptions, BoundsFinder, CropReport, RegionCropper, Result,
};

/// Runs the decode, crop, encode sequence with fixed options
#[derive(Debug, Clone, Default)]
pub struct Autocropper {
    options: AutocropOptions,
}

impl Autocropper {
    pub fn new(options: AutocropOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AutocropOptions {
        &self.options
    }

    /// Crop a decoded buffer in place
    ///
    /// Zero-area buffers are returned unchanged.
    pub fn autocrop_buffer(&self, buffer: &mut PixelBuffer) -> Result<CropReport> {
        let original_size = buffer.dimensions();

        let Some(bounds) = BoundsFinder::find_crop_coordinates(buffer, &self.options) else {
            warn!(
                width = original_size.0,
                height = original_size.1,
                "zero-area image, nothing to crop"
            );
            return Ok(CropReport {
                original_size,
                cropped_size: original_size,
                bounds: None,
            });
        };

        RegionCropper::crop(buffer, bounds, self.options.alpha_policy)?;

        let report = CropReport {
            original_size,
            cropped_size: buffer.dimensions(),
            bounds: Some(bounds),
        };
        info!(
            %bounds,
            from = ?report.original_size,
            to = ?report.cropped_size,
            "cropped image"
        );
        Ok(report)
    }

    /// Decode `bytes`, crop, and re-encode in the input's own format
    pub fn autocrop_bytes(&self, bytes: &[u8]) -> Result<(Vec<u8>, CropReport)> {
        let format =
            image::guess_format(bytes).map_err(|e| AutocropError::Decode(e.to_string()))?;
        let img = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| AutocropError::Decode(e.to_string()))?;

        let mut buffer = PixelBuffer::from(img.to_rgba8());
        let report = self.autocrop_buffer(&mut buffer)?;

        let encoded = Self::encode(buffer, format)?;
        Ok((encoded, report))
    }

    /// Read `input`, crop it, and write the result to `output`
    pub fn autocrop_file(&self, input: &Path, output: &Path) -> Result<CropReport> {
        if !input.exists() {
            return Err(AutocropError::ImageNotFound(input.to_path_buf()));
        }

        let bytes = std::fs::read(input)?;
        let (encoded, report) = self.autocrop_bytes(&bytes)?;
        std::fs::write(output, encoded)?;

        Ok(report)
    }

    fn encode(buffer: PixelBuffer, format: ImageFormat) -> Result<Vec<u8>> {
        let rgba = RgbaImage::try_from(buffer)?;
        let img = Self::for_format(rgba, format);

        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, format)
            .map_err(|e| AutocropError::Encode(e.to_string()))?;
        Ok(out.into_inner())
    }

    /// Convert to a color type the encoder for `format` accepts
    fn for_format(rgba: RgbaImage, format: ImageFormat) -> DynamicImage {
        let img = DynamicImage::ImageRgba8(rgba);
        match format {
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8()),
            ImageFormat::Farbfeld => DynamicImage::ImageRgba16(img.to_rgba16()),
            ImageFormat::OpenExr => DynamicImage::ImageRgba32F(img.to_rgba32f()),
            ImageFormat::Hdr => DynamicImage::ImageRgb32F(img.to_rgb32f()),
            _ => img,
        }
    }
}
