//! Region copy
//!
//! The destination is always built in fresh storage and only then swapped
//! into the caller's buffer, so no source pixel is overwritten before it has
//! been read.

use super::types::{AutocropError, Bounds, Result};
use super::{AlphaPolicy, OPAQUE_ALPHA};
use crate::buffer::{PixelBuffer, BYTES_PER_PIXEL};

/// Crops a pixel buffer to a rectangle
pub struct RegionCropper;

impl RegionCropper {
    /// Crop `buffer` in place to `bounds`
    ///
    /// On success the buffer holds only the selected region and its
    /// dimensions match the region. On error the buffer is left untouched.
    pub fn crop(buffer: &mut PixelBuffer, bounds: Bounds, alpha: AlphaPolicy) -> Result<()> {
        let cropped = Self::cropped(buffer, bounds, alpha)?;
        *buffer = cropped;
        Ok(())
    }

    /// Copy the `bounds` region of `src` into a new buffer
    pub fn cropped(src: &PixelBuffer, bounds: Bounds, alpha: AlphaPolicy) -> Result<PixelBuffer> {
        let (width, height) = src.dimensions();
        if !bounds.fits(width, height) {
            return Err(AutocropError::InvalidBounds {
                bounds,
                width,
                height,
            });
        }

        let new_width = bounds.width();
        let new_height = bounds.height();
        let row_len = new_width as usize * BYTES_PER_PIXEL;
        let src_bytes = src.as_bytes();

        let mut data = Vec::with_capacity(row_len * new_height as usize);
        for src_y in bounds.y_min..=bounds.y_max {
            let start = src.pixel_offset(bounds.x_min, src_y);
            let row = &src_bytes[start..start + row_len];
            match alpha {
                AlphaPolicy::Preserve => data.extend_from_slice(row),
                AlphaPolicy::Opaque => {
                    for pixel in row.chunks_exact(BYTES_PER_PIXEL) {
                        data.extend_from_slice(&pixel[..3]);
                        data.push(OPAQUE_ALPHA);
                    }
                }
            }
        }

        PixelBuffer::new(new_width, new_height, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let mut buffer = PixelBuffer::blank(width, height, [0, 0, 0, 0]);
        for y in 0..height {
            for x in 0..width {
                buffer.set_rgba(x, y, [x as u8, y as u8, (x + y) as u8, (x * y) as u8]);
            }
        }
        buffer
    }

    // TC-RGN-001: New dimensions follow the bounds
    #[test]
    fn test_crop_dimensions() {
        let mut buffer = gradient(10, 8);
        let bounds = Bounds {
            x_min: 2,
            x_max: 6,
            y_min: 1,
            y_max: 3,
        };

        RegionCropper::crop(&mut buffer, bounds, AlphaPolicy::Preserve).unwrap();

        assert_eq!(buffer.dimensions(), (5, 3));
        assert_eq!(buffer.as_bytes().len(), 5 * 3 * 4);
    }

    // TC-RGN-002: Pixel mapping (dst + min = src)
    #[test]
    fn test_crop_pixel_mapping() {
        let src = gradient(10, 8);
        let bounds = Bounds {
            x_min: 4,
            x_max: 9,
            y_min: 2,
            y_max: 7,
        };

        let dst = RegionCropper::cropped(&src, bounds, AlphaPolicy::Preserve).unwrap();

        for y in 0..dst.height() {
            for x in 0..dst.width() {
                assert_eq!(dst.rgba(x, y), src.rgba(x + 4, y + 2));
            }
        }
    }

    // TC-RGN-003: Overlapping geometry does not corrupt pixels
    #[test]
    fn test_overlap_read_before_write() {
        // Region starts one pixel in, so every destination offset lies before
        // its source offset inside the same original storage.
        let original = gradient(9, 9);
        let mut buffer = original.clone();
        let bounds = Bounds {
            x_min: 1,
            x_max: 8,
            y_min: 1,
            y_max: 8,
        };

        RegionCropper::crop(&mut buffer, bounds, AlphaPolicy::Preserve).unwrap();

        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(buffer.rgba(x, y), original.rgba(x + 1, y + 1));
            }
        }
    }

    // TC-RGN-004: Full-frame crop
    #[test]
    fn test_full_frame_crop_is_identity() {
        let original = gradient(6, 5);
        let mut buffer = original.clone();

        RegionCropper::crop(&mut buffer, Bounds::full(6, 5).unwrap(), AlphaPolicy::Preserve)
            .unwrap();

        assert_eq!(buffer, original);
    }

    #[test]
    fn test_alpha_preserve() {
        let mut buffer = PixelBuffer::blank(3, 3, [10, 20, 30, 255]);
        buffer.set_rgba(1, 1, [200, 201, 202, 7]);
        let bounds = Bounds {
            x_min: 1,
            x_max: 1,
            y_min: 1,
            y_max: 1,
        };

        RegionCropper::crop(&mut buffer, bounds, AlphaPolicy::Preserve).unwrap();
        assert_eq!(buffer.rgba(0, 0), [200, 201, 202, 7]);
    }

    #[test]
    fn test_alpha_opaque() {
        let src = gradient(4, 4);
        let bounds = Bounds {
            x_min: 1,
            x_max: 3,
            y_min: 2,
            y_max: 3,
        };

        let dst = RegionCropper::cropped(&src, bounds, AlphaPolicy::Opaque).unwrap();

        for y in 0..dst.height() {
            for x in 0..dst.width() {
                let [r, g, b, a] = dst.rgba(x, y);
                assert_eq!([r, g, b], src.rgb(x + 1, y + 2));
                assert_eq!(a, 255);
            }
        }
    }

    // TC-RGN-005: Invalid bounds are rejected
    #[test]
    fn test_invalid_bounds() {
        let mut buffer = gradient(5, 5);
        let original = buffer.clone();

        let out_of_range = Bounds {
            x_min: 0,
            x_max: 5,
            y_min: 0,
            y_max: 4,
        };
        let result = RegionCropper::crop(&mut buffer, out_of_range, AlphaPolicy::Preserve);
        assert!(matches!(
            result,
            Err(AutocropError::InvalidBounds {
                width: 5,
                height: 5,
                ..
            })
        ));

        let inverted = Bounds {
            x_min: 3,
            x_max: 1,
            y_min: 0,
            y_max: 0,
        };
        assert!(RegionCropper::crop(&mut buffer, inverted, AlphaPolicy::Preserve).is_err());

        assert_eq!(buffer, original);
    }

    #[test]
    fn test_zero_area_source_rejects_any_bounds() {
        let buffer = PixelBuffer::blank(0, 0, [0, 0, 0, 0]);
        let bounds = Bounds {
            x_min: 0,
            x_max: 0,
            y_min: 0,
            y_max: 0,
        };
        assert!(RegionCropper::cropped(&buffer, bounds, AlphaPolicy::Preserve).is_err());
    }
}
