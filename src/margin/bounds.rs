//! Content bounds detection
//!
//! Each edge of the content rectangle is found by its own scan that stops at
//! the first pixel brighter than the cutoff. Scans that find nothing leave
//! their edge at the image border, so an image with no content at all keeps
//! its full size.

use tracing::debug;

use super::types::Bounds;
use super::{AutocropOptions, ScanStrategy};
use crate::buffer::{brightness, PixelBuffer};

/// Directional brightness scanner
pub struct BoundsFinder;

impl BoundsFinder {
    /// Find the smallest rectangle holding every pixel brighter than the cutoff
    ///
    /// Returns `None` for zero-width or zero-height buffers. Edges without
    /// content default to the image border independently of one another.
    pub fn find_crop_coordinates(
        buffer: &PixelBuffer,
        options: &AutocropOptions,
    ) -> Option<Bounds> {
        let full = Bounds::full(buffer.width(), buffer.height())?;
        let cutoff = options.brightness_cutoff;

        let ((y_min, y_max), (x_min, x_max)) = match options.scan_strategy {
            ScanStrategy::Sequential => (
                (
                    Self::scan_top(buffer, cutoff),
                    Self::scan_bottom(buffer, cutoff),
                ),
                (
                    Self::scan_left(buffer, cutoff),
                    Self::scan_right(buffer, cutoff),
                ),
            ),
            ScanStrategy::Parallel => rayon::join(
                || {
                    rayon::join(
                        || Self::scan_top(buffer, cutoff),
                        || Self::scan_bottom(buffer, cutoff),
                    )
                },
                || {
                    rayon::join(
                        || Self::scan_left(buffer, cutoff),
                        || Self::scan_right(buffer, cutoff),
                    )
                },
            ),
        };

        debug!(?y_min, ?y_max, ?x_min, ?x_max, cutoff, "directional scans finished");

        Some(Bounds {
            x_min: x_min.unwrap_or(full.x_min),
            x_max: x_max.unwrap_or(full.x_max),
            y_min: y_min.unwrap_or(full.y_min),
            y_max: y_max.unwrap_or(full.y_max),
        })
    }

    #[inline]
    fn is_content(buffer: &PixelBuffer, x: u32, y: u32, cutoff: u8) -> bool {
        brightness(buffer.rgb(x, y)) > cutoff
    }

    fn row_has_content(buffer: &PixelBuffer, y: u32, cutoff: u8) -> bool {
        (0..buffer.width()).any(|x| Self::is_content(buffer, x, y, cutoff))
    }

    fn column_has_content(buffer: &PixelBuffer, x: u32, cutoff: u8) -> bool {
        (0..buffer.height()).any(|y| Self::is_content(buffer, x, y, cutoff))
    }

    /// First row from the top with content
    fn scan_top(buffer: &PixelBuffer, cutoff: u8) -> Option<u32> {
        (0..buffer.height()).find(|&y| Self::row_has_content(buffer, y, cutoff))
    }

    /// First row from the bottom with content
    fn scan_bottom(buffer: &PixelBuffer, cutoff: u8) -> Option<u32> {
        (0..buffer.height())
            .rev()
            .find(|&y| Self::row_has_content(buffer, y, cutoff))
    }

    /// First column from the left with content
    fn scan_left(buffer: &PixelBuffer, cutoff: u8) -> Option<u32> {
        (0..buffer.width()).find(|&x| Self::column_has_content(buffer, x, cutoff))
    }

    /// First column from the right with content
    fn scan_right(buffer: &PixelBuffer, cutoff: u8) -> Option<u32> {
        (0..buffer.width())
            .rev()
            .find(|&x| Self::column_has_content(buffer, x, cutoff))
    }
}
