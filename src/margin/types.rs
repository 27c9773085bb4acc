//! Common types for the autocrop module

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Autocrop error types
#[derive(Debug, Error)]
pub enum AutocropError {
    #[error("Image not found: {0}")]
    ImageNotFound(PathBuf),

    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Failed to encode image: {0}")]
    Encode(String),

    #[error("Invalid bounds {bounds} for {width}x{height} image")]
    InvalidBounds {
        bounds: Bounds,
        width: u32,
        height: u32,
    },

    #[error("Pixel data length {actual} does not match {width}x{height} RGBA ({expected} bytes)")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AutocropError>;

/// Inclusive content rectangle `(x_min, x_max, y_min, y_max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x_min: u32,
    pub x_max: u32,
    pub y_min: u32,
    pub y_max: u32,
}

impl Bounds {
    /// Bounds covering a whole non-empty image
    ///
    /// Returns `None` when either dimension is zero.
    pub fn full(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            x_min: 0,
            x_max: width - 1,
            y_min: 0,
            y_max: height - 1,
        })
    }

    /// Width of the region in pixels
    pub fn width(&self) -> u32 {
        self.x_max - self.x_min + 1
    }

    /// Height of the region in pixels
    pub fn height(&self) -> u32 {
        self.y_max - self.y_min + 1
    }

    /// Check that the region is ordered and lies inside a `width` x `height` image
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.x_min <= self.x_max
            && self.y_min <= self.y_max
            && self.x_max < width
            && self.y_max < height
    }

    /// Check whether the region spans the whole image
    pub fn is_full_frame(&self, width: u32, height: u32) -> bool {
        Self::full(width, height) == Some(*self)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

/// Outcome of one autocrop run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropReport {
    /// Dimensions before cropping
    pub original_size: (u32, u32),
    /// Dimensions after cropping
    pub cropped_size: (u32, u32),
    /// Region that was kept; `None` for zero-area input
    pub bounds: Option<Bounds>,
}

impl CropReport {
    /// Whether any margin was removed
    pub fn was_cropped(&self) -> bool {
        self.original_size != self.cropped_size
    }
}
