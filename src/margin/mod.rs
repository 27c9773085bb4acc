//! Margin Auto-Crop module
//!
//! Finds the tightest rectangle containing every pixel brighter than a cutoff
//! and crops the image down to it.
//!
//! # Features
//!
//! - Four independent directional scans with early exit
//! - Optional parallel scanning with rayon
//! - Out-of-place region copy installed into the caller's buffer
//! - Configurable alpha handling for the cropped pixels
//!
//! # Example
//!
//! ```rust
//! use autocrop::{AutocropOptions, BoundsFinder, PixelBuffer, RegionCropper};
//!
//! let mut buffer = PixelBuffer::blank(10, 10, [0, 0, 0, 255]);
//! buffer.set_rgba(3, 7, [200, 200, 200, 255]);
//!
//! let options = AutocropOptions::default();
//! let bounds = BoundsFinder::find_crop_coordinates(&buffer, &options).unwrap();
//! RegionCropper::crop(&mut buffer, bounds, options.alpha_policy).unwrap();
//!
//! assert_eq!(buffer.dimensions(), (1, 1));
//! ```

// Submodules
mod bounds;
mod region;
mod types;

// Re-export public API
pub use bounds::BoundsFinder;
pub use region::RegionCropper;
pub use types::{AutocropError, Bounds, CropReport, Result};

// ============================================================
// Constants
// ============================================================

/// Brightness above which a pixel counts as content (0-255)
pub const BRIGHTNESS_CUTOFF: u8 = 99;

/// Alpha written by [`AlphaPolicy::Opaque`]
const OPAQUE_ALPHA: u8 = 255;

// ============================================================
// Options
// ============================================================

/// Autocrop options
#[derive(Debug, Clone)]
pub struct AutocropOptions {
    /// Pixels with brightness strictly greater than this are content
    pub brightness_cutoff: u8,
    /// How the four directional scans are scheduled
    pub scan_strategy: ScanStrategy,
    /// What happens to the alpha byte of cropped pixels
    pub alpha_policy: AlphaPolicy,
}

impl Default for AutocropOptions {
    fn default() -> Self {
        Self {
            brightness_cutoff: BRIGHTNESS_CUTOFF,
            scan_strategy: ScanStrategy::Sequential,
            alpha_policy: AlphaPolicy::Preserve,
        }
    }
}

impl AutocropOptions {
    /// Create a new options builder
    pub fn builder() -> AutocropOptionsBuilder {
        AutocropOptionsBuilder::default()
    }

    /// Options tuned for large images: scans run on the rayon pool
    pub fn parallel() -> Self {
        Self {
            scan_strategy: ScanStrategy::Parallel,
            ..Default::default()
        }
    }
}

/// Builder for AutocropOptions
#[derive(Debug, Default)]
pub struct AutocropOptionsBuilder {
    options: AutocropOptions,
}

impl AutocropOptionsBuilder {
    /// Set brightness cutoff (0-255)
    #[must_use]
    pub fn brightness_cutoff(mut self, cutoff: u8) -> Self {
        self.options.brightness_cutoff = cutoff;
        self
    }

    /// Set scan strategy
    #[must_use]
    pub fn scan_strategy(mut self, strategy: ScanStrategy) -> Self {
        self.options.scan_strategy = strategy;
        self
    }

    /// Set alpha policy
    #[must_use]
    pub fn alpha_policy(mut self, policy: AlphaPolicy) -> Self {
        self.options.alpha_policy = policy;
        self
    }

    /// Build the options
    #[must_use]
    pub fn build(self) -> AutocropOptions {
        self.options
    }
}

/// Scheduling of the directional scans
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanStrategy {
    /// All four scans on the calling thread
    #[default]
    Sequential,
    /// Vertical and horizontal scan pairs on the rayon pool
    Parallel,
}

/// Alpha channel handling for cropped pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlphaPolicy {
    /// Copy the source alpha byte
    #[default]
    Preserve,
    /// Force every cropped pixel fully opaque
    Opaque,
}

impl AlphaPolicy {
    /// Alpha byte to write for a source pixel with alpha `source`
    #[inline]
    pub fn apply(self, source: u8) -> u8 {
        match self {
            AlphaPolicy::Preserve => source,
            AlphaPolicy::Opaque => OPAQUE_ALPHA,
        }
    }
}
