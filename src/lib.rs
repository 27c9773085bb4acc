//! autocrop - trim dark uniform margins from raster images
//!
//! Pixels whose RGB average is above a brightness cutoff count as content;
//! everything outside the tightest rectangle around them is cut away.
//!
//! # Modules
//!
//! - [`buffer`] - decoded RGBA pixel buffer and brightness
//! - [`margin`] - bounds detection and region cropping
//! - [`pipeline`] - decode, crop, encode
//! - [`cli`] - command-line definitions and exit codes

pub mod buffer;
pub mod cli;
pub mod margin;
pub mod pipeline;

// Autocrop core
pub use margin::{
    AlphaPolicy, AutocropError, AutocropOptions, AutocropOptionsBuilder, Bounds, BoundsFinder,
    CropReport, RegionCropper, Result, ScanStrategy, BRIGHTNESS_CUTOFF,
};

// Pixel buffer
pub use buffer::{brightness, PixelBuffer};

// Pipeline
pub use pipeline::Autocropper;

// CLI
pub use cli::{exit_codes, Cli, USAGE};
