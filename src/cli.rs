//! CLI definitions
//!
//! Two positional arguments: the image to crop and where to write the result.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Usage line printed when an argument is missing
pub const USAGE: &str = "Usage: autocrop INPUT_PATH OUTPUT_PATH";

/// Process exit codes
pub mod exit_codes {
    /// Cropped successfully, or usage printed
    pub const SUCCESS: i32 = 0;
    /// Decode, encode, IO or internal failure
    pub const GENERAL_ERROR: i32 = 1;
    /// Input file does not exist
    pub const INPUT_NOT_FOUND: i32 = 3;
}

/// Trim dark margins from an image
#[derive(Debug, Parser)]
#[command(name = "autocrop", version, about)]
pub struct Cli {
    /// Image to crop
    #[arg(value_name = "INPUT_PATH")]
    pub input: Option<PathBuf>,

    /// Where to write the cropped image
    #[arg(value_name = "OUTPUT_PATH")]
    pub output: Option<PathBuf>,

    /// Anything after the two paths is ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub extra: Vec<OsString>,
}

impl Cli {
    /// Input and output paths, if both were given
    pub fn paths(&self) -> Option<(&PathBuf, &PathBuf)> {
        match (&self.input, &self.output) {
            (Some(input), Some(output)) => Some((input, output)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_paths() {
        let cli = Cli::try_parse_from(["autocrop", "in.png", "out.png"]).unwrap();
        let (input, output) = cli.paths().unwrap();
        assert_eq!(input, &PathBuf::from("in.png"));
        assert_eq!(output, &PathBuf::from("out.png"));
    }

    #[test]
    fn test_parse_missing_output() {
        let cli = Cli::try_parse_from(["autocrop", "in.png"]).unwrap();
        assert!(cli.paths().is_none());
    }

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::try_parse_from(["autocrop"]).unwrap();
        assert!(cli.paths().is_none());
    }

    #[test]
    fn test_ignores_extra_args() {
        let cli = Cli::try_parse_from(["autocrop", "a.png", "b.png", "c.png", "-x"]).unwrap();
        let (input, output) = cli.paths().unwrap();
        assert_eq!(input, &PathBuf::from("a.png"));
        assert_eq!(output, &PathBuf::from("b.png"));
        assert_eq!(cli.extra.len(), 2);
    }

    #[test]
    fn test_exit_codes_distinct() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_ne!(exit_codes::GENERAL_ERROR, exit_codes::SUCCESS);
        assert_ne!(exit_codes::INPUT_NOT_FOUND, exit_codes::GENERAL_ERROR);
    }
}
