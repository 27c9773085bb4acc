//! autocrop - trim dark margins from an image
//!
//! CLI entry point

use autocrop::{exit_codes, AutocropError, Autocropper, Cli, USAGE};
use clap::Parser;
use tracing::Level;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some((input, output)) = cli.paths() else {
        println!("{}", USAGE);
        std::process::exit(exit_codes::SUCCESS);
    };

    let result = Autocropper::default().autocrop_file(input, output);

    std::process::exit(match result {
        Ok(_) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                AutocropError::ImageNotFound(_) => exit_codes::INPUT_NOT_FOUND,
                _ => exit_codes::GENERAL_ERROR,
            }
        }
    });
}
