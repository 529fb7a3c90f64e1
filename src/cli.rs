//! CLI definitions for techcolor.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Replace color names in a tech file with their hex RGB codes.
#[derive(Parser, Debug)]
#[command(name = "techcolor")]
#[command(version)]
#[command(
    about = "Replace color names in a tech file with hex RGB codes",
    long_about = "Change any cell of the input whose value is a known color name \
                  (green, red, lightBlue, ...) to its hex counterpart.\n\n\
                  Every other cell is copied unchanged. Names are matched exactly \
                  and case-sensitively."
)]
pub struct Cli {
    /// Input file
    #[arg(short = 'i', value_name = "PATH")]
    pub input: PathBuf,

    /// Output file (created or overwritten)
    #[arg(short = 'o', value_name = "PATH")]
    pub output: PathBuf,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config::new(self.input, self.output)
    }
}
