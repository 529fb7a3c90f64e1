//! Run configuration.

use std::path::PathBuf;

/// Paths for a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tech file to read
    pub input: PathBuf,
    /// File to create or overwrite with the converted rows
    pub output: PathBuf,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}
