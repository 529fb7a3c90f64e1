//! techcolor - rewrite symbolic color names in tech files as hex RGB codes.
//!
//! Reads comma separated text, replaces every cell that exactly matches a
//! palette color name with its six-digit hex code and writes the rows back
//! out in the same order and shape.

pub mod cli;
pub mod color;
pub mod config;
pub mod transform;

pub use color::{ColorError, Rgb};
pub use config::Config;
pub use transform::{transform, transform_file, Summary, TransformError};
