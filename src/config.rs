//! Configuration module.
//!
//! Defines the command-line interface with `clap`: the input file, which
//! document shape to print, and logging.

use clap::Parser;
use std::path::PathBuf;

use crate::present::Shape;

/// Decode an ELF64 object and print its structure as JSON.
///
/// Headers, section contents (string and symbol tables) and program headers
/// are printed either as raw numbers or with names resolved.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// ELF64 object to inspect
    pub file: PathBuf,

    /// Document shape
    #[arg(long, value_enum, default_value_t = Shape::Decoded)]
    pub shape: Shape,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", help = "Set the logging level")]
    pub log_level: String,
}
