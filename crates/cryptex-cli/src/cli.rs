use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cryptex_core::Charset;

#[derive(Parser, Debug)]
#[command(name = "cryptex")]
#[command(version, about = "Create a unique cyclic pattern for locating buffer offsets")]
#[command(after_help = "Example:\n  cryptex -l 50 -s ABC,def,123\n  Ad1Ad2Ad3Ae1Ae2Ae3Af1Af2Af3Bd1Bd2Bd3Be1Be2Be3Bf1Bf")]
pub struct Args {
    /// Length of the pattern (negative values produce an empty pattern)
    #[arg(short, long, allow_negative_numbers = true)]
    pub length: i64,

    /// Custom pattern sets such as <ABC,def,123>, most significant first
    #[arg(short, long, env = "CRYPTEX_SETS")]
    pub sets: Option<String>,

    /// Built-in sets by name instead of literal sets, e.g. <upper,digits>
    #[arg(
        short,
        long,
        value_delimiter = ',',
        value_parser = Charset::parse,
        conflicts_with = "sets"
    )]
    pub presets: Option<Vec<Charset>>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the pattern to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The bare pattern followed by a newline
    Text,
    /// A JSON object with the pattern and its wheel statistics
    Json,
}
