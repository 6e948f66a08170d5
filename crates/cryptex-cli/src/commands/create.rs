//! Create command implementation.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use cryptex_core::{Charset, PatternConfig, WheelAssembly};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cli::{Args, OutputFormat};
use crate::sets::parse_sets;

/// Pattern and wheel statistics for JSON output
#[derive(Debug, Serialize)]
pub struct PatternReport<'a> {
    #[serde(flatten)]
    pub config: &'a PatternConfig,
    pub wheels: usize,
    pub period: Option<u128>,
    pub max_unique_length: Option<u128>,
    pub pattern: String,
}

/// Run the create command
pub fn run(args: &Args) -> Result<()> {
    let config = build_config(args.length, args.sets.as_deref(), args.presets.as_deref());
    let assembly = prepare(&config)?;

    match (args.format, &args.output) {
        (OutputFormat::Text, Some(path)) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_text(BufWriter::new(file), config.length, assembly)
                .with_context(|| format!("Failed to write pattern to {}", path.display()))?;
            info!("Wrote pattern to {}", path.display());
        }
        (OutputFormat::Text, None) => {
            match write_text(BufWriter::new(io::stdout().lock()), config.length, assembly) {
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                    debug!("Stdout closed, stopping output");
                }
                result => result.context("Failed to write pattern to stdout")?,
            }
        }
        (OutputFormat::Json, Some(path)) => write_output(path, &render_json(&config, assembly)?)?,
        (OutputFormat::Json, None) => print!("{}", render_json(&config, assembly)?),
    }

    Ok(())
}

/// Clamp a requested length to zero or more.
///
/// A negative length yields an empty pattern rather than an error.
pub fn effective_length(length: i64) -> usize {
    usize::try_from(length).unwrap_or_else(|_| {
        if length < 0 {
            warn!("Negative length {}, producing an empty pattern", length);
            0
        } else {
            usize::MAX
        }
    })
}

/// Build a pattern configuration from raw CLI values
pub fn build_config(length: i64, sets: Option<&str>, presets: Option<&[Charset]>) -> PatternConfig {
    let builder = PatternConfig::builder().length(effective_length(length));
    match (sets, presets) {
        (Some(sets), _) => builder.sets(parse_sets(sets)).build(),
        (None, Some(presets)) => builder.charsets(presets).build(),
        (None, None) => builder.build(),
    }
}

/// Build the assembly for `config`.
///
/// Fails before any output is produced when the sets are invalid.
pub fn prepare(config: &PatternConfig) -> Result<WheelAssembly> {
    let assembly = config.assembly()?;

    debug!(
        "Creating pattern: length={}, wheels={}, period={:?}",
        config.length,
        assembly.wheel_count(),
        assembly.period()
    );

    if let Some(max) = assembly.max_unique_length()
        && config.length as u128 > max
    {
        warn!(
            "Requested length {} exceeds unique pattern length {}, output will repeat",
            config.length, max
        );
    }

    Ok(assembly)
}

/// Stream `length` pattern characters and a trailing newline to `out`.
///
/// Only one character is held at a time, so the length is bounded by the
/// writer, not by memory.
pub fn write_text<W: Write>(mut out: W, length: usize, assembly: WheelAssembly) -> io::Result<()> {
    let mut buf = [0u8; 4];
    for symbol in cryptex_core::generate(assembly).take(length) {
        out.write_all(symbol.encode_utf8(&mut buf).as_bytes())?;
    }
    out.write_all(b"\n")?;
    out.flush()
}

/// Generate the pattern and format it as a JSON report
pub fn render_json(config: &PatternConfig, assembly: WheelAssembly) -> Result<String> {
    let wheels = assembly.wheel_count();
    let period = assembly.period();
    let max_unique_length = assembly.max_unique_length();

    let report = PatternReport {
        config,
        wheels,
        period,
        max_unique_length,
        pattern: cryptex_core::pattern_create(config.length, assembly),
    };
    Ok(format!("{}\n", serde_json::to_string_pretty(&report)?))
}

/// Write rendered output to a file
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write pattern to {}", path.display()))?;
    info!("Wrote pattern to {}", path.display());
    Ok(())
}
