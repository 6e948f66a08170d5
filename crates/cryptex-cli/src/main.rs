mod cli;
mod commands;
mod sets;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the pattern
    let level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("cryptex={}", level).parse()?)
                .add_directive(format!("cryptex_core={}", level).parse()?),
        )
        .init();

    commands::create::run(&args)
}
