#![deny(clippy::all, clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use runtime::Args;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    runtime::run(&args)?;
    Ok(())
}
