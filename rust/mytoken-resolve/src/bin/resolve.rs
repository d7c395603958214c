use std::io;

use anyhow::Result;
use clap::Parser;
use mytoken_resolve::{ResolveCli, run};
use tracing_subscriber::EnvFilter;

pub fn main() -> Result<()> {
    let cli = ResolveCli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log)?)
        .with_writer(io::stderr)
        .init();

    run(&cli, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
