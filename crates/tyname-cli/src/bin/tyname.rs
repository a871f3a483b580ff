use anyhow::{Context, Result};
use clap::Parser;

use tyname_cli::args::CliArgs;
use tyname_cli::driver;

fn main() -> Result<()> {
    // Active only when TYNAME_LOG or RUST_LOG is set; see tracing_config.rs.
    tyname_cli::tracing_config::init_tracing().context("failed to install tracing subscriber")?;

    let args = CliArgs::parse();
    for line in driver::run(&args)? {
        println!("{line}");
    }
    Ok(())
}
