use anyhow::Context;
use std::io;
use tinyos_cli::{Shell, ShellConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so stdout carries only the session
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut shell = Shell::new(ShellConfig::default());
    shell
        .run(io::stdin().lock(), io::stdout().lock())
        .context("failed to write shell output")?;

    Ok(())
}
