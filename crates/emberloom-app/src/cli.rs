use std::path::PathBuf;

use clap::Parser;

/// Emberloom: a native shell around the Cluck Farm web game.
#[derive(Parser, Debug)]
#[command(name = "emberloom", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error) or a full filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Load this https URL instead of the configured endpoint.
    #[arg(long)]
    pub url: Option<String>,

    /// Skip the splash screen.
    #[arg(long)]
    pub no_splash: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
