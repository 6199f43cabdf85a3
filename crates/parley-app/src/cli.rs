use std::path::PathBuf;

use clap::Parser;

/// Parley: chat with Google Gemini from the terminal.
#[derive(Parser, Debug)]
#[command(name = "parley", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model to chat with, overriding the config file.
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Directory for exported transcripts.
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}
