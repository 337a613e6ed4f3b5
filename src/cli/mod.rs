// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON for output (for scripting)
    #[arg(long)]
    pub json: bool,

    /// Breach range API base URL
    #[arg(long, env = "PASSGUARD_RANGE_API")]
    pub range_api: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
