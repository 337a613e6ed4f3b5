// src/main.rs
use clap::Parser;
use std::path::Path;

use passguard::cli::{handlers, Args, CliCommand};
use passguard::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(base) = &args.range_api {
        config.range_api_base = base.clone();
    }
    log::debug!("loaded config: {config:?}");

    match args.command {
        Some(CliCommand::Generate {
            length,
            no_upper,
            no_lower,
            no_digits,
            no_symbols,
            count,
        }) => handlers::handle_generate(
            &config, length, no_upper, no_lower, no_digits, no_symbols, count, args.json,
        ),
        Some(CliCommand::Strength { password }) => {
            handlers::handle_strength(&config, password, args.json)
        }
        Some(CliCommand::Check { password }) => {
            handlers::handle_check(&config, password, args.json).await
        }
        None => {
            use clap::CommandFactory;
            Args::command().print_help()?;
            Ok(())
        }
    }
    .map_err(|e| anyhow::anyhow!(e.to_string()))
}
