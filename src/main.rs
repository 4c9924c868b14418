//! altwise - accessible-name suggestions for `<svg>` and `<img>` markup.

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};
use crate::commands::SuggestOptions;

/// Logs go to stderr so stdout carries only results.
fn init_tracing(verbose: u8) {
    let env_filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Scan { files, json } => commands::scan(&files, json),
        Command::Suggest {
            files,
            config,
            endpoint,
            api_key,
            model,
            vision,
        } => {
            let options = SuggestOptions {
                config,
                endpoint,
                api_key,
                model,
                vision,
            };
            commands::suggest(&files, options).await
        }
    }
}
