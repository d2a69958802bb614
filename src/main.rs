//! Intake CLI - guided request wizard for audio engineering services

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use intake::cli::{Cli, Commands};
use intake::errors::to_exit_code;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; the wizard owns the terminal, so it stays quiet unless asked
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else if cli.is_interactive() {
        "off"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> intake::Result<()> {
    match cli.command {
        None | Some(Commands::Start) => intake::cli::commands::start::run(cli.cwd.as_deref()).await,
        Some(Commands::Steps { json }) => intake::cli::commands::steps::run(json).await,
        Some(Commands::Replay { file, json }) => {
            intake::cli::commands::replay::run(cli.cwd.as_deref(), &file, json).await
        }
        Some(Commands::CheckContact { name, email, phone }) => {
            intake::cli::commands::check_contact::run(&name, &email, &phone).await
        }
    }
}
