mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands, GuestbookCommands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!(
        "🏛️ Digital Palace CLI v{} starting up.",
        env!("CARGO_PKG_VERSION")
    );
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = match cli.command {
        Commands::Tour(args) => {
            info!("Dispatching to 'tour' command.");
            commands::tour::run(args)
        }
        Commands::Visit(args) => {
            info!("Dispatching to 'visit' command.");
            commands::visit::run(args)
        }
        Commands::Primes(args) => {
            info!("Dispatching to 'primes' command.");
            commands::primes::run(args)
        }
        Commands::Spiral(args) => {
            info!("Dispatching to 'spiral' command.");
            commands::spiral::run(args)
        }
        Commands::Guestbook(args) => match args.command {
            GuestbookCommands::Show { guestbook } => {
                info!("Dispatching to 'guestbook show' command.");
                commands::guestbook::show(guestbook)
            }
        },
    };

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
