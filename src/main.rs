// Sentinel - outreach message composer for failed account automation
// Main entry point

use anyhow::Result;
use clap::Parser;

use sentinel::cli::{self, Cli, Commands};
use sentinel::config::{config_source, load_config};
use sentinel::logging::{self, LogTarget};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
        // An explicit theme replaces per-element overrides from the file
        config.colors = None;
    }

    let command = cli.command.unwrap_or(Commands::Tui);

    // The TUI owns the terminal, so its logs go to a file
    let target = match (&command, config.log_file()) {
        (Commands::Tui, Some(path)) => LogTarget::File(path),
        _ => LogTarget::Stderr,
    };
    logging::init(&config.logging.level, target)?;
    match config_source(cli.config.as_deref()) {
        Some(path) => tracing::debug!(
            path = %path.display(),
            variant = config.variant.name(),
            "Loaded config"
        ),
        None => tracing::debug!("No config file found, using defaults"),
    }

    match command {
        Commands::Tui => cli::tui::run(&config),
        Commands::Compose(args) => {
            let output = cli::run_compose(config.variant, &args)?;
            println!("{}", output);
            Ok(())
        }
        Commands::List { what } => {
            print!("{}", cli::run_list(what));
            Ok(())
        }
    }
}
