use clap::Parser;
use ticklist::cli::commands::Cli;
use ticklist::cli::handlers;
use ticklist::io::{config_io, logging};

fn main() {
    let cli = Cli::parse();

    let config = match config_io::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    // The TUI owns the terminal, so it only ever logs to a file
    let log_file = cli.log_file.as_deref().or(config.log.file.as_deref());
    let stderr_ok = cli.command.is_some();
    if let Err(e) = logging::init_logging(log_file, config.log.level.as_deref(), stderr_ok) {
        eprintln!("warning: {}", e);
    }

    let result = match cli.command {
        // No subcommand → launch TUI
        None => ticklist::tui::run(&config),
        Some(command) => handlers::dispatch(command, &config),
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
