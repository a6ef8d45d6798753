//! Csvsight CLI - CSV chart analysis pipeline.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            file,
            output,
            mock_llm,
            model,
        } => commands::analyze::run(file, output, mock_llm, model, cli.verbose),

        Commands::Serve { port, mock_llm } => commands::serve::run(port, mock_llm, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
