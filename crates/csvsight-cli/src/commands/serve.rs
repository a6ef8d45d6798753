//! Serve command - run the HTTP analysis boundary.

use colored::Colorize;

use crate::server::{self, AppState};

pub fn run(port: u16, mock_llm: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let provider = super::build_provider(mock_llm, None)?;

    if verbose {
        println!("Provider: {}", provider.name());
    }

    println!(
        "{} on port {}",
        "Starting analysis server".cyan().bold(),
        port.to_string().white()
    );

    let state = AppState::new(provider);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::run_server(state, port))
}
