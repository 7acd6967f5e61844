use colored::Colorize;
use tracing_subscriber::EnvFilter;

use jsonschema_openapi::cli::CommandLineInterface;

fn main() {
    // stdout is reserved for the confirmation line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let command_line_interface = CommandLineInterface::load();
    tracing::debug!(config = ?command_line_interface.config, "loaded configuration");
    if let Err(error) = command_line_interface.run() {
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
