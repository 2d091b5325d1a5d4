//! Process-level error handling and argument parsing.

/// Handle application errors.
///
/// Prints to stderr and exits with code 1
pub fn handle_error(error: anyhow::Error) {
    eprintln!();
    eprintln!("Error running bezy-selection:");
    eprintln!("{error:#}");
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

/// Parse the command line arguments.
pub fn get_cli_args() -> crate::core::cli::CliArgs {
    use clap::Parser;
    crate::core::cli::CliArgs::parse()
}
