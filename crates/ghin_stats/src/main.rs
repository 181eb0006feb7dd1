//! GHIN Stats CLI
//!
//! ghin_stats <json_file> [--format text|json]

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::process::ExitCode;

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    ghin_stats::logging::init_tracing();
    let cli = ghin_stats::Cli::parse();

    match ghin_stats::run(&cli.json_file, cli.format) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", ghin_stats::error_message(&err));
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("ghin_stats CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
