//! CLI entry point for reassembling shredded images

use clap::Parser;
use std::process::ExitCode;
use unshred::io::cli::{Cli, FileProcessor};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);

    match processor.process() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            // Allow print for the user-facing diagnostic
            #[allow(clippy::print_stderr)]
            {
                eprintln!("error: {error}");
            }
            ExitCode::from(error.exit_status())
        }
    }
}
