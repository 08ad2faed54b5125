//! The `herdbook` binary.
use std::process::ExitCode;

use clap::Parser;
use herdbook_core::BuildOptions;
use tracing_subscriber::EnvFilter;

mod cli;
mod cmd;
mod error;
mod io;
mod output;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use cmd::Settings;
use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose; logs go to stderr so stdout stays parseable.
    let default_filter = if cli.verbose {
        "herdbook=debug"
    } else {
        "herdbook=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.message());
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let settings = Settings {
        format: cli.format,
        options: BuildOptions {
            generations: cli.generations,
            highlight_common: cli.highlight,
            ..BuildOptions::default()
        },
    };

    match &cli.command {
        Command::Pedigree { registry, id } => {
            let registry = io::load_registry(registry, cli.max_file_size)?;
            cmd::pedigree::run(&registry, id, &settings)
        }
        Command::Herd { registry, herd_id } => {
            let registry = io::load_registry(registry, cli.max_file_size)?;
            cmd::herd::run(&registry, herd_id, &settings)
        }
        Command::TestBreed { registry, mating } => {
            let registry = io::load_registry(registry, cli.max_file_size)?;
            cmd::test_breed::run(&registry, mating, &settings)
        }
        Command::Loop {
            registry,
            id,
            ancestor,
        } => {
            let registry = io::load_registry(registry, cli.max_file_size)?;
            cmd::loop_::run(&registry, id, ancestor, &settings)
        }
        Command::Version => {
            println!("{}", herdbook_core::version());
            Ok(())
        }
    }
}
