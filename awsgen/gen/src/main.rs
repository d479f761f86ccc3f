//! awsgen
//!
//! Generates the AWS client package from the service model repository.
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use awsgen_definitions::all_services;
use awsgen_gen::fetch::GitModelFetcher;
use awsgen_gen::orchestrator::{GenerationSettings, Orchestrator};

/// awsgen - generates AWS service clients and error types
#[derive(Parser, Debug)]
#[command(name = "awsgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory of the generated package
    #[arg(long, value_name = "PATH")]
    base_file_path: Option<PathBuf>,
}

/// Required options absent from `cli`, by flag name.
fn missing_options(cli: &Cli) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if cli.base_file_path.is_none() {
        missing.push("--base-file-path");
    }
    missing
}

/// Diagnostic for absent required options, followed by the full help text.
fn missing_options_report(missing: &[&str]) -> String {
    format!(
        "{} Missing required options: {}\n\n{}",
        "ERROR:".red().bold(),
        missing.join(", "),
        Cli::command().render_help()
    )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let missing = missing_options(&cli);
    let Some(base_file_path) = cli.base_file_path else {
        eprintln!("{}", missing_options_report(&missing));
        return ExitCode::FAILURE;
    };

    let services = all_services();
    info!(
        services = services.len(),
        output = %base_file_path.display(),
        "generating package"
    );

    let orchestrator = Orchestrator::new(services, GitModelFetcher, GenerationSettings::default());
    match orchestrator.run(&base_file_path) {
        Ok(files) => {
            info!(files = files.len(), "generation complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e}", "ERROR:".red().bold());
            ExitCode::FAILURE
        }
    }
}
