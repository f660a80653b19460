mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, export, phone, search, Context};
use crate::error::{exit_code_for, report_error};
use cnpjscout_config as config;

#[derive(Debug, Parser)]
#[command(name = "cnpjscout", version, about = "cnpjscout CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search the registry and print the matching companies
    Search(search::SearchArgs),
    /// Search the registry and export contact data
    #[command(subcommand)]
    Export(export::ExportCommand),
    /// Normalize a single phone number
    #[command(name = "normalize-phone")]
    NormalizePhone(phone::NormalizePhoneArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        Command::NormalizePhone(args) => phone::normalize(json, args),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }

            let ctx = Context {
                json,
                config: &app_config,
            };

            match command {
                Command::Search(args) => search::search(&ctx, args),
                Command::Export(cmd) => match cmd {
                    export::ExportCommand::Csv(args) => export::export_csv(&ctx, args),
                    export::ExportCommand::Emails(args) => export::export_emails(&ctx, args),
                    export::ExportCommand::Phones(args) => export::export_phones(&ctx, args),
                },
                Command::Completions(_) => {
                    unreachable!("completions command handled before config load")
                }
                Command::NormalizePhone(_) => {
                    unreachable!("normalize-phone command handled before config load")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
