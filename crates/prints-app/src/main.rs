// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// prints — list printers, set the default printer, print PDF files.
//
// Entry point. Parses arguments, initialises logging, picks the platform
// backend, and reports any error once as `Error: <message>` with exit 1.

mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use prints_bridge::Spooler;
use prints_core::error::Result;
use prints_core::{AppConfig, PrintRequest};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "prints", version)]
#[command(about = "List printers, set the default printer, and print PDF files", long_about = None)]
struct Cli {
    /// JSON config file (default: <config dir>/prints/config.json)
    #[arg(long, global = true, env = "PRINTS_CONFIG")]
    config: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available printers and show the default printer
    List {
        /// Output as JSON {"printers": [...], "default": ...}
        #[arg(long)]
        json: bool,
    },
    /// Set the default printer
    SetDefault {
        /// Printer name
        printer: String,
    },
    /// Print a PDF file
    Print {
        /// Path to the PDF file
        pdf: PathBuf,
        /// Printer name (uses the default printer if omitted)
        #[arg(long)]
        printer: Option<String>,
        /// Number of copies (0 is treated as 1)
        #[arg(long, default_value_t = 1)]
        copies: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let spooler = prints_bridge::platform_spooler(&config);
    tracing::debug!(backend = spooler.platform_name(), "selected printing backend");

    match cli.command {
        Commands::List { json } => {
            let listing = prints_bridge::list_printers(spooler.as_ref())?;
            if json {
                output::render_listing_json(&listing)
            } else {
                Ok(output::render_listing(&listing))
            }
        }
        Commands::SetDefault { printer } => {
            prints_bridge::set_default_printer(spooler.as_ref(), &printer)?;
            Ok(output::render_default_set(&printer))
        }
        Commands::Print {
            pdf,
            printer,
            copies,
        } => {
            let request = PrintRequest::new(pdf, printer, copies);
            let status = prints_bridge::print_pdf(spooler.as_ref(), &request)?;
            Ok(format!("{status}\n"))
        }
    }
}

/// Logs go to stderr so `list --json` output stays parseable. `-v` wins over
/// `RUST_LOG`; without either only warnings are shown.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
