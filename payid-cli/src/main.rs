//! PayID CLI
//!
//! Command-line client for resolving PayIDs over WebFinger.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use payid_lib::PayIdError;

mod commands;
mod ui;

#[derive(Parser)]
#[command(name = "payid")]
#[command(about = "PayID CLI - Resolve account$host identifiers to payment endpoints", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Request timeout in seconds (can also be set via PAYID_TIMEOUT_SECS env var)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Maximum WebFinger fetches per resolution (can also be set via PAYID_MAX_DISCOVERY_HOPS env var)
    #[arg(long, global = true)]
    max_hops: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a PayID to its payment endpoint URL
    Resolve {
        /// PayID to resolve (account$host or payid:account$host)
        payid: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the links published for a PayID without following delegation
    Inspect {
        /// PayID whose host to query
        payid: String,

        /// Print the raw resource descriptor as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a PayID and show its parts
    Parse {
        /// PayID to parse
        payid: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays clean
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("payid=debug,payid_lib=debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("payid=info,payid_lib=warn")
            .with_writer(std::io::stderr)
            .init();
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings = commands::Settings::load(cli.timeout, cli.max_hops);

    match cli.command {
        Commands::Resolve { payid, json } => {
            commands::resolve::run(&payid, json, &settings, cli.verbose).await?;
        }
        Commands::Inspect { payid, json } => {
            commands::inspect::run(&payid, json, &settings, cli.verbose).await?;
        }
        Commands::Parse { payid, json } => {
            commands::parse::run(&payid, json)?;
        }
    }

    Ok(())
}

fn report(err: &anyhow::Error) {
    let payid_error = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<PayIdError>());

    match payid_error {
        Some(e) => ui::error(&format!("{} [{}]: {}", err, e.kind(), e)),
        None => ui::error(&format!("{:#}", err)),
    }
}
