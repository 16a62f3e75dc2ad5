// Copyright 2026 Interop Atlas Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use interop_atlas::cli;
use interop_atlas::fetch::DEFAULT_TIMEOUT_MS;
use interop_atlas::report::RESULTS_HTML;
use interop_atlas::store::RESULTS_JSON;

#[derive(Parser)]
#[command(
    name = "atlas",
    about = "Interop Atlas: healthcare interface specification catalog scraper",
    version,
    after_help = "Run 'atlas <command> --help' for details on each command."
)]
struct Cli {
    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every interface family and write the catalog JSON
    Parse {
        /// Output path for the catalog document
        #[arg(long, default_value = RESULTS_JSON)]
        out: PathBuf,
        /// Request timeout in milliseconds
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
        timeout: u64,
    },
    /// Render the persisted catalog into a single HTML report
    Generate {
        /// Input catalog document
        #[arg(long, default_value = RESULTS_JSON)]
        input: PathBuf,
        /// Output path for the report
        #[arg(long, default_value = RESULTS_HTML)]
        out: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let directive = if cli.verbose {
        "interop_atlas=debug"
    } else if cli.quiet {
        "interop_atlas=warn"
    } else {
        "interop_atlas=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap()),
        )
        .init();

    let result = match cli.command {
        // No subcommand is a message on stdout, not an error.
        None => {
            println!("error: no action specified (use 'parse' or 'generate')");
            Ok(())
        }
        Some(Commands::Parse { out, timeout }) => {
            cli::parse_cmd::run(&out, timeout, cli.quiet).await
        }
        Some(Commands::Generate { input, out }) => {
            cli::generate_cmd::run(&input, &out, cli.quiet).await
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "atlas", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        eprintln!("  Error: {e:#}");
        std::process::exit(1);
    }

    result
}
