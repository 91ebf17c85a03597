//! # till CLI Library
//!
//! Command-line front end for till-core. `main.rs` only parses arguments
//! and calls [`run`]; everything else lives here so it can be tested
//! against in-memory readers and writers.
//!
//! ## Module Organization
//! ```text
//! till_cli/
//! ├── lib.rs              ◄─── You are here (arguments, logging, dispatch)
//! ├── config.rs           ◄─── till.toml + TILL_* environment
//! ├── render.rs           ◄─── Plain-text tables
//! ├── error.rs            ◄─── CliError + exit codes
//! └── commands/
//!     ├── mod.rs          ◄─── Shared command context
//!     ├── breakdown.rs    ◄─── till breakdown <AMOUNT>
//!     ├── session.rs      ◄─── till session (amounts on stdin)
//!     ├── calculate.rs    ◄─── till calculate (JSON request on stdin)
//!     └── denominations.rs◄─── till denominations
//! ```
//!
//! ## User Workflow
//! ```text
//! $ till breakdown 73,50
//! Amount: 73,50 €
//!
//!   Denomination    Count
//!        50,00 €        1
//!        20,00 €        1
//!   ...
//!
//! $ printf '50\n73,50\n' | till session --format json
//! {"amount":5000,"breakdown":[...],"difference":[...],"remainder":0}
//! {"amount":7350,"breakdown":[...],"difference":[...],"remainder":0}
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod render;

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use commands::Context;
use config::TillConfig;
use error::CliError;

/// Output format for command results.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// JSON (one document per calculation)
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "till", version, about = "Break cash amounts down into banknotes and coins")]
pub struct Cli {
    /// Path to till.toml (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Debug logging for till (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Break one amount down
    Breakdown {
        /// Amount such as "73,50" or "73.50"
        amount: String,
    },
    /// Read amounts from stdin, one per line, and show each breakdown with
    /// its difference to the one before ("reset" clears the history)
    Session,
    /// Answer a JSON calculation request read from stdin (always JSON)
    Calculate,
    /// Show the configured banknotes and coins
    Denominations,
}

/// Runs a parsed command line against the given streams.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load configuration (defaults ◄ till.toml ◄ TILL_* environment)      │
/// │  2. Validate the denomination set (fails fast on non-canonical sets)    │
/// │  3. Dispatch the subcommand                                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// `calculate` carries its own denominations and skips steps 1 and 2.
pub fn run<R, W>(cli: Cli, input: R, out: &mut W) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    debug!(command = ?cli.command, format = ?cli.format, "Dispatching");

    match cli.command {
        Command::Calculate => commands::calculate::run(input, out),
        Command::Breakdown { amount } => {
            let ctx = load_context(cli.config, cli.format)?;
            commands::breakdown::run(&ctx, &amount, out)
        }
        Command::Session => {
            let ctx = load_context(cli.config, cli.format)?;
            commands::session::run(&ctx, input, out)
        }
        Command::Denominations => {
            let ctx = load_context(cli.config, cli.format)?;
            commands::denominations::run(&ctx, out)
        }
    }
}

fn load_context(path: Option<PathBuf>, format: OutputFormat) -> Result<Context, CliError> {
    let config = TillConfig::load(path)?;
    let ctx = Context::new(config, format)?;

    info!(
        denominations = ctx.denominations.len(),
        smallest = %ctx.denominations.smallest(),
        "Configuration loaded"
    );
    Ok(ctx)
}

/// Initializes the tracing subscriber. Logs go to stderr.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages for everything
/// - `--verbose` - Debug for the till crates only
/// - Default: INFO level
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "info,till_cli=debug,till_core=debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
