//! # Main: CLI Entry Point
//!
//! Routes subcommands to the prime-rain batch runner and the token
//! generators. Handles the shared concerns: `.env` loading, structured logging
//! setup, argument parsing and the process exit status.
//!
//! ## Subcommands
//!
//! - `rain [COUNT] [THREADS]`: walk random 8-digit seeds to primes on a worker
//!   pool, logging every hop to `prime_rain_log.txt`.
//! - `string`, `integer`, `emoji`: generate 8-symbol tokens in one of five
//!   styles, appending them to the family's log. Missing `--style` or
//!   `--count` are asked for interactively.
//!
//! ## Global Options
//!
//! - `--log-dir` / `PRIMERAIN_LOG_DIR`: where the log files live.
//! - `LOG_FORMAT=json`: JSON diagnostics on stderr; `RUST_LOG` filters them.
//!
//! Every failure, including rejected arguments, exits with status 1.

mod cli;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use primerain::walker::{StepKind, DEFAULT_MAX_STEP};

#[derive(Parser)]
#[command(
    name = "primerain",
    about = "Make it rain 8-digit primes, plus letter, digit and emoji tokens"
)]
struct Cli {
    /// Directory holding prime_rain_log.txt and the token logs
    #[arg(long, env = "PRIMERAIN_LOG_DIR", default_value = ".", global = true)]
    log_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk random 8-digit seeds to primes, logging every hop
    Rain(RainArgs),
    /// Generate 8-letter strings (logged to string.log)
    String(TokenArgs),
    /// Generate 8-digit numeric strings (logged to integer.log)
    Integer(TokenArgs),
    /// Generate 8-emoji sequences (logged to emoji.log)
    Emoji(TokenArgs),
}

#[derive(Args)]
struct RainArgs {
    /// How many seeds to walk
    #[arg(default_value_t = 100, allow_negative_numbers = true)]
    count: i64,
    /// Worker threads (defaults to all logical cores; clamped to 1..=COUNT)
    #[arg(env = "PRIMERAIN_THREADS")]
    threads: Option<usize>,
    /// Hop magnitude policy: "full" (another 8-digit draw) or "bounded"
    #[arg(long, default_value = "full")]
    step: StepKind,
    /// Largest hop magnitude for the bounded policy
    #[arg(long, default_value_t = DEFAULT_MAX_STEP)]
    max_step: u32,
    /// Base seed for the worker generators (defaults to the clock)
    #[arg(long)]
    rng_seed: Option<u64>,
    /// Append to the search log instead of recreating it
    #[arg(long)]
    append: bool,
    /// Colourful confetti report
    #[arg(long, conflicts_with = "json")]
    color: bool,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct TokenArgs {
    /// Algorithm style 1-5 (prompted for when omitted)
    #[arg(long, allow_negative_numbers = true)]
    style: Option<i64>,
    /// How many tokens to generate (prompted for when omitted)
    #[arg(long, allow_negative_numbers = true)]
    count: Option<i64>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // LOG_FORMAT=json for log shippers, human-readable otherwise
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let result = match &cli.command {
        Commands::Rain(args) => cli::run_rain(&cli, args),
        Commands::String(args) => cli::run_tokens(&cli, primerain::tokens::Family::Letters, args),
        Commands::Integer(args) => cli::run_tokens(&cli, primerain::tokens::Family::Digits, args),
        Commands::Emoji(args) => cli::run_tokens(&cli, primerain::tokens::Family::Emoji, args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::report_failure(&e);
            ExitCode::from(1)
        }
    }
}
