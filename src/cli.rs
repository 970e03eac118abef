//! # CLI Execution Functions
//!
//! Extracted from `main.rs` to keep the entry point slim. Validates request
//! parameters before anything is opened, opens the log sinks, runs the batch
//! and prints the result.

use anyhow::Result;
use primerain::error::{positive_count, RainError};
use primerain::pool::{self, RainConfig, WorkerPool};
use primerain::progress::Progress;
use primerain::report::{self, ReportFormatter, ReportStyle};
use primerain::search_log::{LogRecord, SearchLog};
use primerain::token_log::{self, TokenLog};
use primerain::tokens::{Family, Style};
use primerain::walker::{StepKind, StepPolicy};
use primerain::{default_worker_count, SEARCH_LOG_FILE};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use super::{Cli, RainArgs, TokenArgs};

const PROGRESS_INTERVAL: Duration = Duration::from_secs(30);

// ── Prime Rain ──────────────────────────────────────────────────

pub fn run_rain(cli: &Cli, args: &RainArgs) -> Result<()> {
    let seeds = positive_count(args.count)?;
    let policy = step_policy(args.step, args.max_step)?;
    let workers = args
        .threads
        .unwrap_or_else(default_worker_count)
        .clamp(1, seeds);
    let config = RainConfig {
        seeds,
        workers,
        step: policy,
        rng_seed: args.rng_seed.unwrap_or_else(pool::clock_seed),
    };
    info!(config = %serde_json::to_string(&config)?, "batch configured");

    let log_path = cli.log_dir.join(SEARCH_LOG_FILE);
    let log = SearchLog::create(&log_path, args.append)?;
    log.append(&LogRecord::Banner(format!(
        "{} Prime-Rain log - {} seeds with {} threads (step: {})",
        token_log::timestamp(),
        seeds,
        workers,
        policy
    )))?;

    let progress = Progress::new(seeds as u64);
    let reporter = progress.start_reporter(PROGRESS_INTERVAL);
    let outcome = WorkerPool::new(&log, policy, config.rng_seed)
        .with_progress(Arc::clone(&progress))
        .run(seeds, workers);
    progress.stop();
    let _ = reporter.join();
    let outcome = outcome?;

    let text = if args.json {
        report::render_json(&config, &outcome.results, &outcome.stats)? + "\n"
    } else {
        let style = if args.color {
            ReportStyle::Confetti
        } else {
            ReportStyle::Plain
        };
        ReportFormatter::new(style)
            .with_log_path(&log_path)
            .render(&outcome.results, &outcome.stats)
    };
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn step_policy(kind: StepKind, max_step: u32) -> Result<StepPolicy, RainError> {
    if kind == StepKind::Bounded && max_step == 0 {
        return Err(RainError::invalid("--max-step must be at least 1"));
    }
    Ok(kind.with_max(max_step))
}

// ── Token Families ──────────────────────────────────────────────

pub fn run_tokens(cli: &Cli, family: Family, args: &TokenArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout().lock();

    let (style, count) = resolve_request(family, args, &mut input, &mut stdout)?;

    let mut log = TokenLog::open(&cli.log_dir, family)?;
    let path = cli.log_dir.join(family.log_file());
    writeln!(
        stdout,
        "\n--- Generating and logging {} {} to {} ---",
        count,
        family.noun(),
        path.display()
    )?;

    let mut rng = rand::thread_rng();
    for token in token_log::run_session(&mut log, family, style, count, &mut rng)? {
        writeln!(stdout, "{}", token)?;
    }
    writeln!(stdout, "--- Logging complete. ---")?;
    stdout.flush()?;
    Ok(())
}

/// Style and count from the flags, prompting for whichever is missing.
/// Both are validated only after both are known.
fn resolve_request<R: BufRead, W: Write>(
    family: Family,
    args: &TokenArgs,
    input: &mut R,
    out: &mut W,
) -> Result<(Style, usize)> {
    let style = match args.style {
        Some(s) => s,
        None => {
            writeln!(out, "Select an algorithm style for {}:", family.subject())?;
            for style in Style::ALL {
                writeln!(out, "{}. {}", style.number(), style.label(family))?;
            }
            prompt_number(input, out, "Enter your choice (1-5): ")?
        }
    };
    let count = match args.count {
        Some(c) => c,
        None => prompt_number(
            input,
            out,
            &format!("How many {} would you like to generate? ", family.noun()),
        )?,
    };
    Ok((Style::from_selector(style)?, positive_count(count)?))
}

fn prompt_number<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<i64> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(RainError::invalid("no answer on standard input").into());
    }
    let answer = line.trim();
    answer
        .parse::<i64>()
        .map_err(|_| RainError::invalid(format!("'{}' is not a number", answer)).into())
}

// ── Failure Reporting ───────────────────────────────────────────

pub fn report_failure(err: &anyhow::Error) {
    match err.downcast_ref::<RainError>() {
        Some(RainError::InvalidInput(msg)) => eprintln!("Invalid input: {}", msg),
        Some(e @ RainError::SinkUnavailable { .. }) => eprintln!("Error: {}", e),
        None => eprintln!("Error: {:#}", err),
    }
    error!(error = %format!("{:#}", err), "primerain failed");
}
