//! Word chain search CLI
//!
//! Loads a dictionary, runs one strategy over a range of word lengths and prints
//! a results table.

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use wordchain::generator::RegrowMode;
use wordchain::report::{RunReport, write_table};
use wordchain::search::{SearchConfig, Strategy};
use wordchain::sweep::run_sweep;
use wordchain::wordlist::WordList;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Dfs,
    Greedy,
    HillClimbing,
    RandomRestart,
    Annealing,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Dfs => Strategy::Exhaustive,
            StrategyArg::Greedy => Strategy::Greedy,
            StrategyArg::HillClimbing => Strategy::HillClimbing,
            StrategyArg::RandomRestart => Strategy::RandomRestart,
            StrategyArg::Annealing => Strategy::SimulatedAnnealing,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RegrowArg {
    Greedy,
    Random,
}

impl From<RegrowArg> for RegrowMode {
    fn from(arg: RegrowArg) -> Self {
        match arg {
            RegrowArg::Greedy => RegrowMode::Greedy,
            RegrowArg::Random => RegrowMode::Random,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "wordchain")]
#[command(about = "Search for the longest chain of key-linked words")]
struct Args {
    /// Whitespace-delimited word file.
    #[arg(long, default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Search strategy to run at every word length.
    #[arg(long, value_enum, default_value = "hill-climbing")]
    strategy: StrategyArg,

    /// Shortest word length to search.
    #[arg(long, default_value = "4", value_parser = clap::value_parser!(u16).range(3..))]
    min_len: u16,

    /// Longest word length to search.
    #[arg(long, default_value = "15")]
    max_len: u16,

    /// Non-improving candidates tolerated by hill climbing and random restart.
    #[arg(long, default_value = "1000")]
    max_attempts: usize,

    /// Starting temperature for annealing.
    #[arg(long, default_value = "5000")]
    temperature: f64,

    /// Per-round cooling factor for annealing.
    #[arg(long, default_value = "0.99")]
    cooling: f64,

    /// How random restart and annealing regrow a backtracked path.
    #[arg(long, value_enum, default_value = "greedy")]
    regrow: RegrowArg,

    /// Base seed; each word length derives its own.
    #[arg(long)]
    seed: Option<u64>,

    /// Wall-clock limit per word length.
    #[arg(long)]
    time_limit_secs: Option<u64>,

    /// Worker threads (default: one per core).
    #[arg(long)]
    threads: Option<usize>,

    /// Print every chain after the table.
    #[arg(long)]
    print_chains: bool,
}

/// Log filter used when `RUST_LOG` is unset or blank.
const DEFAULT_LOG_FILTER: &str = "wordchain=info";

/// Filter from `RUST_LOG` directives, falling back to [`DEFAULT_LOG_FILTER`].
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> anyhow::Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(directives.as_deref()))
        .init();

    let args = Args::parse();
    if args.max_len < args.min_len {
        bail!("--max-len {} is below --min-len {}", args.max_len, args.min_len);
    }

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure the worker pool")?;
    }

    let cfg = SearchConfig {
        strategy: args.strategy.into(),
        max_attempts: args.max_attempts,
        initial_temperature: args.temperature,
        cooling_factor: args.cooling,
        regrow_mode: args.regrow.into(),
        seed: args.seed,
        time_limit: args.time_limit_secs.map(Duration::from_secs),
        ..SearchConfig::default()
    };
    cfg.validate()?;

    tracing::info!(path = %args.dictionary.display(), "Loading dictionary");
    let words = WordList::from_file(&args.dictionary)?;
    tracing::info!(
        words = words.len(),
        lengths = ?words.length_histogram(),
        "Loaded dictionary"
    );

    let stop = AtomicBool::new(false);
    let lengths = usize::from(args.min_len)..=usize::from(args.max_len);
    let mut rows: Vec<RunReport> = Vec::new();
    for entry in run_sweep(&words, lengths, &cfg, &stop) {
        match entry.report {
            Ok(report) => rows.push(report),
            Err(e) => tracing::warn!(word_len = entry.word_len, error = %e, "Skipping word length"),
        }
    }

    let stdout = std::io::stdout();
    write_table(&rows, stdout.lock())?;

    if args.print_chains {
        for row in &rows {
            println!("\n[{}] length {} ({} words):", row.strategy, row.word_len, row.chain_len);
            println!("{}", row.chain.join(" "));
        }
    }

    let invalid: Vec<usize> = rows.iter().filter(|r| !r.valid).map(|r| r.word_len).collect();
    if !invalid.is_empty() {
        bail!("invalid chains produced for word lengths {invalid:?}");
    }
    Ok(())
}
