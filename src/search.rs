//! Search drivers: exhaustive DFS, greedy, hill climbing, random-restart greedy and
//! simulated annealing.
//!
//! Every driver follows the same shape: build a seed path, repeatedly ask the
//! [`PathGenerator`] for a candidate, apply a strategy-specific acceptance rule, and
//! stop when its budget (attempts, temperature, external stop flag or time limit)
//! runs out. The longest path seen is returned.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use rand::prelude::*;
use rand::rngs::SmallRng;
use tracing::{debug, info, warn};

use crate::dictionary::KeyedDictionary;
use crate::error::{ChainError, Result};
use crate::exhaustive::exhaustive_search;
use crate::generator::{PathGenerator, RegrowMode};
use crate::path::{Direction, PathState};
use crate::wordlist::{WordList, check_dictionary};

// ============================================================================
// Configuration
// ============================================================================

/// Available search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Full depth-first enumeration. Exponential; tiny dictionaries only.
    Exhaustive,
    /// Single deterministic greedy pass.
    Greedy,
    /// Greedy regrowth at every backtrack depth, keeping strict improvements.
    HillClimbing,
    /// Random-depth greedy regrowth with periodic full restarts.
    RandomRestart,
    /// Temperature-scheduled acceptance of shorter candidates.
    SimulatedAnnealing,
}

impl Strategy {
    /// Returns all strategies.
    pub const fn all() -> &'static [Strategy] {
        &[
            Strategy::Exhaustive,
            Strategy::Greedy,
            Strategy::HillClimbing,
            Strategy::RandomRestart,
            Strategy::SimulatedAnnealing,
        ]
    }

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Exhaustive => "dfs",
            Strategy::Greedy => "greedy",
            Strategy::HillClimbing => "hill-climbing",
            Strategy::RandomRestart => "random-restart",
            Strategy::SimulatedAnnealing => "annealing",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Search configuration parameters.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Which driver to run.
    pub strategy: Strategy,
    /// Consecutive non-improving candidates tolerated (hill climbing, random restart).
    pub max_attempts: usize,
    /// Starting temperature (annealing).
    pub initial_temperature: f64,
    /// Per-round temperature multiplier, strictly between 0 and 1 (annealing).
    pub cooling_factor: f64,
    /// Chance that an annealing round restarts from scratch instead of
    /// backtracking half the path.
    pub restart_probability: f64,
    /// Every `restart_every`-th failed attempt is a full restart (random restart).
    pub restart_every: usize,
    /// Regrowth used by random restart and annealing. Hill climbing always regrows
    /// greedily.
    pub regrow_mode: RegrowMode,
    /// Optional deterministic seed.
    pub seed: Option<u64>,
    /// Optional wall-clock limit for one run.
    pub time_limit: Option<Duration>,
    /// Progress log period, in failed attempts or annealing rounds (0 disables).
    pub report_every: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::HillClimbing,
            max_attempts: 1_000,
            initial_temperature: 5_000.0,
            cooling_factor: 0.99,
            restart_probability: 1.0 / 11.0,
            restart_every: 10,
            regrow_mode: RegrowMode::Greedy,
            seed: None,
            time_limit: None,
            report_every: 100,
        }
    }
}

impl SearchConfig {
    /// Default configuration for a given strategy.
    pub fn for_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Checks the strategy parameters.
    ///
    /// # Errors
    /// Returns a configuration error for a cooling factor outside `(0, 1)`, a
    /// non-finite or non-positive temperature, a restart probability outside
    /// `[0, 1]` or a zero restart period.
    pub fn validate(&self) -> Result<()> {
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return Err(ChainError::InvalidCoolingFactor(self.cooling_factor));
        }
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(ChainError::InvalidTemperature(self.initial_temperature));
        }
        if !(0.0..=1.0).contains(&self.restart_probability) {
            return Err(ChainError::InvalidProbability {
                name: "restart_probability",
                value: self.restart_probability,
            });
        }
        if self.restart_every == 0 {
            return Err(ChainError::InvalidRestartPeriod);
        }
        Ok(())
    }

    /// The parameters that matter for the configured strategy, for reports.
    pub fn describe(&self) -> String {
        match self.strategy {
            Strategy::Exhaustive | Strategy::Greedy => "-".to_owned(),
            Strategy::HillClimbing => format!("attempts={}", self.max_attempts),
            Strategy::RandomRestart => format!(
                "attempts={} restart_every={} regrow={:?}",
                self.max_attempts, self.restart_every, self.regrow_mode
            ),
            Strategy::SimulatedAnnealing => format!(
                "T0={} cooling={} regrow={:?}",
                self.initial_temperature, self.cooling_factor, self.regrow_mode
            ),
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Best chain found by one run, plus run metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// Strategy that produced the chain.
    pub strategy: Strategy,
    /// Word length of the run.
    pub word_len: usize,
    /// Distinct words of that length in the dictionary.
    pub num_words: usize,
    /// The chain, in order.
    pub chain: Vec<String>,
    /// Candidates generated (DFS: words entered).
    pub attempts: u64,
    /// Time spent searching.
    pub elapsed: Duration,
    /// Seed the run used.
    pub seed: u64,
    /// Whether the stop flag or time limit cut the run short.
    pub stopped_early: bool,
}

impl SearchResult {
    /// Chain length.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` for an empty chain (never produced by a successful run).
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

/// What a driver hands back before it is spelled out.
#[derive(Clone, Debug)]
pub(crate) struct Outcome {
    pub(crate) best: PathState,
    pub(crate) attempts: u64,
    pub(crate) stopped_early: bool,
}

impl Outcome {
    fn finished(best: PathState, attempts: u64) -> Self {
        Self {
            best,
            attempts,
            stopped_early: false,
        }
    }
}

/// External stop conditions checked at round boundaries.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Budget<'a> {
    stop: &'a AtomicBool,
    deadline: Option<Instant>,
}

impl<'a> Budget<'a> {
    pub(crate) fn new(stop: &'a AtomicBool, deadline: Option<Instant>) -> Self {
        Self { stop, deadline }
    }

    #[inline]
    pub(crate) fn exhausted(&self) -> bool {
        self.stop.load(Ordering::Relaxed) || self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Loads the words of `word_len` characters from `words` and searches them.
///
/// # Errors
/// Returns a configuration error for an empty word list, an unusable word length,
/// no words of that length, or invalid strategy parameters.
pub fn solve(words: &WordList, word_len: usize, cfg: &SearchConfig) -> Result<SearchResult> {
    cfg.validate()?;
    let dict = words.keyed(word_len)?;
    solve_dictionary(&dict, cfg)
}

/// Searches an already indexed dictionary.
///
/// # Errors
/// See [`solve`].
pub fn solve_dictionary(dict: &KeyedDictionary, cfg: &SearchConfig) -> Result<SearchResult> {
    solve_dictionary_until(dict, cfg, &AtomicBool::new(false))
}

/// Searches an already indexed dictionary until done or until `stop` is raised.
///
/// Raising `stop` (from another thread) ends the run at the next round boundary;
/// the best chain found so far is returned.
///
/// # Errors
/// See [`solve`].
pub fn solve_dictionary_until(
    dict: &KeyedDictionary,
    cfg: &SearchConfig,
    stop: &AtomicBool,
) -> Result<SearchResult> {
    cfg.validate()?;
    check_dictionary(dict)?;

    let seed = cfg.seed.unwrap_or_else(rand::random);
    let mut rng = SmallRng::seed_from_u64(seed);
    let start = Instant::now();
    let budget = Budget::new(stop, cfg.time_limit.map(|limit| start + limit));
    let generator = PathGenerator::new(dict);

    info!(
        strategy = %cfg.strategy,
        word_len = dict.word_len(),
        words = dict.len(),
        seed,
        "starting search"
    );

    let outcome = if dict.keys_coincide() {
        // Every word chains onto its whole bucket: the largest bucket is optimal.
        debug!("front and back keys coincide; using the largest bucket");
        Outcome::finished(generator.greedy_path()?, 1)
    } else {
        match cfg.strategy {
            Strategy::Exhaustive => exhaustive_search(dict, &budget)?,
            Strategy::Greedy => Outcome::finished(generator.greedy_path()?, 1),
            Strategy::HillClimbing => hill_climbing(&generator, cfg, &mut rng, &budget, |_| {})?,
            Strategy::RandomRestart => {
                random_restart(&generator, cfg, &mut rng, &budget, |_| {})?
            }
            Strategy::SimulatedAnnealing => {
                simulated_annealing(&generator, cfg, &mut rng, &budget)?
            }
        }
    };

    let elapsed = start.elapsed();
    if outcome.stopped_early {
        warn!(strategy = %cfg.strategy, ?elapsed, "search stopped before its budget ran out");
    }
    info!(
        strategy = %cfg.strategy,
        word_len = dict.word_len(),
        len = outcome.best.len(),
        attempts = outcome.attempts,
        ?elapsed,
        "search finished"
    );

    Ok(SearchResult {
        strategy: cfg.strategy,
        word_len: dict.word_len(),
        num_words: dict.len(),
        chain: dict.spell(outcome.best.iter()),
        attempts: outcome.attempts,
        elapsed,
        seed,
        stopped_early: outcome.stopped_early,
    })
}

// ============================================================================
// Drivers
// ============================================================================

/// Sweeps every backtrack depth from 0 to the current length, regrowing greedily
/// in a random direction and keeping strict improvements.
///
/// The stagnation counter counts non-improving candidates since the last
/// improvement. It is checked after each full sweep, and the run ends once it
/// exceeds `max_attempts`. Each sweep without improvement adds at least one, and
/// improvements are bounded by the dictionary size, so the loop always ends.
///
/// `on_round` sees the best length after every candidate.
fn hill_climbing<R: Rng>(
    generator: &PathGenerator<'_>,
    cfg: &SearchConfig,
    rng: &mut R,
    budget: &Budget<'_>,
    mut on_round: impl FnMut(usize),
) -> Result<Outcome> {
    let mut current = generator.greedy_path()?;
    let mut attempts = 0u64;
    let mut stagnation = 0usize;
    let mut sweeps = 0u64;

    while stagnation <= cfg.max_attempts {
        let mut depth = 0usize;
        while depth <= current.len() {
            if budget.exhausted() {
                return Ok(Outcome {
                    best: current,
                    attempts,
                    stopped_early: true,
                });
            }

            let direction = Direction::random(rng);
            let candidate = generator.regrow(&current, depth, direction, RegrowMode::Greedy, rng)?;
            attempts += 1;

            if candidate.len() > current.len() {
                debug!(len = candidate.len(), depth, sweeps, "hill climbing: improved");
                current = candidate;
                stagnation = 0;
            } else {
                stagnation += 1;
                if cfg.report_every > 0 && (stagnation as u64).is_multiple_of(cfg.report_every) {
                    debug!(stagnation, len = current.len(), "hill climbing: no improvement yet");
                }
            }
            on_round(current.len());
            depth += 1;
        }
        sweeps += 1;
    }

    Ok(Outcome::finished(current, attempts))
}

/// Greedy regrowth from a random depth in `[1, len - 1]`, with a full restart on
/// every `restart_every`-th failed attempt (starting with the first). Stops after
/// `max_attempts` consecutive failures. `on_round` sees the best length after every
/// candidate.
fn random_restart<R: Rng>(
    generator: &PathGenerator<'_>,
    cfg: &SearchConfig,
    rng: &mut R,
    budget: &Budget<'_>,
    mut on_round: impl FnMut(usize),
) -> Result<Outcome> {
    let mut best = generator.greedy_path()?;
    let mut attempts = 0u64;
    let mut failures = 0usize;

    while failures < cfg.max_attempts {
        if budget.exhausted() {
            return Ok(Outcome {
                best,
                attempts,
                stopped_early: true,
            });
        }

        let backtrack = if failures.is_multiple_of(cfg.restart_every) || best.len() < 2 {
            best.len()
        } else {
            rng.random_range(1..best.len())
        };
        let direction = Direction::random(rng);
        let candidate = generator.regrow(&best, backtrack, direction, cfg.regrow_mode, rng)?;
        attempts += 1;

        if candidate.len() > best.len() {
            debug!(len = candidate.len(), backtrack, "random restart: improved");
            best = candidate;
            failures = 0;
        } else {
            failures += 1;
            if cfg.report_every > 0 && (failures as u64).is_multiple_of(cfg.report_every) {
                debug!(failures, len = best.len(), "random restart: no improvement yet");
            }
        }
        on_round(best.len());
    }

    Ok(Outcome::finished(best, attempts))
}

/// Cools from `initial_temperature` by `cooling_factor` per round until the
/// temperature is at most 1. Each round backtracks half the current path (or, with
/// `restart_probability`, all of it) and accepts the regrown candidate with the
/// Metropolis rule. Returns the longest path seen, which may be longer than the
/// final current path.
fn simulated_annealing<R: Rng>(
    generator: &PathGenerator<'_>,
    cfg: &SearchConfig,
    rng: &mut R,
    budget: &Budget<'_>,
) -> Result<Outcome> {
    let mut current = generator.greedy_path()?;
    let mut best = current.clone();
    let mut temperature = cfg.initial_temperature;
    let mut rounds = 0u64;

    while temperature > 1.0 {
        if budget.exhausted() {
            return Ok(Outcome {
                best,
                attempts: rounds,
                stopped_early: true,
            });
        }

        temperature *= cfg.cooling_factor;
        rounds += 1;

        let backtrack = if rng.random_bool(cfg.restart_probability) {
            current.len()
        } else {
            current.len() / 2
        };
        let direction = Direction::random(rng);
        let candidate = generator.regrow(&current, backtrack, direction, cfg.regrow_mode, rng)?;

        if accept_move(candidate.len(), current.len(), temperature, rng) {
            if candidate.len() > best.len() {
                debug!(len = candidate.len(), temperature, "annealing: new best");
                best = candidate.clone();
            }
            current = candidate;
        }

        if cfg.report_every > 0 && rounds.is_multiple_of(cfg.report_every) {
            debug!(
                rounds,
                temperature,
                current = current.len(),
                best = best.len(),
                "annealing: progress"
            );
        }
    }

    Ok(Outcome::finished(best, rounds))
}

/// Metropolis acceptance for a maximisation: never-shorter candidates always pass,
/// shorter ones with probability `exp(-(current - candidate) / temperature)`.
#[inline]
fn accept_move<R: Rng>(candidate_len: usize, current_len: usize, temperature: f64, rng: &mut R) -> bool {
    if candidate_len >= current_len {
        true
    } else {
        let prob = (-((current_len - candidate_len) as f64) / temperature).exp();
        rng.random_bool(prob.clamp(0.0, 1.0))
    }
}

// ============================================================================
// Seeding
// ============================================================================

/// SplitMix64 mixer for deriving independent per-run seeds from a base seed.
#[inline]
pub fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::is_valid_chain;

    fn w(f: &str, b: &str) -> String {
        format!("x{f}{b}y")
    }

    /// One six-letter word per ordered key pair: a complete key digraph, small
    /// enough for the exhaustive driver when given three keys.
    fn dense(keys: &[&str]) -> KeyedDictionary {
        let words: Vec<String> = keys
            .iter()
            .flat_map(|f| keys.iter().map(move |b| w(f, b)))
            .collect();
        KeyedDictionary::build(6, words)
    }

    /// [`dense`] plus a second word for every ascending key pair, so buckets differ
    /// in size and greedy choices matter. Too large for the exhaustive driver.
    fn skewed(keys: &[&str]) -> KeyedDictionary {
        let mut words = Vec::new();
        for f in keys {
            for b in keys {
                words.push(w(f, b));
                if f < b {
                    words.push(format!("q{f}{b}z"));
                }
            }
        }
        KeyedDictionary::build(6, words)
    }

    fn seeded(strategy: Strategy, seed: u64) -> SearchConfig {
        SearchConfig {
            strategy,
            seed: Some(seed),
            max_attempts: 50,
            initial_temperature: 50.0,
            cooling_factor: 0.9,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn search_config_default_is_valid() {
        let cfg = SearchConfig::default();
        cfg.validate().unwrap();
        assert!(cfg.max_attempts > 0);
        assert!((0.0..1.0).contains(&cfg.cooling_factor));
        assert!(cfg.initial_temperature > 1.0);
        assert!((0.0..=1.0).contains(&cfg.restart_probability));
    }

    #[test]
    fn validate_rejects_bad_parameters() {
        let base = SearchConfig::default();
        for cooling in [0.0, 1.0, 1.5, -0.1, f64::NAN] {
            let cfg = SearchConfig { cooling_factor: cooling, ..base.clone() };
            assert!(matches!(cfg.validate(), Err(ChainError::InvalidCoolingFactor(_))));
        }
        for temperature in [0.0, -3.0, f64::INFINITY, f64::NAN] {
            let cfg = SearchConfig { initial_temperature: temperature, ..base.clone() };
            assert!(matches!(cfg.validate(), Err(ChainError::InvalidTemperature(_))));
        }
        let cfg = SearchConfig { restart_probability: 1.5, ..base.clone() };
        assert!(matches!(cfg.validate(), Err(ChainError::InvalidProbability { .. })));
        let cfg = SearchConfig { restart_every: 0, ..base };
        assert!(matches!(cfg.validate(), Err(ChainError::InvalidRestartPeriod)));
    }

    #[test]
    fn empty_dictionary_is_a_configuration_error() {
        let dict = KeyedDictionary::build(6, Vec::<String>::new());
        for &strategy in Strategy::all() {
            let err = solve_dictionary(&dict, &seeded(strategy, 1)).unwrap_err();
            assert!(matches!(err, ChainError::NoWordsOfLength { word_len: 6 }));
        }
    }

    #[test]
    fn every_strategy_returns_a_valid_chain() {
        let dict = dense(&["aa", "bb", "cc"]);
        for &strategy in Strategy::all() {
            let result = solve_dictionary(&dict, &seeded(strategy, 42)).unwrap();
            assert!(!result.is_empty(), "{strategy}");
            assert!(is_valid_chain(&result.chain), "{strategy}: {:?}", result.chain);
            assert_eq!(result.word_len, 6);
            assert_eq!(result.num_words, dict.len());
        }
    }

    #[test]
    fn heuristics_return_valid_chains_on_uneven_buckets() {
        let dict = skewed(&["aa", "bb", "cc", "dd", "ee"]);
        for &strategy in &Strategy::all()[1..] {
            let result = solve_dictionary(&dict, &seeded(strategy, 42)).unwrap();
            assert!(is_valid_chain(&result.chain), "{strategy}: {:?}", result.chain);
        }
    }

    #[test]
    fn single_word_dictionary_yields_length_one_everywhere() {
        let dict = KeyedDictionary::build(6, [w("aa", "bb")]);
        for &strategy in Strategy::all() {
            let result = solve_dictionary(&dict, &seeded(strategy, 3)).unwrap();
            assert_eq!(result.len(), 1, "{strategy}");
        }
    }

    #[test]
    fn seeded_strategies_are_reproducible() {
        let dict = skewed(&["aa", "bb", "cc", "dd", "ee", "ff"]);
        for strategy in [
            Strategy::HillClimbing,
            Strategy::RandomRestart,
            Strategy::SimulatedAnnealing,
        ] {
            let a = solve_dictionary(&dict, &seeded(strategy, 0xDEAD_C0DE)).unwrap();
            let b = solve_dictionary(&dict, &seeded(strategy, 0xDEAD_C0DE)).unwrap();
            assert_eq!(a.chain, b.chain, "{strategy}");
            assert_eq!(a.attempts, b.attempts, "{strategy}");
        }
    }

    #[test]
    fn greedy_is_deterministic_without_a_seed() {
        let dict = skewed(&["aa", "bb", "cc", "dd"]);
        let cfg = SearchConfig::for_strategy(Strategy::Greedy);
        let a = solve_dictionary(&dict, &cfg).unwrap();
        let b = solve_dictionary(&dict, &cfg).unwrap();
        assert_eq!(a.chain, b.chain);
    }

    #[test]
    fn local_search_never_loses_to_its_greedy_seed() {
        let dict = skewed(&["aa", "bb", "cc", "dd", "ee"]);
        let greedy = solve_dictionary(&dict, &seeded(Strategy::Greedy, 5)).unwrap();
        for strategy in [
            Strategy::HillClimbing,
            Strategy::RandomRestart,
            Strategy::SimulatedAnnealing,
        ] {
            let result = solve_dictionary(&dict, &seeded(strategy, 5)).unwrap();
            assert!(result.len() >= greedy.len(), "{strategy}");
        }
    }

    #[test]
    fn heuristics_stay_below_the_exhaustive_optimum() {
        let dict = dense(&["aa", "bb", "cc"]);
        let optimum = solve_dictionary(&dict, &seeded(Strategy::Exhaustive, 0)).unwrap();
        for &strategy in Strategy::all() {
            let result = solve_dictionary(&dict, &seeded(strategy, 9)).unwrap();
            assert!(result.len() <= optimum.len(), "{strategy}");
        }
    }

    #[test]
    fn coinciding_keys_return_the_largest_bucket() {
        let dict = KeyedDictionary::build(4, ["abcd", "xbcx", "ybcy", "pqrs", "zqrz", "mnop"]);
        for &strategy in Strategy::all() {
            let result = solve_dictionary(&dict, &seeded(strategy, 11)).unwrap();
            assert_eq!(result.chain, ["abcd", "xbcx", "ybcy"], "{strategy}");
        }
    }

    #[test]
    fn raised_stop_flag_returns_the_seed_path() {
        let dict = skewed(&["aa", "bb", "cc", "dd", "ee"]);
        let stop = AtomicBool::new(true);
        for strategy in [
            Strategy::HillClimbing,
            Strategy::RandomRestart,
            Strategy::SimulatedAnnealing,
        ] {
            let result = solve_dictionary_until(&dict, &seeded(strategy, 1), &stop).unwrap();
            assert!(result.stopped_early, "{strategy}");
            assert_eq!(result.attempts, 0, "{strategy}");
            assert!(is_valid_chain(&result.chain));
        }
    }

    #[test]
    fn zero_time_limit_stops_immediately() {
        let dict = skewed(&["aa", "bb", "cc", "dd"]);
        let cfg = SearchConfig {
            time_limit: Some(Duration::ZERO),
            ..seeded(Strategy::RandomRestart, 2)
        };
        let result = solve_dictionary(&dict, &cfg).unwrap();
        assert!(result.stopped_early);
    }

    #[test]
    fn hill_climbing_with_zero_budget_runs_one_sweep() {
        let dict = dense(&["aa", "bb", "cc"]);
        let generator = PathGenerator::new(&dict);
        let stop = AtomicBool::new(false);
        let cfg = SearchConfig {
            max_attempts: 0,
            ..SearchConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(17);
        let outcome =
            hill_climbing(&generator, &cfg, &mut rng, &Budget::new(&stop, None), |_| {}).unwrap();
        assert!(!outcome.stopped_early);
        assert!(outcome.attempts >= 1);
    }

    #[test]
    fn best_length_never_drops_between_rounds() {
        let dict = skewed(&["aa", "bb", "cc", "dd", "ee", "ff"]);
        let generator = PathGenerator::new(&dict);
        let stop = AtomicBool::new(false);
        let budget = Budget::new(&stop, None);

        for seed in [1, 7, 99] {
            let cfg = SearchConfig {
                restart_every: 3,
                ..seeded(Strategy::RandomRestart, seed)
            };
            let seed_len = generator.greedy_path().unwrap().len();

            let mut rng = SmallRng::seed_from_u64(seed);
            let mut climbing = vec![seed_len];
            let outcome =
                hill_climbing(&generator, &cfg, &mut rng, &budget, |len| climbing.push(len)).unwrap();
            assert_eq!(climbing.len() as u64, outcome.attempts + 1);
            assert!(climbing.windows(2).all(|w| w[0] <= w[1]), "hill climbing: {climbing:?}");
            assert_eq!(climbing.last(), Some(&outcome.best.len()));

            let mut rng = SmallRng::seed_from_u64(seed);
            let mut restarting = vec![seed_len];
            let outcome =
                random_restart(&generator, &cfg, &mut rng, &budget, |len| restarting.push(len)).unwrap();
            assert_eq!(restarting.len() as u64, outcome.attempts + 1);
            assert!(restarting.windows(2).all(|w| w[0] <= w[1]), "random restart: {restarting:?}");
            assert_eq!(restarting.last(), Some(&outcome.best.len()));
        }
    }

    #[test]
    fn annealing_round_count_follows_the_schedule() {
        let dict = skewed(&["aa", "bb", "cc", "dd"]);
        let generator = PathGenerator::new(&dict);
        let stop = AtomicBool::new(false);
        let cfg = SearchConfig {
            initial_temperature: 100.0,
            cooling_factor: 0.5,
            ..SearchConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(23);
        let outcome =
            simulated_annealing(&generator, &cfg, &mut rng, &Budget::new(&stop, None)).unwrap();
        // 100 -> 50 -> 25 -> 12.5 -> 6.25 -> 3.125 -> 1.5625 -> 0.78125
        assert_eq!(outcome.attempts, 7);
    }

    #[test]
    fn annealing_below_one_degree_returns_the_seed() {
        let dict = dense(&["aa", "bb", "cc"]);
        let cfg = SearchConfig {
            initial_temperature: 0.5,
            ..seeded(Strategy::SimulatedAnnealing, 4)
        };
        let result = solve_dictionary(&dict, &cfg).unwrap();
        let greedy = solve_dictionary(&dict, &seeded(Strategy::Greedy, 4)).unwrap();
        assert_eq!(result.chain, greedy.chain);
        assert_eq!(result.attempts, 0);
    }

    #[test]
    fn test_accept_move_metropolis() {
        let mut rng = SmallRng::seed_from_u64(42);

        // Longer or equal candidates are always accepted.
        assert!(accept_move(10, 5, 0.0001, &mut rng));
        assert!(accept_move(5, 5, 0.0001, &mut rng));

        // Shorter candidates at near-zero temperature almost never pass.
        let mut accepted_cold = 0;
        for _ in 0..1000 {
            if accept_move(4, 10, 0.0001, &mut rng) {
                accepted_cold += 1;
            }
        }
        assert!(accepted_cold < 5);

        // Slightly shorter candidates at high temperature nearly always pass.
        let mut accepted_hot = 0;
        for _ in 0..1000 {
            if accept_move(9, 10, 100.0, &mut rng) {
                accepted_hot += 1;
            }
        }
        assert!(accepted_hot > 900);
    }

    #[test]
    fn splitmix64_is_deterministic() {
        assert_eq!(splitmix64(0), splitmix64(0));
        assert_eq!(splitmix64(12345), splitmix64(12345));
        assert_ne!(splitmix64(0), splitmix64(1));
    }

    #[test]
    fn describe_names_the_relevant_knobs() {
        assert!(SearchConfig::for_strategy(Strategy::SimulatedAnnealing)
            .describe()
            .contains("cooling=0.99"));
        assert!(SearchConfig::for_strategy(Strategy::HillClimbing)
            .describe()
            .contains("attempts=1000"));
        assert_eq!(SearchConfig::for_strategy(Strategy::Greedy).describe(), "-");
    }
}
