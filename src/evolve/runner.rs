//! The evolutionary loop.
//!
//! [`EvolveRunner`] orchestrates the generation cycle: evaluation →
//! reporting → termination check → selection → crossover → mutation →
//! replacement. The population and the running best are the only state
//! carried between generations.

use anyhow::{ensure, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::grid::{Grid, Word};

use super::config::EvolveConfig;
use super::fitness::{evaluate, FitnessReport};
use super::operators::{crossover, mutate_children};
use super::selection::{parents, partition};

/// Receives every generation's scored population.
///
/// Called exactly once per generation, before the termination check, so
/// the sink always sees the generation that produced the final result.
pub trait GenerationSink {
    fn record(
        &mut self,
        generation: usize,
        population: &[Grid],
        reports: &[FitnessReport],
    ) -> Result<()>;
}

/// A sink that discards everything. Useful for tests and benchmarks.
pub struct NullSink;

impl GenerationSink for NullSink {
    fn record(&mut self, _generation: usize, _population: &[Grid], _reports: &[FitnessReport]) -> Result<()> {
        Ok(())
    }
}

/// Why the run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Some candidate's total score matched the configured target.
    FitnessReached,
    /// The generation cap was exhausted. A normal outcome, not an error.
    GenerationLimit,
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Termination::FitnessReached => write!(f, "target fitness reached"),
            Termination::GenerationLimit => write!(f, "generation limit reached"),
        }
    }
}

/// Result of an evolutionary run.
#[derive(Debug, Clone)]
pub struct EvolveResult {
    /// The highest-total-fitness candidate of the last evaluated
    /// generation, clue cells intact.
    pub best: Grid,

    /// The component scores captured together with `best` at the moment
    /// it was identified — never reconstructed from other candidates.
    pub fitness: FitnessReport,

    /// Number of generations evaluated.
    pub generations: usize,

    /// Why the run stopped.
    pub termination: Termination,
}

/// Executes the evolutionary search.
///
/// # Usage
///
/// ```
/// use wordoku::evolve::{EvolveConfig, EvolveRunner, NullSink};
/// use wordoku::grid::Word;
/// use wordoku::seed::seed_population;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let config = EvolveConfig::default().with_seed(42);
/// let word = Word::parse("love").unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// let seeds = vec![wordoku::grid::Grid::empty(4), wordoku::grid::Grid::empty(4)];
/// let population = seed_population(&config, &word, &seeds, &mut rng);
///
/// let result = EvolveRunner::run(&config, population, &word, &mut NullSink).unwrap();
/// assert_eq!(result.best.size(), 4);
/// ```
pub struct EvolveRunner;

impl EvolveRunner {
    /// Runs the search with an RNG built from `config.seed`.
    pub fn run<S: GenerationSink>(
        config: &EvolveConfig,
        population: Vec<Grid>,
        word: &Word,
        sink: &mut S,
    ) -> Result<EvolveResult> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(config, population, word, sink, &mut rng)
    }

    /// Runs the search drawing all randomness from the given source.
    ///
    /// The population is consumed: it is replaced wholesale each
    /// generation. Its candidates must all match the configured grid
    /// dimensions and respect the fixed/generated cell convention — the
    /// seeding contract.
    pub fn run_with_rng<S: GenerationSink, R: Rng>(
        config: &EvolveConfig,
        mut population: Vec<Grid>,
        word: &Word,
        sink: &mut S,
        rng: &mut R,
    ) -> Result<EvolveResult> {
        config.validate()?;
        ensure!(
            population.len() >= config.num_elites() + 2,
            "population of {} cannot supply {} elites and a breeding pair",
            population.len(),
            config.num_elites(),
        );

        if !config.is_steady_state() {
            warn!(
                population_size = config.population_size,
                replacement_size = config.replacement_size(),
                "replacement size differs from population size; the population will drift after the first generation"
            );
        }

        let mut best: Option<(Grid, FitnessReport)> = None;

        for generation in 0..config.max_generations {
            let reports: Vec<FitnessReport> =
                population.iter().map(|grid| evaluate(config, grid)).collect();

            sink.record(generation, &population, &reports)?;

            // Winner of this generation, first index on ties. Overwrites
            // the previous generation's winner.
            let mut best_idx = 0;
            for (i, report) in reports.iter().enumerate() {
                if report.total > reports[best_idx].total {
                    best_idx = i;
                }
            }
            let winner = (population[best_idx].clone(), reports[best_idx]);

            debug!(
                generation,
                best_total = winner.1.total,
                population = population.len(),
                "generation evaluated"
            );

            if reports.iter().any(|report| report.total == config.max_fitness) {
                let (grid, fitness) = winner;
                info!(generation, total = fitness.total, "target fitness reached");
                return Ok(EvolveResult {
                    best: grid,
                    fitness,
                    generations: generation + 1,
                    termination: Termination::FitnessReached,
                });
            }
            best = Some(winner);

            let split = partition(config, &population, &reports);
            let (parent1, parent2) = parents(config.breeding, &split.breeding);

            let mut children: Vec<Grid> = (0..config.selected_population_size)
                .map(|_| crossover(config, parent1, parent2, rng))
                .collect();
            mutate_children(&mut children, config.mutation_rate, word, rng);

            // Children first, then elites.
            children.extend(split.elites);
            population = children;
        }

        let (grid, fitness) =
            best.expect("max_generations >= 1 guarantees at least one generation");
        info!(
            generations = config.max_generations,
            total = fitness.total,
            "generation limit reached"
        );
        Ok(EvolveResult {
            best: grid,
            fitness,
            generations: config.max_generations,
            termination: Termination::GenerationLimit,
        })
    }
}
