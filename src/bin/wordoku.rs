//! Interactive evolutionary word-grid search.
//!
//! Prompts for a 4-letter word and two clue grids, evolves a population
//! toward a grid where every row, column, and subgrid holds each letter
//! of the word exactly once, writes per-generation fitness snapshots to a
//! CSV file, and prints the winning candidate.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use wordoku::evolve::{BreedingPolicy, EvolveConfig, EvolveRunner};
use wordoku::intake;
use wordoku::report::{render_summary, CsvSink};
use wordoku::seed::seed_population;

#[derive(Parser, Debug)]
#[command(name = "wordoku")]
#[command(version, about = "Evolves word Latin-square grids with a genetic algorithm", long_about = None)]
struct Args {
    /// Side length of the square grid
    #[arg(long, default_value_t = 4)]
    grid_size: usize,

    /// Side length of each subgrid block (must divide the grid size)
    #[arg(long, default_value_t = 2)]
    subgrid_size: usize,

    /// Number of candidates in the initial population
    #[arg(short = 'n', long, default_value_t = 6)]
    population_size: usize,

    /// Number of children produced per generation
    #[arg(long, default_value_t = 4)]
    children: usize,

    /// Fraction of the population preserved unchanged as elites
    #[arg(long, default_value_t = 0.33)]
    elitism_rate: f64,

    /// Per-cell mutation probability
    #[arg(short = 'm', long, default_value_t = 0.1)]
    mutation_rate: f64,

    /// Per-cell probability of inheriting from parent 1 during crossover
    #[arg(short = 'c', long, default_value_t = 0.5)]
    crossover_rate: f64,

    /// Hard generation cap
    #[arg(short = 'g', long, default_value_t = 500)]
    max_generations: usize,

    /// Target total fitness ending the search early
    /// (default: the grid's theoretical maximum)
    #[arg(long)]
    max_fitness: Option<i32>,

    /// Breeding-pair policy: select-worst (historical) or select-best
    #[arg(long, default_value = "select-worst")]
    breeding: BreedingPolicy,

    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Per-generation fitness snapshot file
    #[arg(long, default_value = "fitness_scores.csv")]
    csv: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = EvolveConfig::default()
        .with_grid_size(args.grid_size)
        .with_subgrid_size(args.subgrid_size)
        .with_population_size(args.population_size)
        .with_selected_population_size(args.children)
        .with_elitism_rate(args.elitism_rate)
        .with_mutation_rate(args.mutation_rate)
        .with_crossover_rate(args.crossover_rate)
        .with_max_generations(args.max_generations)
        .with_breeding(args.breeding);
    config.seed = args.seed;

    // Reject a broken configuration before bothering the user with prompts.
    config.validate()?;
    let max_fitness = args.max_fitness.unwrap_or_else(|| {
        EvolveConfig::theoretical_max_fitness(config.grid_size, config.subgrid_size)
    });
    config = config.with_max_fitness(max_fitness);

    let word = intake::prompt_word()?;
    let parent1 = intake::prompt_clue_grid(&word, config.grid_size, 1)?;
    let parent2 = intake::prompt_clue_grid(&word, config.grid_size, 2)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };
    let population = seed_population(&config, &word, &[parent1, parent2], &mut rng);

    let mut sink = CsvSink::new(&args.csv);
    let result = EvolveRunner::run_with_rng(&config, population, &word, &mut sink, &mut rng)?;

    print!("{}", render_summary(&result));
    Ok(())
}
