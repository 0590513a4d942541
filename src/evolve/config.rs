//! Run configuration.
//!
//! [`EvolveConfig`] holds all parameters that control the evolutionary loop.

use thiserror::Error;

use super::selection::BreedingPolicy;

/// Error produced by [`EvolveConfig::validate`].
///
/// Invalid configurations fail fast before the loop starts; values are
/// never silently clamped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid_size must be positive")]
    ZeroGridSize,
    #[error("subgrid_size must be positive")]
    ZeroSubgridSize,
    #[error("grid_size {grid_size} is not divisible by subgrid_size {subgrid_size}")]
    IndivisibleGrid { grid_size: usize, subgrid_size: usize },
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("selected_population_size must be at least 2, got {0}")]
    SelectedTooSmall(usize),
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
    #[error("max_generations must be at least 1")]
    ZeroGenerations,
    #[error("elitism leaves {non_elites} non-elites; at least 2 are needed as a breeding pair")]
    BreedingPoolTooSmall { non_elites: usize },
}

/// Configuration for an evolutionary search run.
///
/// Defaults follow the reference 4×4 setup: a 4-letter word on a 4×4 grid
/// with 2×2 subgrids, population 6, four children per generation, and a
/// target fitness equal to the grid's theoretical maximum (24).
///
/// ```
/// use wordoku::evolve::EvolveConfig;
///
/// let config = EvolveConfig::default();
/// assert_eq!(config.grid_size, 4);
/// assert_eq!(config.max_fitness, 24);
/// assert!(config.validate().is_ok());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use wordoku::evolve::{BreedingPolicy, EvolveConfig};
///
/// let config = EvolveConfig::default()
///     .with_population_size(12)
///     .with_selected_population_size(10)
///     .with_mutation_rate(0.05)
///     .with_breeding(BreedingPolicy::Fittest)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct EvolveConfig {
    /// Side length of the square grid.
    pub grid_size: usize,

    /// Side length of each axis-aligned subgrid block.
    ///
    /// `grid_size` must be evenly divisible by this.
    pub subgrid_size: usize,

    /// Number of candidates in the initial population.
    pub population_size: usize,

    /// Number of children produced per generation.
    pub selected_population_size: usize,

    /// Fraction of the population preserved unchanged as elites (0.0–1.0).
    pub elitism_rate: f64,

    /// Per-cell mutation probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Per-cell probability of inheriting from parent 1 rather than
    /// parent 2 during crossover (0.0–1.0).
    pub crossover_rate: f64,

    /// Hard generation cap.
    pub max_generations: usize,

    /// Target total fitness that ends the search early.
    ///
    /// Compared by exact equality against each candidate's total score.
    /// For a solvable run this should be
    /// [`theoretical_max_fitness`](Self::theoretical_max_fitness).
    pub max_fitness: i32,

    /// How breeding parents are drawn from the non-elite pool.
    pub breeding: BreedingPolicy,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolveConfig {
    fn default() -> Self {
        Self {
            grid_size: 4,
            subgrid_size: 2,
            population_size: 6,
            selected_population_size: 4,
            elitism_rate: 0.33,
            mutation_rate: 0.1,
            crossover_rate: 0.5,
            max_generations: 500,
            max_fitness: Self::theoretical_max_fitness(4, 2),
            breeding: BreedingPolicy::default(),
            seed: None,
        }
    }
}

impl EvolveConfig {
    /// Sets the grid side length.
    pub fn with_grid_size(mut self, n: usize) -> Self {
        self.grid_size = n;
        self
    }

    /// Sets the subgrid side length.
    pub fn with_subgrid_size(mut self, n: usize) -> Self {
        self.subgrid_size = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of children produced per generation.
    pub fn with_selected_population_size(mut self, n: usize) -> Self {
        self.selected_population_size = n;
        self
    }

    /// Sets the elitism rate.
    pub fn with_elitism_rate(mut self, rate: f64) -> Self {
        self.elitism_rate = rate;
        self
    }

    /// Sets the per-cell mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the per-cell crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the early-termination fitness target.
    pub fn with_max_fitness(mut self, fitness: i32) -> Self {
        self.max_fitness = fitness;
        self
    }

    /// Sets the breeding policy.
    pub fn with_breeding(mut self, policy: BreedingPolicy) -> Self {
        self.breeding = policy;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The total score of a fully valid grid:
    /// every row (+1 each), every column (+1 each), and every subgrid
    /// (+4 each) satisfied.
    pub fn theoretical_max_fitness(grid_size: usize, subgrid_size: usize) -> i32 {
        let blocks_per_side = grid_size / subgrid_size;
        let subgrid_count = blocks_per_side * blocks_per_side;
        2 * grid_size as i32 + 4 * subgrid_count as i32
    }

    /// Number of elites preserved each generation:
    /// `floor(elitism_rate × population_size)`.
    pub fn num_elites(&self) -> usize {
        (self.population_size as f64 * self.elitism_rate) as usize
    }

    /// Population size after one replacement step:
    /// `selected_population_size + num_elites`.
    ///
    /// When this differs from `population_size` the population drifts to
    /// this count after the first generation and stays there.
    pub fn replacement_size(&self) -> usize {
        self.selected_population_size + self.num_elites()
    }

    /// Whether replacement preserves the configured population size.
    pub fn is_steady_state(&self) -> bool {
        self.replacement_size() == self.population_size
    }

    /// Validates the configuration.
    ///
    /// A replacement size that differs from `population_size` is allowed
    /// (the loop handles the drifted count); the runner logs a warning
    /// for it instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.subgrid_size == 0 {
            return Err(ConfigError::ZeroSubgridSize);
        }
        if self.grid_size % self.subgrid_size != 0 {
            return Err(ConfigError::IndivisibleGrid {
                grid_size: self.grid_size,
                subgrid_size: self.subgrid_size,
            });
        }
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.selected_population_size < 2 {
            return Err(ConfigError::SelectedTooSmall(self.selected_population_size));
        }
        for (name, value) in [
            ("elitism_rate", self.elitism_rate),
            ("mutation_rate", self.mutation_rate),
            ("crossover_rate", self.crossover_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RateOutOfRange { name, value });
            }
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        let non_elites = self.population_size - self.num_elites();
        if non_elites < 2 {
            return Err(ConfigError::BreedingPoolTooSmall { non_elites });
        }
        Ok(())
    }
}
