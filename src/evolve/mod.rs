//! The evolutionary search engine.
//!
//! A genetic algorithm over word-grid candidates: fitness evaluation
//! against the row/column/subgrid constraints, elitist selection, uniform
//! cell-wise crossover, and per-cell letter mutation, driven by a
//! generation loop with a dual termination policy (target fitness or
//! generation cap).
//!
//! # Key Types
//!
//! - [`EvolveConfig`]: run parameters with fail-fast validation
//! - [`EvolveRunner`]: executes the generation loop
//! - [`EvolveResult`]: final candidate with its own component scores
//! - [`GenerationSink`]: per-generation reporting seam
//! - [`BreedingPolicy`]: how the breeding pair is drawn from the
//!   non-elite pool
//!
//! # Submodules
//!
//! - [`fitness`]: the all-or-nothing per-unit scoring function
//! - [`operators`]: crossover and mutation

mod config;
pub mod fitness;
pub mod operators;
mod runner;
mod selection;

pub use config::{ConfigError, EvolveConfig};
pub use fitness::{evaluate, FitnessReport};
pub use runner::{EvolveResult, EvolveRunner, GenerationSink, NullSink, Termination};
pub use selection::{parents, partition, BreedingPolicy, Partition};
