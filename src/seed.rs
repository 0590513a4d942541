//! Initial population seeding.
//!
//! Builds the starting population from the user-entered clue grids: the
//! seeds are cloned round-robin and every empty cell is filled with a
//! random generated word letter. Fixed clues pass through untouched, so
//! every candidate in the run descends from the user's clues.

use rand::Rng;

use crate::evolve::EvolveConfig;
use crate::grid::{Cell, Grid, Word};

/// Produces `config.population_size` candidates from the given seed grids.
///
/// # Panics
/// Panics if `seeds` is empty.
pub fn seed_population<R: Rng>(
    config: &EvolveConfig,
    word: &Word,
    seeds: &[Grid],
    rng: &mut R,
) -> Vec<Grid> {
    assert!(!seeds.is_empty(), "cannot seed from an empty grid list");

    (0..config.population_size)
        .map(|i| {
            let mut candidate = seeds[i % seeds.len()].clone();
            for cell in candidate.cells_mut() {
                if cell.is_empty() {
                    let letter = word.letters()[rng.random_range(0..word.letters().len())];
                    *cell = Cell::Generated(letter);
                }
            }
            candidate
        })
        .collect()
}
