//! Fitness evaluation.
//!
//! Scores a candidate grid against the row, column, and subgrid
//! constraints. Deterministic, side-effect free, no randomness.
//!
//! Scoring is all-or-nothing per unit: a row or column is worth +1 when it
//! is completely filled with pairwise-distinct letters and −1 otherwise;
//! a subgrid block is worth +4 or −4 under the same rule. There is no
//! partial credit, which biases the search toward fully correct units.

use crate::grid::{Cell, Grid};

use super::config::EvolveConfig;

/// Component scores for one candidate.
///
/// `total` always equals `rows + columns + subgrids`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitnessReport {
    pub total: i32,
    pub rows: i32,
    pub columns: i32,
    pub subgrids: i32,
}

/// Evaluates one candidate grid.
pub fn evaluate(config: &EvolveConfig, grid: &Grid) -> FitnessReport {
    debug_assert_eq!(grid.size(), config.grid_size);
    let size = grid.size();

    let mut rows = 0;
    for row in grid.rows() {
        rows += unit_score(row.iter().copied(), 1);
    }

    let mut columns = 0;
    for col in 0..size {
        columns += unit_score((0..size).map(|row| grid.get(row, col)), 1);
    }

    let mut subgrids = 0;
    let block = config.subgrid_size;
    for block_row in (0..size).step_by(block) {
        for block_col in (0..size).step_by(block) {
            let cells = (block_row..block_row + block).flat_map(|row| {
                (block_col..block_col + block).map(move |col| (row, col))
            });
            subgrids += unit_score(cells.map(|(row, col)| grid.get(row, col)), 4);
        }
    }

    FitnessReport {
        total: rows + columns + subgrids,
        rows,
        columns,
        subgrids,
    }
}

/// Scores one unit (row, column, or subgrid block): `+weight` when every
/// cell is filled and all letters are pairwise distinct, `-weight`
/// otherwise. Letters compare case-normalized; the fixed/generated tag is
/// irrelevant here.
fn unit_score(cells: impl Iterator<Item = Cell>, weight: i32) -> i32 {
    let mut seen: Vec<char> = Vec::new();
    for cell in cells {
        match cell.letter() {
            None => return -weight,
            Some(letter) => {
                if seen.contains(&letter) {
                    return -weight;
                }
                seen.push(letter);
            }
        }
    }
    weight
}
