//! Evolutionary search for word-based Latin square grids.
//!
//! Given a 4-letter word, this crate searches for an assignment of its
//! letters to a square grid in which every row, every column, and every
//! axis-aligned subgrid contains each letter exactly once — a Sudoku-like
//! constraint system solved with a genetic algorithm rather than
//! backtracking. There is no exact-satisfaction guarantee: a run that
//! exhausts its generation budget returns the best candidate seen, which
//! is a normal outcome.
//!
//! # Architecture
//!
//! - [`grid`]: the data model — cells with explicit fixed/generated tags,
//!   candidate grids, and the target word
//! - [`evolve`]: the search engine — fitness, selection, operators, and
//!   the generation loop
//! - [`seed`]: initial population construction from user clue grids
//! - [`intake`]: interactive console acquisition of the word and clues
//! - [`report`]: per-generation CSV snapshots and the final summary
//!
//! The `wordoku` binary wires these together into an interactive run.

pub mod evolve;
pub mod grid;
pub mod intake;
pub mod report;
pub mod seed;
