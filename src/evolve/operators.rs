//! Genetic operators: uniform cell-wise crossover and letter mutation.
//!
//! Crossover performs no validity checking — a child may contain
//! duplicate or empty cells. Mutation repairs holes only probabilistically;
//! the fitness evaluator rewards or penalizes the result in the next
//! generation.

use rand::Rng;

use crate::grid::{Cell, Grid, Word};

use super::config::EvolveConfig;

/// Produces one child by uniform cell-wise crossover.
///
/// The child starts as an all-empty grid of the parents' dimensions. For
/// every cell an independent uniform draw against `crossover_rate` picks
/// parent 1's cell on a hit and parent 2's otherwise.
///
/// # Panics
/// Panics if the parents' dimensions differ.
pub fn crossover<R: Rng>(
    config: &EvolveConfig,
    parent1: &Grid,
    parent2: &Grid,
    rng: &mut R,
) -> Grid {
    assert_eq!(
        parent1.size(),
        parent2.size(),
        "parents must have equal dimensions"
    );

    let size = parent1.size();
    let mut child = Grid::empty(size);
    for row in 0..size {
        for col in 0..size {
            let cell = if rng.random_range(0.0..1.0) < config.crossover_rate {
                parent1.get(row, col)
            } else {
                parent2.get(row, col)
            };
            child.set(row, col, cell);
        }
    }
    child
}

/// Mutates one child in place.
///
/// Every empty or generated cell is independently considered: on a draw
/// below `mutation_rate` it is replaced by a [`Cell::Generated`] letter
/// chosen uniformly from the target word. Fixed clue cells are never
/// inspected, which is what preserves user-supplied clues across the run.
pub fn mutate<R: Rng>(child: &mut Grid, mutation_rate: f64, word: &Word, rng: &mut R) {
    for cell in child.cells_mut() {
        if cell.is_mutable() && rng.random_range(0.0..1.0) < mutation_rate {
            let letter = word.letters()[rng.random_range(0..word.letters().len())];
            *cell = Cell::Generated(letter);
        }
    }
}

/// Mutates a generation's children in place, in order.
pub fn mutate_children<R: Rng>(
    children: &mut [Grid],
    mutation_rate: f64,
    word: &Word,
    rng: &mut R,
) {
    for child in children {
        mutate(child, mutation_rate, word, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn word() -> Word {
        Word::parse("love").unwrap()
    }

    fn filled_grid(size: usize, letter: char) -> Grid {
        let mut grid = Grid::empty(size);
        for cell in grid.cells_mut() {
            *cell = Cell::Generated(letter);
        }
        grid
    }

    #[test]
    fn test_crossover_rate_one_copies_parent1() {
        let config = EvolveConfig::default().with_crossover_rate(1.0);
        let p1 = filled_grid(4, 'l');
        let p2 = filled_grid(4, 'v');
        let mut rng = StdRng::seed_from_u64(42);

        let child = crossover(&config, &p1, &p2, &mut rng);
        assert_eq!(child, p1);
    }

    #[test]
    fn test_crossover_rate_zero_copies_parent2() {
        let config = EvolveConfig::default().with_crossover_rate(0.0);
        let p1 = filled_grid(4, 'l');
        let p2 = filled_grid(4, 'v');
        let mut rng = StdRng::seed_from_u64(42);

        let child = crossover(&config, &p1, &p2, &mut rng);
        assert_eq!(child, p2);
    }

    #[test]
    fn test_crossover_preserves_dimensions() {
        let config = EvolveConfig::default();
        let p1 = Grid::empty(4);
        let p2 = filled_grid(4, 'e');
        let mut rng = StdRng::seed_from_u64(7);

        let child = crossover(&config, &p1, &p2, &mut rng);
        assert_eq!(child.size(), 4);
    }

    #[test]
    fn test_crossover_cells_come_from_parents() {
        let config = EvolveConfig::default();
        let mut p1 = Grid::empty(4);
        let mut p2 = Grid::empty(4);
        for (i, cell) in p1.cells_mut().iter_mut().enumerate() {
            *cell = if i % 3 == 0 {
                Cell::Fixed('l')
            } else {
                Cell::Generated('o')
            };
        }
        for cell in p2.cells_mut() {
            *cell = Cell::Generated('v');
        }

        let mut rng = StdRng::seed_from_u64(99);
        let child = crossover(&config, &p1, &p2, &mut rng);
        for (i, &cell) in child.cells().iter().enumerate() {
            let row = i / 4;
            let col = i % 4;
            assert!(
                cell == p1.get(row, col) || cell == p2.get(row, col),
                "cell ({row}, {col}) came from neither parent: {cell:?}"
            );
        }
    }

    #[test]
    #[should_panic(expected = "parents must have equal dimensions")]
    fn test_crossover_rejects_mismatched_parents() {
        let config = EvolveConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        crossover(&config, &Grid::empty(4), &Grid::empty(3), &mut rng);
    }

    #[test]
    fn test_mutation_rate_zero_is_identity() {
        let mut children = vec![Grid::empty(4), filled_grid(4, 'o')];
        let before = children.clone();
        let mut rng = StdRng::seed_from_u64(3);

        mutate_children(&mut children, 0.0, &word(), &mut rng);
        assert_eq!(children, before);
    }

    #[test]
    fn test_mutation_rate_one_fills_every_hole() {
        let mut child = Grid::empty(4);
        let mut rng = StdRng::seed_from_u64(5);

        mutate(&mut child, 1.0, &word(), &mut rng);
        assert!(child.cells().iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_mutation_never_touches_fixed_cells() {
        let mut child = filled_grid(4, 'o');
        child.set(0, 0, Cell::Fixed('l'));
        child.set(3, 3, Cell::Fixed('e'));
        let mut rng = StdRng::seed_from_u64(11);

        mutate(&mut child, 1.0, &word(), &mut rng);
        assert_eq!(child.get(0, 0), Cell::Fixed('l'));
        assert_eq!(child.get(3, 3), Cell::Fixed('e'));
    }

    #[test]
    fn test_mutation_writes_only_word_letters() {
        let word = word();
        let mut child = Grid::empty(4);
        let mut rng = StdRng::seed_from_u64(13);

        mutate(&mut child, 1.0, &word, &mut rng);
        for &cell in child.cells() {
            match cell {
                Cell::Generated(letter) => assert!(word.contains(letter)),
                other => panic!("expected a generated letter, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_seeded_rng_reproduces_operators() {
        let config = EvolveConfig::default();
        let p1 = filled_grid(4, 'l');
        let p2 = filled_grid(4, 'v');

        let mut rng_a = StdRng::seed_from_u64(21);
        let mut rng_b = StdRng::seed_from_u64(21);
        assert_eq!(
            crossover(&config, &p1, &p2, &mut rng_a),
            crossover(&config, &p1, &p2, &mut rng_b)
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_cell() -> impl Strategy<Value = Cell> {
            prop_oneof![
                Just(Cell::Empty),
                proptest::sample::select(vec!['l', 'o', 'v', 'e']).prop_map(Cell::Fixed),
                proptest::sample::select(vec!['l', 'o', 'v', 'e']).prop_map(Cell::Generated),
            ]
        }

        fn arb_grid(size: usize) -> impl Strategy<Value = Grid> {
            proptest::collection::vec(arb_cell(), size * size).prop_map(move |cells| {
                let mut grid = Grid::empty(size);
                grid.cells_mut().copy_from_slice(&cells);
                grid
            })
        }

        proptest! {
            #[test]
            fn crossover_never_invents_cells(
                p1 in arb_grid(4),
                p2 in arb_grid(4),
                rate in 0.0f64..=1.0,
                seed in any::<u64>(),
            ) {
                let config = EvolveConfig::default().with_crossover_rate(rate);
                let mut rng = StdRng::seed_from_u64(seed);
                let child = crossover(&config, &p1, &p2, &mut rng);

                prop_assert_eq!(child.size(), 4);
                for row in 0..4 {
                    for col in 0..4 {
                        let cell = child.get(row, col);
                        prop_assert!(cell == p1.get(row, col) || cell == p2.get(row, col));
                    }
                }
            }

            #[test]
            fn mutation_preserves_fixed_and_alphabet(
                grid in arb_grid(4),
                rate in 0.0f64..=1.0,
                seed in any::<u64>(),
            ) {
                let word = Word::parse("love").unwrap();
                let before = grid.clone();
                let mut after = grid;
                let mut rng = StdRng::seed_from_u64(seed);
                mutate(&mut after, rate, &word, &mut rng);

                for row in 0..4 {
                    for col in 0..4 {
                        let old = before.get(row, col);
                        let new = after.get(row, col);
                        if let Cell::Fixed(_) = old {
                            prop_assert_eq!(new, old);
                        } else {
                            // Unchanged, or rewritten to a generated word letter.
                            let rewritten = matches!(
                                new,
                                Cell::Generated(letter) if word.contains(letter)
                            );
                            prop_assert!(new == old || rewritten);
                        }
                    }
                }
            }
        }
    }
}
