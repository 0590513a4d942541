//! Elite selection and breeding-pair choice.
//!
//! Each generation the scored population is partitioned into an elite set
//! (carried over unchanged) and a breeding pool (everyone else, ordered
//! from lowest to highest fitness). Both parents for every child of the
//! generation are then drawn from the pool according to a
//! [`BreedingPolicy`].

use std::str::FromStr;

use crate::grid::Grid;

use super::config::EvolveConfig;
use super::fitness::FitnessReport;

/// How the breeding pair is drawn from the non-elite pool.
///
/// The historical behavior of this search breeds every child of a
/// generation from the two *lowest*-fitness non-elites. That choice looks
/// backwards but is kept as the default; [`Fittest`](Self::Fittest) is
/// the conventional alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreedingPolicy {
    /// Parents are the two lowest-fitness members of the pool
    /// (indices 0 and 1 of the ascending ordering).
    WeakTail,
    /// Parents are the two highest-fitness members of the pool.
    Fittest,
}

impl Default for BreedingPolicy {
    fn default() -> Self {
        BreedingPolicy::WeakTail
    }
}

impl FromStr for BreedingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "select-worst" | "weak-tail" => Ok(BreedingPolicy::WeakTail),
            "select-best" | "fittest" => Ok(BreedingPolicy::Fittest),
            other => Err(format!(
                "unknown breeding policy '{other}' (expected 'select-worst' or 'select-best')"
            )),
        }
    }
}

/// Result of partitioning a scored population.
#[derive(Debug, Clone)]
pub struct Partition {
    /// The top-fitness candidates, preserved unchanged into the next
    /// generation. Ties are broken by original population order.
    pub elites: Vec<Grid>,
    /// The remaining candidates, ordered from lowest to highest fitness.
    pub breeding: Vec<Grid>,
}

/// Splits the population into `floor(elitism_rate × population_size)`
/// elites and the ascending-ordered breeding pool.
///
/// The elite count is computed from the *configured* population size, not
/// the actual one, so a drifted population keeps the same elite count.
///
/// # Panics
/// Panics if `population` and `reports` differ in length or if the elite
/// count exceeds the population; the runner's precondition checks rule
/// both out.
pub fn partition(config: &EvolveConfig, population: &[Grid], reports: &[FitnessReport]) -> Partition {
    assert_eq!(
        population.len(),
        reports.len(),
        "one fitness report per candidate"
    );
    let num_elites = config.num_elites();
    assert!(
        num_elites <= population.len(),
        "elite count exceeds population"
    );

    // Stable descending sort: among ties the earlier candidate wins.
    let mut ranked: Vec<usize> = (0..population.len()).collect();
    ranked.sort_by_key(|&i| std::cmp::Reverse(reports[i].total));

    let elites = ranked[..num_elites]
        .iter()
        .map(|&i| population[i].clone())
        .collect();

    let mut rest: Vec<usize> = ranked[num_elites..].to_vec();
    rest.sort_by_key(|&i| reports[i].total);
    let breeding = rest.iter().map(|&i| population[i].clone()).collect();

    Partition { elites, breeding }
}

/// Picks the generation's breeding pair from the ascending pool.
///
/// # Panics
/// Panics if the pool has fewer than two members; configuration
/// validation guarantees otherwise.
pub fn parents(policy: BreedingPolicy, breeding: &[Grid]) -> (&Grid, &Grid) {
    assert!(breeding.len() >= 2, "breeding pool needs at least two members");
    match policy {
        BreedingPolicy::WeakTail => (&breeding[0], &breeding[1]),
        BreedingPolicy::Fittest => {
            let last = breeding.len() - 1;
            (&breeding[last], &breeding[last - 1])
        }
    }
}
