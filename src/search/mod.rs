//! Exact search drivers and their shared pieces.

pub mod branch_and_bound;
pub mod branch_and_cut;
pub mod separation;

pub use branch_and_bound::BranchAndBound;
pub use branch_and_cut::BranchAndCut;

use crate::config::SearchParams;
use crate::heuristic::{Clique, GreedyClique};
use crate::solvers::lp::build_clique_relaxation;
use crate::topology::{Graph, SimpleGraph};
use bitvec::vec::BitVec;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Best feasible solution known to the search.
///
/// `value` only ever increases, and `solution` always encodes a verified
/// clique as a near-integral indicator vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Incumbent {
    pub value: i64,
    pub solution: Vec<f64>,
}

impl Incumbent {
    /// Seed the incumbent from a heuristic clique.
    pub fn from_clique(clique: &Clique) -> Self {
        Self {
            value: clique.size() as i64,
            solution: clique.indicator.clone(),
        }
    }
}

/// Result of a finished (or timed-out) search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Members of the best clique found, ascending vertex ids.
    pub clique: Vec<usize>,
    /// Size of that clique.
    pub size: i64,
    /// Number of search nodes visited.
    pub nodes: u64,
    /// Whether the wall-clock limit cut the search short. When false, the
    /// result is a certified maximum clique.
    pub timed_out: bool,
    /// Total search time.
    pub duration: Duration,
}

/// Deadline-expired signal; unwinds the whole recursion via `?` without
/// touching the incumbent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Timeout;

/// Which exact driver to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    BranchAndBound,
    BranchAndCut,
}

/// Everything produced while solving one instance.
#[derive(Debug, Clone)]
pub struct InstanceSolution {
    /// The heuristic clique that seeded the search.
    pub heuristic: Clique,
    /// Whether the heuristic clique passed its self-check.
    pub heuristic_ok: bool,
    /// Heuristic wall-clock time, seconds.
    pub heuristic_secs: f64,
    /// Outcome of the exact search.
    pub outcome: SearchOutcome,
}

/// Full pipeline over one instance: build the relaxation, seed the incumbent
/// with the greedy heuristic, then close the gap with the chosen driver.
///
/// All randomness comes from `params.seed`, so repeated calls produce
/// identical incumbents and constraint streams.
///
/// # Example
///
/// ```
/// use cliquer::config::SearchParams;
/// use cliquer::search::{solve_instance, Algorithm};
/// use cliquer::topology::SimpleGraph;
///
/// let graph = SimpleGraph::complete(4);
/// let solution = solve_instance(&graph, Algorithm::BranchAndCut, &SearchParams::default());
/// assert_eq!(solution.outcome.size, 4);
/// assert!(!solution.outcome.timed_out);
/// ```
pub fn solve_instance(
    graph: &SimpleGraph,
    algorithm: Algorithm,
    params: &SearchParams,
) -> InstanceSolution {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let model = build_clique_relaxation(graph, params, &mut rng);

    let heuristic_start = Instant::now();
    let heuristic = GreedyClique::new(graph).find_clique(params, &mut rng);
    let heuristic_secs = heuristic_start.elapsed().as_secs_f64();
    let heuristic_ok = heuristic.verify(graph);
    if !heuristic_ok {
        tracing::warn!("heuristic returned an invalid clique");
    }
    tracing::debug!(size = heuristic.size(), "heuristic incumbent");

    let incumbent = Incumbent::from_clique(&heuristic);
    let outcome = match algorithm {
        Algorithm::BranchAndBound => {
            BranchAndBound::new(graph, model, incumbent, params).run()
        }
        Algorithm::BranchAndCut => BranchAndCut::new(graph, model, incumbent, params).run(),
    };
    InstanceSolution {
        heuristic,
        heuristic_ok,
        heuristic_secs,
        outcome,
    }
}

/// Closeness test combining a relative 1e-9 term with an absolute tolerance.
pub(crate) fn isclose(a: f64, b: f64, abs_tol: f64) -> bool {
    (a - b).abs() <= f64::max(1e-9 * f64::max(a.abs(), b.abs()), abs_tol)
}

/// Whether every variable sits within `abs_tol` of 0 or 1.
pub(crate) fn is_all_integer(values: &[f64], abs_tol: f64) -> bool {
    values
        .iter()
        .all(|&x| isclose(x, 0.0, abs_tol) || isclose(x, 1.0, abs_tol))
}

/// Vertices whose variable sits within `abs_tol` of 1.
pub(crate) fn integral_vertices(values: &[f64], abs_tol: f64) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|&(_, &x)| isclose(x, 1.0, abs_tol))
        .map(|(v, _)| v)
        .collect()
}

/// Pick the branching variable: among fractional variables (optionally
/// skipping vertices already fixed on the current path), the one closest to 1.
/// The sweep compares with `<=`, so the last qualifying index wins.
pub(crate) fn choose_branch(values: &[f64], abs_tol: f64, fixed: Option<&BitVec>) -> Option<usize> {
    let mut selected = None;
    let mut min_diff = 2.0;
    for (index, &value) in values.iter().enumerate() {
        if let Some(fixed) = fixed {
            if fixed[index] {
                continue;
            }
        }
        if isclose(value, 0.0, abs_tol) || isclose(value, 1.0, abs_tol) {
            continue;
        }
        let diff = (1.0 - value).abs();
        if diff <= min_diff {
            min_diff = diff;
            selected = Some(index);
        }
    }
    selected
}

/// Completeness check: `vertices` is a clique iff its induced subgraph has
/// k(k-1)/2 edges.
pub(crate) fn is_clique<G: Graph>(graph: &G, vertices: &[usize]) -> bool {
    let k = vertices.len();
    graph.induced_edge_count(vertices) == k * (k - 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::SimpleGraph;
    use bitvec::bitvec;
    use bitvec::order::Lsb0;

    #[test]
    fn test_is_all_integer() {
        assert!(is_all_integer(&[0.0, 1.0, 0.99999, 0.00001], 1e-4));
        assert!(!is_all_integer(&[0.0, 0.5, 1.0], 1e-4));
    }

    #[test]
    fn test_integral_vertices() {
        assert_eq!(integral_vertices(&[1.0, 0.0, 0.99995, 0.3], 1e-4), vec![0, 2]);
    }

    #[test]
    fn test_choose_branch_prefers_closest_to_one_last_wins() {
        // 0.8 and 0.8 tie; the later index wins
        assert_eq!(choose_branch(&[0.8, 0.3, 0.8], 1e-4, None), Some(2));
        assert_eq!(choose_branch(&[0.4, 0.9, 0.2], 1e-4, None), Some(1));
        assert_eq!(choose_branch(&[0.0, 1.0], 1e-4, None), None);
    }

    #[test]
    fn test_choose_branch_skips_fixed() {
        let fixed = bitvec![0, 1, 0];
        assert_eq!(choose_branch(&[0.5, 0.9, 0.6], 1e-4, Some(&fixed)), Some(2));
    }

    #[test]
    fn test_is_clique() {
        let graph = SimpleGraph::complete(4);
        assert!(is_clique(&graph, &[0, 1, 2, 3]));
        let cycle = SimpleGraph::cycle(5);
        assert!(is_clique(&cycle, &[0, 1]));
        assert!(!is_clique(&cycle, &[0, 1, 2]));
        assert!(is_clique(&cycle, &[]));
    }
}
