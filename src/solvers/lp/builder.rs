//! Initial relaxation of the clique polytope.
//!
//! Both row families are valid for the clique polytope: a clique meets any
//! independent set in at most one vertex. Independent-set rows dominate pair
//! rows, so a non-edge whose endpoints already share a selected set
//! contributes nothing and is dropped.

use crate::coloring::{color_classes, ColoringStrategy, ALL_STRATEGIES};
use crate::config::SearchParams;
use crate::solvers::lp::{ConstraintKind, LpModel, RowSense};
use crate::topology::Graph;
use rand::Rng;
use std::collections::BTreeSet;

/// Pool the color classes of size >= 3 over every coloring strategy.
///
/// The random-sequential strategy runs `params.coloring_repetitions` times to
/// diversify the pool; classes are deduplicated as sorted vertex tuples.
/// Size-2 classes are skipped: a pair of non-adjacent vertices is just a
/// non-edge and is handled by the pair rows.
pub fn collect_independent_sets<G: Graph, R: Rng>(
    graph: &G,
    params: &SearchParams,
    rng: &mut R,
) -> Vec<Vec<usize>> {
    let mut pool: BTreeSet<Vec<usize>> = BTreeSet::new();
    for strategy in ALL_STRATEGIES {
        let runs = if strategy == ColoringStrategy::RandomSequential {
            params.coloring_repetitions
        } else {
            1
        };
        for _ in 0..runs {
            let colors = strategy.apply(graph, rng);
            for class in color_classes(&colors) {
                if class.len() >= 3 {
                    pool.insert(class);
                }
            }
        }
    }
    pool.into_iter().collect()
}

/// Build the initial LP: one variable per vertex with `0 <= x_v <= 1`,
/// objective `max Σ x_v`, one row per pooled independent set, and one pair
/// row per non-edge not already covered by a pooled set.
pub fn build_clique_relaxation<G: Graph, R: Rng>(
    graph: &G,
    params: &SearchParams,
    rng: &mut R,
) -> LpModel {
    let sets = collect_independent_sets(graph, params, rng);

    let uncovered: Vec<(usize, usize)> = graph
        .non_edges()
        .into_iter()
        .filter(|&(u, v)| {
            !sets
                .iter()
                .any(|set| set.binary_search(&u).is_ok() && set.binary_search(&v).is_ok())
        })
        .collect();

    let mut model = LpModel::new(graph.num_vertices());
    let mut counter = 0usize;
    for set in &sets {
        counter += 1;
        model.add_constraint(
            format!("c{counter}"),
            ConstraintKind::Initial,
            set.iter().map(|&v| (v, 1.0)).collect(),
            RowSense::Le,
            1.0,
        );
    }
    for (u, v) in uncovered {
        counter += 1;
        model.add_constraint(
            format!("c{counter}"),
            ConstraintKind::Initial,
            vec![(u, 1.0), (v, 1.0)],
            RowSense::Le,
            1.0,
        );
    }
    model
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::SimpleGraph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn build(graph: &SimpleGraph, seed: u64) -> LpModel {
        let params = SearchParams::default();
        let mut rng = StdRng::seed_from_u64(seed);
        build_clique_relaxation(graph, &params, &mut rng)
    }

    #[test]
    fn test_complete_graph_has_no_rows() {
        // K5: no non-edges and every color class is a single vertex
        let model = build(&SimpleGraph::complete(5), 0);
        assert_eq!(model.num_constraints(), 0);
    }

    #[test]
    fn test_cycle_gets_pair_rows_only() {
        // C5 has no independent set of size 3, so its 5 non-edges all stay
        let model = build(&SimpleGraph::cycle(5), 0);
        assert_eq!(model.num_constraints(), 5);
    }

    #[test]
    fn test_star_leaves_become_one_is_row() {
        // star K1,3: the three leaves form one class covering every non-edge
        let graph = SimpleGraph::new(4, vec![(0, 1), (0, 2), (0, 3)]);
        let model = build(&graph, 0);
        assert_eq!(model.num_constraints(), 1);
    }

    #[test]
    fn test_collected_sets_are_independent() {
        let graph = SimpleGraph::new(
            7,
            vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 0)],
        );
        let params = SearchParams::default();
        let mut rng = StdRng::seed_from_u64(1);
        let sets = collect_independent_sets(&graph, &params, &mut rng);
        assert!(!sets.is_empty());
        for set in &sets {
            assert!(set.len() >= 3);
            for (i, &u) in set.iter().enumerate() {
                for &v in &set[i + 1..] {
                    assert!(!graph.has_edge(u, v));
                }
            }
        }
    }

    #[test]
    fn test_builder_is_seed_deterministic() {
        let graph = SimpleGraph::cycle(9);
        let a = build(&graph, 4);
        let b = build(&graph, 4);
        assert_eq!(a.constraint_names(), b.constraint_names());
    }

    #[test]
    fn test_relaxation_bounds_clique_number() {
        // two disjoint triangles: the LP optimum must be >= 3 (a triangle is
        // feasible) and certifies at most 3 here because the cross pairs keep
        // one triangle's worth of weight
        let graph = SimpleGraph::new(6, vec![(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)]);
        let model = build(&graph, 0);
        let solution = model.solve().unwrap();
        assert!(solution.objective >= 3.0 - 1e-6);
    }
}
