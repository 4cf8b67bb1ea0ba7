//! Property-based tests using proptest.
//!
//! These verify the structural invariants behind the relaxation: colorings
//! are proper, pooled independent sets really are independent, the heuristic
//! always returns a clique, and on small graphs the exact search agrees with
//! brute force.

use cliquer::prelude::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

/// Strategy for generating random graphs with between 2 and `max_vertices`
/// vertices. Self-loops are mapped to edge (0, 1), which always exists when
/// n >= 2.
fn graph_strategy(max_vertices: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2..=max_vertices).prop_flat_map(|n| {
        let edge_strategy = (0..n, 0..n).prop_map(|(u, v)| {
            if u < v {
                (u, v)
            } else if v < u {
                (v, u)
            } else {
                (0, 1)
            }
        });

        prop::collection::vec(edge_strategy, 0..n * 2).prop_map(move |edges| {
            let unique: HashSet<_> = edges.into_iter().collect();
            (n, unique.into_iter().collect())
        })
    })
}

/// Exhaustive reference: maximum clique size by subset enumeration.
fn brute_force_clique_number(graph: &SimpleGraph) -> i64 {
    let n = graph.num_vertices();
    let mut best = 0;
    for mask in 0u32..(1 << n) {
        let vertices: Vec<usize> = (0..n).filter(|&v| mask & (1 << v) != 0).collect();
        let k = vertices.len();
        if k as i64 <= best {
            continue;
        }
        if graph.induced_edge_count(&vertices) == k * (k - 1) / 2 {
            best = k as i64;
        }
    }
    best
}

proptest! {
    /// Every strategy produces a proper coloring on every graph.
    #[test]
    fn colorings_are_proper((n, edges) in graph_strategy(10)) {
        let graph = SimpleGraph::new(n, edges);
        let mut rng = StdRng::seed_from_u64(0);
        for strategy in cliquer::coloring::ALL_STRATEGIES {
            let colors = strategy.apply(&graph, &mut rng);
            for (u, v) in graph.edges() {
                prop_assert_ne!(colors[u], colors[v]);
            }
        }
    }

    /// Every pooled color class is an independent set of size >= 3.
    #[test]
    fn pooled_sets_are_independent((n, edges) in graph_strategy(10)) {
        let graph = SimpleGraph::new(n, edges);
        let params = SearchParams::default();
        let mut rng = StdRng::seed_from_u64(params.seed);
        for set in cliquer::solvers::lp::collect_independent_sets(&graph, &params, &mut rng) {
            prop_assert!(set.len() >= 3);
            for (i, &u) in set.iter().enumerate() {
                for &v in &set[i + 1..] {
                    prop_assert!(!graph.has_edge(u, v));
                }
            }
        }
    }

    /// The heuristic always returns a verified clique.
    #[test]
    fn heuristic_returns_a_clique((n, edges) in graph_strategy(10)) {
        let graph = SimpleGraph::new(n, edges);
        let params = SearchParams::default();
        let mut rng = StdRng::seed_from_u64(params.seed);
        let clique = GreedyClique::new(&graph).find_clique(&params, &mut rng);
        prop_assert!(clique.verify(&graph));
        prop_assert!(clique.size() >= 1);
    }

    /// The separator returns an independent set whose reported weight is the
    /// sum of its members' weights.
    #[test]
    fn separator_returns_weighted_independent_set((n, edges) in graph_strategy(10)) {
        let graph = SimpleGraph::new(n, edges);
        let weights: Vec<f64> = (0..n).map(|v| (v % 5) as f64 / 5.0).collect();
        let (set, weight) = cliquer::search::separation::find_maximal_weighted_set(&graph, &weights);
        for (i, &u) in set.iter().enumerate() {
            for &v in &set[i + 1..] {
                prop_assert!(!graph.has_edge(u, v));
            }
        }
        let expected: f64 = set.iter().map(|&v| weights[v]).sum();
        prop_assert!((weight - expected).abs() < 1e-9);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// On small graphs both exact drivers agree with brute force.
    #[test]
    fn exact_search_matches_brute_force((n, edges) in graph_strategy(6)) {
        let graph = SimpleGraph::new(n, edges);
        let expected = brute_force_clique_number(&graph);
        let params = SearchParams::default();

        let bnb = solve_instance(&graph, Algorithm::BranchAndBound, &params);
        prop_assert!(!bnb.outcome.timed_out);
        prop_assert_eq!(bnb.outcome.size, expected);

        let bnc = solve_instance(&graph, Algorithm::BranchAndCut, &params);
        prop_assert!(!bnc.outcome.timed_out);
        prop_assert_eq!(bnc.outcome.size, expected);
    }
}
