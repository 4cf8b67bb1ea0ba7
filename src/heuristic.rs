//! Randomized greedy clique heuristic.
//!
//! "Smallest degree last with removal": recompute residual degrees, strip the
//! whole minimum-degree layer at once, recurse on the rest, then on unwind
//! grow the clique from each stripped layer — first a randomly chosen member,
//! then a greedy sweep over the remainder of the layer. The outer driver
//! restarts the procedure over several randomization levels and keeps the
//! largest clique observed.
//!
//! Note: the level-0 restarts draw index 0 every time, so they are
//! deterministic repeats. This mirrors the reference procedure and is
//! intentionally left as is.

use crate::config::SearchParams;
use crate::topology::{Graph, SimpleGraph};
use rand::{Rng, RngExt};
use std::cmp::Reverse;
use std::collections::HashSet;

/// A feasible clique together with its 0/1 indicator vector over all vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Clique {
    /// Clique members, in discovery order.
    pub vertices: Vec<usize>,
    /// Indicator vector: `indicator[v] == 1.0` iff `v` is in the clique.
    pub indicator: Vec<f64>,
}

impl Clique {
    /// Build a clique value from a member list.
    pub fn from_vertices(num_vertices: usize, vertices: Vec<usize>) -> Self {
        let mut indicator = vec![0.0; num_vertices];
        for &v in &vertices {
            indicator[v] = 1.0;
        }
        Self { vertices, indicator }
    }

    /// Number of clique members.
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Check that the stored vertex set really is a clique: no duplicate
    /// members, and every pair adjacent.
    pub fn verify(&self, graph: &SimpleGraph) -> bool {
        let unique: HashSet<usize> = self.vertices.iter().copied().collect();
        if unique.len() != self.vertices.len() {
            tracing::warn!("duplicated vertices in the clique");
            return false;
        }
        for (i, &u) in self.vertices.iter().enumerate() {
            for &v in &self.vertices[i + 1..] {
                if !graph.has_edge(u, v) {
                    tracing::warn!(u, v, "returned subgraph is not a clique");
                    return false;
                }
            }
        }
        true
    }
}

/// Randomized smallest-degree-last clique heuristic.
pub struct GreedyClique<'a> {
    graph: &'a SimpleGraph,
    adjacency: Vec<HashSet<usize>>,
}

impl<'a> GreedyClique<'a> {
    pub fn new(graph: &'a SimpleGraph) -> Self {
        Self {
            graph,
            adjacency: graph.neighbor_sets(),
        }
    }

    /// Run the full restart schedule and return the best clique observed.
    pub fn find_clique<R: Rng>(&self, params: &SearchParams, rng: &mut R) -> Clique {
        let mut best: Vec<usize> = Vec::new();
        for level in 0..params.heuristic_randomization {
            for _ in 0..params.heuristic_iterations {
                let candidate = self.run_once(level, rng);
                if candidate.len() > best.len() {
                    best = candidate;
                }
            }
        }
        Clique::from_vertices(self.graph.num_vertices(), best)
    }

    /// One pass of the recursive pruning procedure at a given randomization
    /// level.
    fn run_once<R: Rng>(&self, level: usize, rng: &mut R) -> Vec<usize> {
        let n = self.graph.num_vertices();
        if n == 0 {
            return Vec::new();
        }
        let mut candidates: Vec<(usize, usize)> =
            (0..n).map(|v| (v, self.adjacency[v].len())).collect();
        candidates.sort_by_key(|&(_, degree)| Reverse(degree));
        let mut clique = Vec::new();
        self.prune_layer(level, true, candidates, &mut clique, rng);
        clique
    }

    fn prune_layer<R: Rng>(
        &self,
        level: usize,
        first: bool,
        mut candidates: Vec<(usize, usize)>,
        clique: &mut Vec<usize>,
        rng: &mut R,
    ) {
        if !first && candidates.len() == 1 {
            clique.push(candidates[0].0);
            return;
        }

        if !first {
            // residual degrees within the surviving candidate set
            let present: HashSet<usize> = candidates.iter().map(|&(v, _)| v).collect();
            for entry in candidates.iter_mut() {
                entry.1 = self.adjacency[entry.0]
                    .iter()
                    .filter(|u| present.contains(u))
                    .count();
            }
            candidates.sort_by_key(|&(_, degree)| Reverse(degree));
        }

        // strip the whole minimum-degree layer
        let min_degree = candidates.last().expect("candidates are never empty").1;
        let mut trailing = 0;
        for (i, &(_, degree)) in candidates.iter().rev().enumerate() {
            if degree == min_degree {
                trailing = i;
            } else {
                break;
            }
        }
        let removed = candidates.split_off(candidates.len() - trailing - 1);
        let remaining = candidates;

        if !remaining.is_empty() {
            self.prune_layer(level, false, remaining, clique, rng);
        }

        // try one randomly chosen layer member first
        let pick = removed[rng.random_range(0..=level) % removed.len()].0;
        if clique.iter().all(|&m| self.adjacency[m].contains(&pick)) {
            clique.push(pick);
        }

        // then sweep the rest of the layer greedily
        for &(v, _) in &removed {
            let connected = clique
                .iter()
                .all(|&m| v == m || self.adjacency[m].contains(&v));
            if connected && !clique.contains(&v) {
                clique.push(v);
            }
        }
    }
}
