//! Branch-and-cut driver.
//!
//! Same node skeleton as branch-and-bound, with three extensions: a
//! slack-based purge that keeps the LP small, a cutting-plane loop fed by the
//! weighted independent-set separator, and a lazy repair step that adds pair
//! cuts whenever an integer LP solution turns out not to be a clique.
//!
//! Separator ("Strong") and repair ("Weak") rows are valid for the whole
//! clique polytope, so they are deliberately not rolled back when the
//! recursion unwinds; the purge is their cleanup path. Branching equalities
//! are always rolled back.

use crate::config::SearchParams;
use crate::search::separation::find_maximal_weighted_set;
use crate::search::{
    choose_branch, integral_vertices, is_all_integer, is_clique, isclose, Incumbent, SearchOutcome,
    Timeout,
};
use crate::solvers::lp::{ConstraintKind, LpModel, RowSense};
use crate::topology::Graph;
use bitvec::bitvec;
use bitvec::vec::BitVec;
use std::time::Instant;

/// Exact maximum-clique search with cutting planes.
pub struct BranchAndCut<'a, G: Graph> {
    graph: &'a G,
    model: LpModel,
    params: SearchParams,
    incumbent: Incumbent,
    call_counter: u64,
    sep_counter: u64,
    start_time: Option<Instant>,
    /// Vertices with a branching equality installed on the current path.
    constrained_vars: BitVec,
}

impl<'a, G: Graph> BranchAndCut<'a, G> {
    /// Set up a search over `model`, seeded with the heuristic incumbent.
    pub fn new(graph: &'a G, model: LpModel, incumbent: Incumbent, params: &SearchParams) -> Self {
        Self {
            graph,
            model,
            params: params.clone(),
            incumbent,
            call_counter: 0,
            sep_counter: 0,
            start_time: None,
            constrained_vars: bitvec![0; graph.num_vertices()],
        }
    }

    /// Run the search to completion or timeout.
    pub fn run(mut self) -> SearchOutcome {
        let started = Instant::now();
        let timed_out = self.node(0).is_err();
        if timed_out {
            tracing::warn!(limit = self.params.time_limit, "stopped by timeout");
        }
        let clique = integral_vertices(&self.incumbent.solution, self.params.abs_tol);
        SearchOutcome {
            clique,
            size: self.incumbent.value,
            nodes: self.call_counter,
            timed_out,
            duration: started.elapsed(),
        }
    }

    fn node(&mut self, depth: u32) -> Result<(), Timeout> {
        self.call_counter += 1;
        if self.call_counter == 1 {
            self.start_time = Some(Instant::now());
        }
        let elapsed = self.start_time.expect("start time is set").elapsed();
        if elapsed.as_secs_f64() > self.params.time_limit {
            return Err(Timeout);
        }
        if depth > self.params.max_recursion_depth {
            return Ok(());
        }
        let tol = self.params.abs_tol;

        let solution = match self.model.solve() {
            Ok(solution) => solution,
            Err(e) => {
                tracing::warn!(error = %e, "LP solve failed, pruning subtree");
                return Ok(());
            }
        };
        let mut objective = solution.objective;
        let mut current = solution.values;

        if ((objective + tol).floor() as i64) <= self.incumbent.value {
            return Ok(());
        }

        if is_all_integer(&current, tol) {
            let vertices = integral_vertices(&current, tol);
            if !is_clique(self.graph, &vertices) {
                tracing::debug!("integral LP solution is not a clique, discarding");
                return Ok(());
            }
            let size = objective.round() as i64;
            tracing::debug!(size, "found better clique");
            self.incumbent.value = size;
            self.incumbent.solution = current;
            return Ok(());
        }

        if self.call_counter % self.params.purge_period == 0 {
            self.purge_slack_rows(&current);
        }

        // separation phase
        let mut stagnation = 0usize;
        let mut history: Vec<f64> = Vec::new();
        for _ in 0..self.params.max_sep_iter {
            let (set, weight) = find_maximal_weighted_set(self.graph, &current);
            if weight <= 1.0 + tol {
                break;
            }
            self.model.add_constraint(
                format!("Strong_{}", self.sep_counter),
                ConstraintKind::Strong,
                set.iter().map(|&v| (v, 1.0)).collect(),
                RowSense::Le,
                1.0,
            );
            self.sep_counter += 1;

            let resolved = match self.model.solve() {
                Ok(solution) => solution,
                Err(e) => {
                    tracing::warn!(error = %e, "LP solve failed during separation");
                    return Ok(());
                }
            };
            objective = resolved.objective;
            if ((objective + tol).floor() as i64) <= self.incumbent.value {
                return Ok(());
            }

            if let Some(&previous) = history.last() {
                if isclose(previous, objective, 1e-2) {
                    break;
                }
                // signed difference on purpose: a re-optimization that jumps
                // upward does not reset the stagnation count
                if previous - objective < self.params.sep_tol {
                    stagnation += 1;
                } else {
                    stagnation = 0;
                }
                if stagnation > self.params.max_stagnation {
                    break;
                }
            }
            history.push(objective);
            current = resolved.values;
        }

        // branching, skipping vertices already fixed on this path
        match choose_branch(&current, tol, Some(&self.constrained_vars)) {
            None => {
                let vertices = integral_vertices(&current, tol);
                if is_clique(self.graph, &vertices) {
                    let size = objective.round() as i64;
                    tracing::debug!(size, "found better clique");
                    self.incumbent.value = size;
                    self.incumbent.solution = current;
                    return Ok(());
                }
                // the LP settled on a vertex set missing some edges; forbid
                // each missing pair and resolve at this node
                let missing = self.graph.complement_edges_within(&vertices);
                for (index, (u, v)) in missing.into_iter().enumerate() {
                    self.model.add_constraint(
                        format!("Weak{}_{}", self.call_counter, index),
                        ConstraintKind::Weak,
                        vec![(u, 1.0), (v, 1.0)],
                        RowSense::Le,
                        1.0,
                    );
                }
                self.node(depth + 1)?;
            }
            Some(variable) => {
                let rounded = current[variable].round();
                for branch_value in [rounded, 1.0 - rounded] {
                    let name = format!(
                        "Branch{}_{}_x{}",
                        self.call_counter,
                        branch_value as i64,
                        variable + 1
                    );
                    self.model.add_constraint(
                        name.clone(),
                        ConstraintKind::Branch,
                        vec![(variable, 1.0)],
                        RowSense::Eq,
                        branch_value,
                    );
                    self.constrained_vars.set(variable, true);
                    self.node(depth + 1)?;
                    self.constrained_vars.set(variable, false);
                    self.model.delete_constraint(&name);
                }
            }
        }
        Ok(())
    }

    /// Delete every non-branching row whose slack exceeds the threshold.
    /// Removed rows were inactive at the current point, so the bound stays
    /// valid.
    fn purge_slack_rows(&mut self, values: &[f64]) {
        let slacks = self.model.linear_slacks(values);
        let stale: Vec<String> = self
            .model
            .constraints()
            .zip(slacks)
            .filter(|&((_, kind), slack)| {
                slack > self.params.slack_threshold && kind != ConstraintKind::Branch
            })
            .map(|((name, _), _)| name.to_string())
            .collect();
        for name in &stale {
            self.model.delete_constraint(name);
        }
        if !stale.is_empty() {
            tracing::debug!(purged = stale.len(), "removed inactive rows");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::{Clique, GreedyClique};
    use crate::solvers::lp::build_clique_relaxation;
    use crate::topology::SimpleGraph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn solve(graph: &SimpleGraph) -> SearchOutcome {
        let params = SearchParams::default();
        let mut rng = StdRng::seed_from_u64(params.seed);
        let model = build_clique_relaxation(graph, &params, &mut rng);
        let clique = GreedyClique::new(graph).find_clique(&params, &mut rng);
        assert!(clique.verify(graph));
        BranchAndCut::new(graph, model, Incumbent::from_clique(&clique), &params).run()
    }

    #[test]
    fn test_complete_graph() {
        let outcome = solve(&SimpleGraph::complete(5));
        assert_eq!(outcome.size, 5);
        assert!(!outcome.timed_out);
    }

    #[test]
    fn test_cycle() {
        let outcome = solve(&SimpleGraph::cycle(5));
        assert_eq!(outcome.size, 2);
        assert!(!outcome.timed_out);
    }

    #[test]
    fn test_two_triangles() {
        let graph = SimpleGraph::new(6, vec![(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)]);
        let outcome = solve(&graph);
        assert_eq!(outcome.size, 3);
        let clique = Clique::from_vertices(6, outcome.clique);
        assert!(clique.verify(&graph));
    }

    #[test]
    fn test_near_clique() {
        // K4 minus one edge
        let graph = SimpleGraph::new(4, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3)]);
        let outcome = solve(&graph);
        assert_eq!(outcome.size, 3);
        assert!(!outcome.timed_out);
    }

    #[test]
    fn test_matches_branch_and_bound() {
        let graph = SimpleGraph::new(
            8,
            vec![
                (0, 1), (0, 2), (1, 2), (2, 3), (3, 4), (4, 5), (3, 5), (4, 6), (5, 6), (3, 6),
                (6, 7),
            ],
        );
        let bnc = solve(&graph);
        assert_eq!(bnc.size, 4);
        let clique = Clique::from_vertices(8, bnc.clique);
        assert!(clique.verify(&graph));
    }
}
