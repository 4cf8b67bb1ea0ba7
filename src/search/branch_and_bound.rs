//! Branch-and-bound driver.
//!
//! Depth-first recursion over the LP relaxation. Each node solves the LP,
//! prunes when the rounded bound cannot beat the incumbent, harvests integral
//! solutions after verifying they are cliques, and otherwise branches on the
//! fractional variable closest to 1 with the equality `x_v = b` tried in the
//! order [round(x_v), 1 - round(x_v)].

use crate::config::SearchParams;
use crate::search::{
    choose_branch, integral_vertices, is_all_integer, is_clique, Incumbent, SearchOutcome, Timeout,
};
use crate::solvers::lp::{ConstraintKind, LpModel, RowSense};
use crate::topology::Graph;
use std::time::Instant;

/// Exact maximum-clique search by LP-bounded depth-first branching.
pub struct BranchAndBound<'a, G: Graph> {
    graph: &'a G,
    model: LpModel,
    params: SearchParams,
    incumbent: Incumbent,
    call_counter: u64,
    start_time: Option<Instant>,
}

impl<'a, G: Graph> BranchAndBound<'a, G> {
    /// Set up a search over `model`, seeded with the heuristic incumbent.
    pub fn new(graph: &'a G, model: LpModel, incumbent: Incumbent, params: &SearchParams) -> Self {
        Self {
            graph,
            model,
            params: params.clone(),
            incumbent,
            call_counter: 0,
            start_time: None,
        }
    }

    /// Run the search to completion or timeout.
    pub fn run(mut self) -> SearchOutcome {
        let started = Instant::now();
        let timed_out = self.node().is_err();
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

    fn node(&mut self) -> Result<(), Timeout> {
        self.call_counter += 1;
        if self.call_counter == 1 {
            self.start_time = Some(Instant::now());
        }
        let tol = self.params.abs_tol;

        let solution = match self.model.solve() {
            Ok(solution) => solution,
            Err(e) => {
                tracing::warn!(error = %e, "LP solve failed, pruning subtree");
                return Ok(());
            }
        };

        if ((solution.objective + tol).floor() as i64) <= self.incumbent.value {
            return Ok(());
        }

        if is_all_integer(&solution.values, tol) {
            let vertices = integral_vertices(&solution.values, tol);
            if !is_clique(self.graph, &vertices) {
                tracing::warn!("integral LP solution is not a clique, discarding");
                return Ok(());
            }
            let size = solution.objective.round() as i64;
            tracing::debug!(size, "found better clique");
            self.incumbent.value = size;
            self.incumbent.solution = solution.values;
            return Ok(());
        }

        let elapsed = self.start_time.expect("start time is set").elapsed();
        if elapsed.as_secs_f64() > self.params.time_limit {
            return Err(Timeout);
        }

        let Some(variable) = choose_branch(&solution.values, tol, None) else {
            return Ok(());
        };
        let rounded = solution.values[variable].round();
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
            self.node()?;
            self.model.delete_constraint(&name);
        }
        Ok(())
    }
}
