//! LP model handle.
//!
//! `LpModel` owns one continuous variable `0 <= x_v <= 1` per vertex, the
//! objective `max Σ x_v`, and an ordered list of named linear rows. The
//! backing `good_lp` problem is rebuilt on every `solve` call, which is what
//! gives the search free addition and deletion of rows between solves; the
//! backend (microlp by default, HiGHS behind the `highs` feature) is quiet on
//! stdout/stderr.

use crate::error::{CliqueError, Result};
use good_lp::{default_solver, variable, Expression, ProblemVariables, Solution, SolverModel, Variable};

/// Which role a row plays in the search.
///
/// The slack purge removes inactive rows of every kind except `Branch`:
/// branching equalities encode the current DFS path and must survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Rows installed by the relaxation builder (independent-set and pair cuts).
    Initial,
    /// Independent-set cuts found by the separator at runtime.
    Strong,
    /// Lazy pair cuts repairing a spurious integer solution.
    Weak,
    /// Branching equality `x_v = b` on the current DFS path.
    Branch,
}

/// Row sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSense {
    Le,
    Eq,
}

#[derive(Debug, Clone)]
struct Row {
    name: String,
    kind: ConstraintKind,
    terms: Vec<(usize, f64)>,
    sense: RowSense,
    rhs: f64,
}

/// Outcome of one LP solve.
#[derive(Debug, Clone, PartialEq)]
pub struct LpSolution {
    /// Optimal objective value, an upper bound on the clique number of the
    /// current subproblem.
    pub objective: f64,
    /// Primal variable values, one per vertex.
    pub values: Vec<f64>,
}

/// An LP over the vertex variables with named, deletable rows.
#[derive(Debug, Clone, Default)]
pub struct LpModel {
    num_vars: usize,
    rows: Vec<Row>,
}

impl LpModel {
    /// Create a model with `num_vars` variables and no rows.
    pub fn new(num_vars: usize) -> Self {
        Self {
            num_vars,
            rows: Vec::new(),
        }
    }

    /// Number of variables.
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Number of active rows.
    pub fn num_constraints(&self) -> usize {
        self.rows.len()
    }

    /// Append a named row. Names are expected to be unique; deletion removes
    /// every row carrying the name.
    pub fn add_constraint(
        &mut self,
        name: String,
        kind: ConstraintKind,
        terms: Vec<(usize, f64)>,
        sense: RowSense,
        rhs: f64,
    ) {
        debug_assert!(terms.iter().all(|&(v, _)| v < self.num_vars));
        self.rows.push(Row {
            name,
            kind,
            terms,
            sense,
            rhs,
        });
    }

    /// Remove the row with the given name. Returns whether a row was removed.
    pub fn delete_constraint(&mut self, name: &str) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.name != name);
        self.rows.len() < before
    }

    /// Names of the active rows, in insertion order.
    pub fn constraint_names(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.name.as_str()).collect()
    }

    /// Active rows as (name, kind) pairs, aligned with [`LpModel::linear_slacks`].
    pub fn constraints(&self) -> impl Iterator<Item = (&str, ConstraintKind)> {
        self.rows.iter().map(|row| (row.name.as_str(), row.kind))
    }

    /// Per-row slack `rhs - a·x` at the given point, in insertion order.
    pub fn linear_slacks(&self, values: &[f64]) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| {
                let activity: f64 = row.terms.iter().map(|&(v, c)| c * values[v]).sum();
                row.rhs - activity
            })
            .collect()
    }

    /// Solve `max Σ x_v` subject to the box bounds and the active rows.
    ///
    /// A backend failure (including infeasibility of the current branch) is
    /// returned as an error; the search treats it as "no bound available".
    pub fn solve(&self) -> Result<LpSolution> {
        if self.num_vars == 0 {
            return Ok(LpSolution {
                objective: 0.0,
                values: vec![],
            });
        }

        let mut vars_builder = ProblemVariables::new();
        let vars: Vec<Variable> = (0..self.num_vars)
            .map(|_| vars_builder.add(variable().min(0.0).max(1.0)))
            .collect();

        let objective: Expression = vars.iter().map(|&v| 1.0 * v).sum();
        let mut model = vars_builder.maximise(objective).using(default_solver);

        for row in &self.rows {
            let lhs: Expression = row.terms.iter().map(|&(idx, coef)| coef * vars[idx]).sum();
            let constraint = match row.sense {
                RowSense::Le => lhs.leq(row.rhs),
                RowSense::Eq => lhs.eq(row.rhs),
            };
            model = model.with(constraint);
        }

        let solution = model
            .solve()
            .map_err(|e| CliqueError::LpSolver(e.to_string()))?;

        let values: Vec<f64> = vars.iter().map(|&v| solution.value(v)).collect();
        let objective = values.iter().sum();
        Ok(LpSolution { objective, values })
    }
}
