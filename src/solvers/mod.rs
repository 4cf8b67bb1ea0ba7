//! LP solving infrastructure.

pub mod lp;

pub use lp::{build_clique_relaxation, ConstraintKind, LpModel, LpSolution, RowSense};
