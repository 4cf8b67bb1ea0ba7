//! The LP relaxation of the clique polytope: model handle and builder.

mod builder;
mod model;

pub use builder::{build_clique_relaxation, collect_independent_sets};
pub use model::{ConstraintKind, LpModel, LpSolution, RowSense};
