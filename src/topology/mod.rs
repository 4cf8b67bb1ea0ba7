//! Graph representations used by the solver.

mod graph;

pub use graph::{Graph, SimpleGraph};
