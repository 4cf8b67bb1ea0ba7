//! # Cliquer
//!
//! An exact maximum-clique solver. The clique polytope is relaxed to a
//! linear program over independent-set and non-edge inequalities; a
//! randomized greedy heuristic seeds the incumbent, and branch-and-bound or
//! branch-and-cut closes the integrality gap, pruning subtrees whose LP
//! bound cannot beat the incumbent.
//!
//! ## Pipeline
//!
//! 1. Read a DIMACS instance ([`io::read_dimacs`]) into a
//!    [`topology::SimpleGraph`].
//! 2. Build the initial relaxation ([`solvers::lp::build_clique_relaxation`]):
//!    independent sets pooled from five greedy coloring strategies, plus pair
//!    constraints for the uncovered non-edges.
//! 3. Seed the incumbent with the randomized smallest-degree-last heuristic
//!    ([`heuristic::GreedyClique`]).
//! 4. Run [`search::BranchAndBound`] or [`search::BranchAndCut`]; the latter
//!    adds separator cuts ([`search::separation`]), lazy pair repairs, and a
//!    slack-based constraint purge.
//!
//! ## Example
//!
//! ```
//! use cliquer::config::SearchParams;
//! use cliquer::search::{solve_instance, Algorithm};
//! use cliquer::topology::SimpleGraph;
//!
//! // two disjoint triangles: the maximum clique has size 3
//! let graph = SimpleGraph::new(6, vec![(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)]);
//! let solution = solve_instance(&graph, Algorithm::BranchAndBound, &SearchParams::default());
//! assert_eq!(solution.outcome.size, 3);
//! ```
//!
//! The LP backend is selected by cargo feature: `microlp` (default, pure
//! Rust) or `highs`.

pub mod coloring;
pub mod config;
pub mod error;
pub mod heuristic;
pub mod io;
pub mod report;
pub mod search;
pub mod solvers;
pub mod topology;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::coloring::{color_classes, ColoringStrategy};
    pub use crate::config::SearchParams;
    pub use crate::error::{CliqueError, Result};
    pub use crate::heuristic::{Clique, GreedyClique};
    pub use crate::io::{parse_dimacs, read_dimacs};
    pub use crate::report::ReportRecord;
    pub use crate::search::{
        solve_instance, Algorithm, BranchAndBound, BranchAndCut, Incumbent, SearchOutcome,
    };
    pub use crate::solvers::lp::{build_clique_relaxation, ConstraintKind, LpModel, RowSense};
    pub use crate::topology::{Graph, SimpleGraph};
}

// Re-export commonly used items at crate root
pub use config::SearchParams;
pub use error::{CliqueError, Result};
pub use search::{solve_instance, Algorithm, SearchOutcome};
pub use topology::{Graph, SimpleGraph};
