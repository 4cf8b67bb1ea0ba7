//! Search parameters shared by the heuristic, the relaxation builder, and
//! both exact drivers.

/// Tunables for the maximum-clique search.
///
/// The defaults reproduce the reference configuration; every field can be
/// overridden before the search starts.
///
/// # Example
///
/// ```
/// use cliquer::config::SearchParams;
///
/// let params = SearchParams {
///     time_limit: 60.0,
///     ..SearchParams::default()
/// };
/// assert_eq!(params.abs_tol, 1e-4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    /// Integrality/rounding tolerance used throughout the search.
    pub abs_tol: f64,
    /// Wall-clock limit for a single search, in seconds.
    pub time_limit: f64,
    /// Maximum number of cutting-plane rounds at one node.
    pub max_sep_iter: usize,
    /// Minimum objective improvement for a separation round to count as progress.
    pub sep_tol: f64,
    /// Number of low-progress separation rounds tolerated before branching.
    pub max_stagnation: usize,
    /// Depth cap for the branch-and-cut recursion.
    pub max_recursion_depth: u32,
    /// Inner repetitions per randomization level of the clique heuristic.
    pub heuristic_iterations: usize,
    /// Number of randomization levels of the clique heuristic.
    pub heuristic_randomization: usize,
    /// Repetitions of the random-sequential coloring when collecting
    /// independent sets for the relaxation.
    pub coloring_repetitions: usize,
    /// Node-visit period of the slack-based constraint purge.
    pub purge_period: u64,
    /// Slack above which a non-branching constraint is considered inactive.
    pub slack_threshold: f64,
    /// Seed for all randomized components; fixed so runs are reproducible.
    pub seed: u64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            abs_tol: 1e-4,
            time_limit: 7000.0,
            max_sep_iter: 1000,
            sep_tol: 0.15,
            max_stagnation: 10,
            max_recursion_depth: 100,
            heuristic_iterations: 10,
            heuristic_randomization: 4,
            coloring_repetitions: 40,
            purge_period: 100,
            slack_threshold: 1e-3,
            seed: 42,
        }
    }
}
