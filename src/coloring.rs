//! Greedy graph-coloring strategies.
//!
//! Color classes are independent sets, so every coloring of the instance
//! yields valid clique-polytope inequalities. The relaxation builder runs
//! all strategies (the random one repeatedly) and pools the classes.

use crate::topology::Graph;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

/// A greedy coloring strategy.
///
/// All strategies are deterministic except [`ColoringStrategy::RandomSequential`],
/// which draws its vertex order from the supplied rng.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColoringStrategy {
    /// Visit vertices by descending degree.
    LargestFirst,
    /// Visit vertices in a uniformly random order.
    RandomSequential,
    /// Repeatedly peel a greedy maximal independent set; each set is one class.
    IndependentSet,
    /// Visit vertices in BFS order, component by component.
    ConnectedSequentialBfs,
    /// DSATUR: color the vertex with the most distinctly-colored neighbors first.
    SaturationLargestFirst,
}

/// All strategies, in the order the relaxation builder applies them.
pub const ALL_STRATEGIES: [ColoringStrategy; 5] = [
    ColoringStrategy::LargestFirst,
    ColoringStrategy::RandomSequential,
    ColoringStrategy::IndependentSet,
    ColoringStrategy::ConnectedSequentialBfs,
    ColoringStrategy::SaturationLargestFirst,
];

impl ColoringStrategy {
    /// Color `graph`, returning one color id per vertex.
    ///
    /// Adjacent vertices always receive different colors; color ids are
    /// consecutive small integers starting at 0.
    pub fn apply<G: Graph, R: Rng>(&self, graph: &G, rng: &mut R) -> Vec<usize> {
        match self {
            ColoringStrategy::LargestFirst => {
                let mut order: Vec<usize> = (0..graph.num_vertices()).collect();
                order.sort_by_key(|&v| std::cmp::Reverse(graph.degree(v)));
                greedy_from_order(graph, &order)
            }
            ColoringStrategy::RandomSequential => {
                let mut order: Vec<usize> = (0..graph.num_vertices()).collect();
                order.shuffle(rng);
                greedy_from_order(graph, &order)
            }
            ColoringStrategy::IndependentSet => independent_set_coloring(graph),
            ColoringStrategy::ConnectedSequentialBfs => {
                greedy_from_order(graph, &bfs_order(graph))
            }
            ColoringStrategy::SaturationLargestFirst => dsatur_coloring(graph),
        }
    }
}

/// Group a coloring into its color classes, ordered by color id.
pub fn color_classes(colors: &[usize]) -> Vec<Vec<usize>> {
    let num_colors = colors.iter().copied().max().map_or(0, |c| c + 1);
    let mut classes = vec![Vec::new(); num_colors];
    for (v, &c) in colors.iter().enumerate() {
        classes[c].push(v);
    }
    classes
}

/// Assign each vertex, in `order`, the smallest color unused by its neighbors.
fn greedy_from_order<G: Graph>(graph: &G, order: &[usize]) -> Vec<usize> {
    let mut colors = vec![usize::MAX; graph.num_vertices()];
    for &v in order {
        colors[v] = smallest_free_color(graph, &colors, v);
    }
    colors
}

fn smallest_free_color<G: Graph>(graph: &G, colors: &[usize], v: usize) -> usize {
    let used: BTreeSet<usize> = graph
        .neighbors(v)
        .into_iter()
        .filter(|&u| colors[u] != usize::MAX)
        .map(|u| colors[u])
        .collect();
    let mut color = 0;
    while used.contains(&color) {
        color += 1;
    }
    color
}

/// Peel greedy maximal independent sets (lowest residual degree first) from
/// the uncolored subgraph; each peeled set becomes one color class.
fn independent_set_coloring<G: Graph>(graph: &G) -> Vec<usize> {
    let n = graph.num_vertices();
    let mut colors = vec![usize::MAX; n];
    let mut uncolored: BTreeSet<usize> = (0..n).collect();
    let mut next_color = 0;

    while !uncolored.is_empty() {
        let mut remaining = uncolored.clone();
        let mut class = Vec::new();
        while !remaining.is_empty() {
            let v = remaining
                .iter()
                .copied()
                .min_by_key(|&v| {
                    let residual = graph
                        .neighbors(v)
                        .into_iter()
                        .filter(|u| remaining.contains(u))
                        .count();
                    (residual, v)
                })
                .unwrap();
            class.push(v);
            remaining.remove(&v);
            for u in graph.neighbors(v) {
                remaining.remove(&u);
            }
        }
        for &v in &class {
            colors[v] = next_color;
            uncolored.remove(&v);
        }
        next_color += 1;
    }
    colors
}

/// BFS order over each connected component, lowest-numbered start first.
fn bfs_order<G: Graph>(graph: &G) -> Vec<usize> {
    let n = graph.num_vertices();
    let mut order = Vec::with_capacity(n);
    let mut seen = vec![false; n];
    for start in 0..n {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut queue = std::collections::VecDeque::from([start]);
        while let Some(v) = queue.pop_front() {
            order.push(v);
            let mut neighbors = graph.neighbors(v);
            neighbors.sort_unstable();
            for u in neighbors {
                if !seen[u] {
                    seen[u] = true;
                    queue.push_back(u);
                }
            }
        }
    }
    order
}

/// DSATUR: repeatedly color the uncolored vertex with maximum saturation
/// (distinct neighbor colors), ties broken by degree, then by vertex id.
fn dsatur_coloring<G: Graph>(graph: &G) -> Vec<usize> {
    let n = graph.num_vertices();
    let mut colors = vec![usize::MAX; n];
    for _ in 0..n {
        let mut best: Option<((usize, usize), usize)> = None;
        for v in 0..n {
            if colors[v] != usize::MAX {
                continue;
            }
            let saturation = graph
                .neighbors(v)
                .into_iter()
                .filter(|&u| colors[u] != usize::MAX)
                .map(|u| colors[u])
                .collect::<BTreeSet<_>>()
                .len();
            let key = (saturation, graph.degree(v));
            if best.map_or(true, |(bk, _)| key > bk) {
                best = Some((key, v));
            }
        }
        let (_, v) = best.expect("an uncolored vertex remains");
        colors[v] = smallest_free_color(graph, &colors, v);
    }
    colors
}
