//! Shortest-hop path search over the exchange graph

use crate::graph::ExchangeGraph;

/// Shortest-path tree rooted at a source currency.
///
/// Positions match the graph's currency index space. `predecessor` encodes
/// the tree: following it from any reachable index leads back to the source.
/// Built once per conversion request and discarded afterwards.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: usize,
    distance: Vec<Option<u32>>,
    predecessor: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Index of the source currency
    pub fn source(&self) -> usize {
        self.source
    }

    /// Predecessor of `index` on its shortest path, if reached
    pub fn predecessor(&self, index: usize) -> Option<usize> {
        self.predecessor.get(index).copied().flatten()
    }

    /// Hop count from the source to `index`, if reached
    pub fn distance(&self, index: usize) -> Option<u32> {
        self.distance.get(index).copied().flatten()
    }
}

/// Single-source shortest-hop search.
///
/// Dijkstra over the currency indices with every quote counting as one hop.
/// Kept in the Dijkstra shape (rather than a plain BFS) so edge weights can
/// be introduced without changing the settlement order: the unsettled index
/// with the smallest finite distance is settled next, lowest index first on
/// ties. O(n²) in the number of currencies, which stays small here.
pub struct PathFinder<'a> {
    graph: &'a ExchangeGraph,
}

impl<'a> PathFinder<'a> {
    /// Create a path finder borrowing the graph read-only
    pub fn new(graph: &'a ExchangeGraph) -> Self {
        Self { graph }
    }

    /// Compute the shortest-hop tree rooted at the currency at `source`.
    ///
    /// Every call starts from fresh state; nothing is shared between runs.
    pub fn shortest_paths(&self, source: usize) -> ShortestPaths {
        let n = self.graph.num_currencies();
        let currencies = self.graph.currencies();

        let mut distance: Vec<Option<u32>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut predecessor: Vec<Option<usize>> = vec![None; n];
        if source < n {
            distance[source] = Some(0);
        }

        for _ in 1..n {
            // No unsettled index is reachable: the frontier is exhausted.
            let Some((u, hops)) = next_unsettled(&distance, &settled) else {
                break;
            };
            settled[u] = true;

            for v in 0..n {
                if settled[v] {
                    continue;
                }
                if !self.graph.has_direct_rate(&currencies[u], &currencies[v]) {
                    continue;
                }
                let candidate = hops + 1;
                if distance[v].map_or(true, |current| candidate < current) {
                    distance[v] = Some(candidate);
                    predecessor[v] = Some(u);
                }
            }
        }

        ShortestPaths {
            source,
            distance,
            predecessor,
        }
    }
}

/// Unsettled index with the smallest finite distance; the first such index
/// wins ties.
fn next_unsettled(distance: &[Option<u32>], settled: &[bool]) -> Option<(usize, u32)> {
    let mut best: Option<(usize, u32)> = None;
    for (index, hops) in distance.iter().enumerate() {
        if settled[index] {
            continue;
        }
        let Some(hops) = *hops else {
            continue;
        };
        match best {
            Some((_, smallest)) if hops >= smallest => {}
            _ => best = Some((index, hops)),
        }
    }
    best
}
