// src/matching/solver.rs

//! Edmonds-Karp maximum flow (BFS-based Ford-Fulkerson).
//!
//! Complexity is O(V * E^2); fine for tens to low hundreds of programs, not
//! meant for very large networks.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::matching::NodeId;
use crate::matching::network::FlowNetwork;

/// Result of a max-flow computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlowSummary {
    /// Total flow pushed from source to sink.
    pub total_flow: u32,
    /// Number of augmenting paths found.
    pub augmentations: usize,
}

/// Run Edmonds-Karp on `network` until no augmenting path remains.
///
/// The network is left holding residual capacities.
pub fn max_flow(network: &mut FlowNetwork, source: NodeId, sink: NodeId) -> FlowSummary {
    let mut summary = FlowSummary::default();

    if source == sink {
        return summary;
    }

    while let Some(path) = find_augmenting_path(network, source, sink) {
        let bottleneck = path
            .windows(2)
            .map(|edge| network.residual(edge[0], edge[1]))
            .min()
            .unwrap_or(0);

        if bottleneck == 0 {
            // BFS only follows positive residuals.
            break;
        }

        for edge in path.windows(2) {
            network.push(edge[0], edge[1], bottleneck);
        }

        summary.total_flow += bottleneck;
        summary.augmentations += 1;
        debug!(?path, bottleneck, "augmented along path");
    }

    summary
}

/// BFS from `source` over positive residual edges.
///
/// Returns the node path `source, ..., sink`, or `None` when the sink is
/// unreachable. Stops as soon as the sink is labelled.
pub fn find_augmenting_path(
    network: &FlowNetwork,
    source: NodeId,
    sink: NodeId,
) -> Option<Vec<NodeId>> {
    let mut parent: Vec<Option<NodeId>> = vec![None; network.node_count()];
    let mut visited = vec![false; network.node_count()];
    let mut queue = VecDeque::new();

    visited[source] = true;
    queue.push_back(source);

    'search: while let Some(u) = queue.pop_front() {
        for &v in network.neighbors(u) {
            if visited[v] || network.residual(u, v) == 0 {
                continue;
            }
            visited[v] = true;
            parent[v] = Some(u);
            if v == sink {
                break 'search;
            }
            queue.push_back(v);
        }
    }

    if !visited[sink] {
        trace!("no augmenting path left");
        return None;
    }

    let mut path = vec![sink];
    let mut node = sink;
    while let Some(prev) = parent[node] {
        path.push(prev);
        node = prev;
    }
    path.reverse();
    Some(path)
}
