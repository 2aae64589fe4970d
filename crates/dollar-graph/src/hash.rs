use sha2::{Digest, Sha256};

use crate::graph::Graph;

/// Computes an order independent fingerprint of the graph structure.
///
/// The digest covers directedness, the live node ids, and every edge as an
/// endpoint pair plus weight. Undirected endpoints are normalised so that
/// `(a, b)` and `(b, a)` hash alike. Node payloads and edge ids are not part
/// of the digest.
pub fn structural_hash<T>(graph: &Graph<T>) -> String {
    let mut hasher = Sha256::new();
    if graph.is_directed() {
        hasher.update(b"directed");
    } else {
        hasher.update(b"undirected");
    }

    let nodes = graph.node_ids();
    hasher.update((nodes.len() as u64).to_le_bytes());
    for node in nodes {
        hasher.update(node.as_raw().to_le_bytes());
    }

    let mut edges: Vec<(u64, u64, i64)> = graph
        .all_edges()
        .into_iter()
        .map(|edge| {
            let (start, end) = (edge.start.as_raw(), edge.end.as_raw());
            if graph.is_directed() || start <= end {
                (start, end, edge.weight)
            } else {
                (end, start, edge.weight)
            }
        })
        .collect();
    edges.sort_unstable();
    hasher.update((edges.len() as u64).to_le_bytes());
    for (start, end, weight) in edges {
        hasher.update(start.to_le_bytes());
        hasher.update(end.to_le_bytes());
        hasher.update(weight.to_le_bytes());
    }

    format!("{:x}", hasher.finalize())
}
