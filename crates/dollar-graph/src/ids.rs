use std::collections::BTreeMap;

use dollar_core::{EdgeId, NodeId};

/// Returns the smallest raw id missing from an ascending, duplicate-free sequence.
pub(crate) fn smallest_unused(sorted: impl IntoIterator<Item = u64>) -> u64 {
    let mut candidate = 0;
    for raw in sorted {
        if raw != candidate {
            break;
        }
        candidate += 1;
    }
    candidate
}

/// Smallest [`NodeId`] not used as a key of `nodes`.
pub(crate) fn next_node_id<T>(nodes: &BTreeMap<NodeId, T>) -> NodeId {
    NodeId::from_raw(smallest_unused(nodes.keys().map(NodeId::as_raw)))
}

/// Smallest [`EdgeId`] not used as a key of `edges`.
pub(crate) fn next_edge_id<E>(edges: &BTreeMap<EdgeId, E>) -> EdgeId {
    EdgeId::from_raw(smallest_unused(edges.keys().map(EdgeId::as_raw)))
}
