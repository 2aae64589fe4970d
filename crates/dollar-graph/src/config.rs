use serde::{Deserialize, Serialize};

/// Configuration options that control the behaviour of [`Graph`](crate::Graph).
///
/// The configuration is fixed when the graph is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Whether edges have a direction. Undirected graphs treat `(a, b)` and
    /// `(b, a)` as the same edge.
    #[serde(default)]
    pub directed: bool,
}

impl GraphConfig {
    /// Configuration for an undirected graph.
    pub const fn undirected() -> Self {
        Self { directed: false }
    }

    /// Configuration for a directed graph.
    pub const fn directed() -> Self {
        Self { directed: true }
    }
}
