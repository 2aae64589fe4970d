use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use dollar_core::errors::{ErrorInfo, GameError};
use dollar_core::{EdgeId, NodeId};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::GraphConfig;
use crate::ids::{next_edge_id, next_node_id};

/// Connection between two nodes of a [`Graph`].
///
/// Endpoints are stored in the order they were supplied. For undirected
/// graphs that order carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint (the source in a directed graph).
    pub start: NodeId,
    /// Second endpoint (the target in a directed graph).
    pub end: NodeId,
    /// Weight attached to the edge.
    pub weight: i64,
}

impl Edge {
    /// Creates a new edge description.
    pub const fn new(start: NodeId, end: NodeId, weight: i64) -> Self {
        Self { start, end, weight }
    }

    /// Returns whether this edge joins `start` to `end`. When `directed` is
    /// false the reversed order matches too.
    pub fn joins(&self, start: NodeId, end: NodeId, directed: bool) -> bool {
        (self.start == start && self.end == end)
            || (!directed && self.start == end && self.end == start)
    }

    /// Returns whether either endpoint is `node`.
    pub fn touches(&self, node: NodeId) -> bool {
        self.start == node || self.end == node
    }

    /// Returns the endpoint that is not `node`. For a self loop that is `node` itself.
    pub fn other_end(&self, node: NodeId) -> NodeId {
        if self.start == node {
            self.end
        } else {
            self.start
        }
    }
}

/// Graph of labelled nodes joined by optionally weighted edges.
///
/// Nodes carry a payload of type `T`. Node and edge identifiers are assigned
/// from independent namespaces using the smallest unused integer, so ids of
/// removed entries are handed out again.
///
/// Edge lookups are linear scans over a flat edge collection. That is fine
/// for hand-built puzzles with tens of nodes but does not scale to large
/// graphs.
///
/// Cloning yields a deep copy with the same ids, payloads, and directedness.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<T> {
    config: GraphConfig,
    nodes: BTreeMap<NodeId, T>,
    edges: BTreeMap<EdgeId, Edge>,
}

impl<T> Graph<T> {
    /// Creates an empty graph with the provided configuration.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
        }
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphConfig::undirected())
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(GraphConfig::directed())
    }

    /// Returns the configuration used by this graph.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Returns whether edges have a direction.
    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    /// Returns the smallest node id not used by a live node.
    pub fn generate_unique_node_id(&self) -> NodeId {
        next_node_id(&self.nodes)
    }

    /// Returns the smallest edge id not used by a live edge.
    pub fn generate_unique_edge_id(&self) -> EdgeId {
        next_edge_id(&self.edges)
    }

    /// Adds a node and returns its id.
    ///
    /// When `id` is `None` a fresh id is generated. An explicit id is not
    /// checked for collisions: a live node with the same id has its payload
    /// replaced while its edges stay in place. Use [`Graph::try_add_node`] to
    /// reject collisions instead.
    pub fn add_node(&mut self, data: T, id: Option<NodeId>) -> NodeId {
        let id = id.unwrap_or_else(|| self.generate_unique_node_id());
        if self.nodes.insert(id, data).is_some() {
            warn!("node {id} already existed, payload overwritten");
        }
        id
    }

    /// Adds a node under an explicit id, failing if the id is already live.
    pub fn try_add_node(&mut self, data: T, id: NodeId) -> Result<NodeId, GameError> {
        if self.nodes.contains_key(&id) {
            return Err(GameError::DuplicateNode(
                ErrorInfo::new("duplicate-node", "node id is already in use")
                    .with_context("node", id)
                    .with_hint("use generate_unique_node_id for a free id"),
            ));
        }
        self.nodes.insert(id, data);
        Ok(id)
    }

    /// Adds an edge between two nodes and returns its id.
    ///
    /// Fails without touching the graph when an edge already joins the
    /// endpoints (in either order for undirected graphs).
    pub fn add_edge(
        &mut self,
        start: NodeId,
        end: NodeId,
        weight: i64,
    ) -> Result<EdgeId, GameError> {
        if let Some(existing) = self.edge_id(start, end) {
            warn!("tried to add a duplicate edge {start} -> {end}");
            return Err(GameError::DuplicateEdge(
                ErrorInfo::new("duplicate-edge", "an edge already joins these nodes")
                    .with_context("start", start)
                    .with_context("end", end)
                    .with_context("existing", existing),
            ));
        }
        let id = self.generate_unique_edge_id();
        self.edges.insert(id, Edge::new(start, end, weight));
        Ok(id)
    }

    /// Returns the id of the edge joining `start` to `end`, if any.
    pub fn edge_id(&self, start: NodeId, end: NodeId) -> Option<EdgeId> {
        let directed = self.config.directed;
        self.edges
            .iter()
            .find(|(_, edge)| edge.joins(start, end, directed))
            .map(|(id, _)| *id)
    }

    /// Returns whether an edge joins `start` to `end`. Order is ignored for
    /// undirected graphs.
    pub fn is_adjacent(&self, start: NodeId, end: NodeId) -> bool {
        self.edge_id(start, end).is_some()
    }

    /// Returns the neighbours of `node` using the graph's own directedness.
    pub fn all_adjacent_to(&self, node: NodeId) -> Vec<NodeId> {
        self.all_adjacent_to_with(node, self.config.directed)
    }

    /// Returns the neighbours of `node`, overriding directedness for this call.
    ///
    /// Directed mode lists only targets of outgoing edges. Undirected mode
    /// lists the opposite endpoint of every incident edge. A node joined
    /// through several edges appears once per edge.
    pub fn all_adjacent_to_with(&self, node: NodeId, directed: bool) -> Vec<NodeId> {
        self.edges
            .values()
            .filter(|edge| edge.touches(node))
            .filter_map(|edge| {
                if directed {
                    (edge.start == node).then_some(edge.end)
                } else {
                    Some(edge.other_end(node))
                }
            })
            .collect()
    }

    /// Returns all live node ids.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    /// Returns all live edge ids.
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges.keys().copied().collect()
    }

    /// Returns a copy of every edge.
    pub fn all_edges(&self) -> Vec<Edge> {
        self.edges.values().copied().collect()
    }

    /// Returns the payload stored for `node`.
    pub fn node_data(&self, node: NodeId) -> Option<&T> {
        self.nodes.get(&node)
    }

    /// Returns the payload stored for `node` for in-place updates.
    pub fn node_data_mut(&mut self, node: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(&node)
    }

    /// Returns the edge stored under `id`.
    pub fn edge_from_id(&self, id: EdgeId) -> Option<Edge> {
        self.edges.get(&id).copied()
    }

    /// Returns the edge joining `start` to `end`, if any.
    pub fn edge_from_nodes(&self, start: NodeId, end: NodeId) -> Option<Edge> {
        self.edge_id(start, end)
            .and_then(|id| self.edges.get(&id).copied())
    }

    /// Number of live nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether the graph is (weakly) connected.
    ///
    /// A graph without nodes or without edges is never connected, so a lone
    /// node only counts when it carries a self loop. Direction is ignored
    /// during the traversal.
    pub fn is_connected(&self) -> bool {
        if self.nodes.is_empty() || self.edges.is_empty() {
            return false;
        }
        let Some(&start) = self.nodes.keys().next() else {
            return false;
        };
        self.reachable_from(start).len() == self.nodes.len()
    }

    /// Returns `edges - nodes + 1` for a connected graph.
    pub fn genus(&self) -> Result<i64, GameError> {
        if !self.is_connected() {
            return Err(GameError::NotConnected(
                ErrorInfo::new("not-connected", "genus is undefined for a disconnected graph")
                    .with_context("nodes", self.nodes.len())
                    .with_context("edges", self.edges.len()),
            ));
        }
        Ok(self.edges.len() as i64 - self.nodes.len() as i64 + 1)
    }

    /// Removes a node together with every edge touching it.
    ///
    /// Returns `false` when no such node exists. Dangling edges naming the id
    /// are removed either way.
    pub fn remove_node(&mut self, node: NodeId) -> bool {
        let dropped = self.remove_edges_with_node(node);
        let removed = self.nodes.remove(&node).is_some();
        if removed {
            debug!("removed node {node} and {dropped} incident edges");
        }
        removed
    }

    /// Removes the edge joining `start` to `end`. Returns whether one was found.
    pub fn remove_edge(&mut self, start: NodeId, end: NodeId) -> bool {
        match self.edge_id(start, end) {
            Some(id) => self.edges.remove(&id).is_some(),
            None => false,
        }
    }

    /// Removes every edge touching `node` and returns how many were removed.
    /// The node itself stays.
    pub fn remove_edges_with_node(&mut self, node: NodeId) -> usize {
        let before = self.edges.len();
        self.edges.retain(|_, edge| !edge.touches(node));
        before - self.edges.len()
    }

    /// Removes every node, and therefore every edge.
    pub fn remove_all_nodes(&mut self) {
        self.remove_all_edges();
        self.nodes.clear();
    }

    /// Removes every edge. Nodes are untouched.
    pub fn remove_all_edges(&mut self) {
        self.edges.clear();
    }

    /// Live nodes reachable from `start` when edges are treated as undirected.
    fn reachable_from(&self, start: NodeId) -> BTreeSet<NodeId> {
        let mut visited = BTreeSet::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if !visited.insert(node) {
                continue;
            }
            for neighbour in self.all_adjacent_to_with(node, false) {
                if self.nodes.contains_key(&neighbour) && !visited.contains(&neighbour) {
                    stack.push(neighbour);
                }
            }
        }
        visited
    }
}

impl<T: Clone> Graph<T> {
    /// Returns a copy of every node payload. Ids are not included.
    pub fn all_node_data(&self) -> Vec<T> {
        self.nodes.values().cloned().collect()
    }
}

impl<T: PartialEq> Graph<T> {
    /// Returns the id of a node whose payload equals `data`.
    ///
    /// When several nodes match, which one is returned is unspecified.
    pub fn node_id_of(&self, data: &T) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, value)| *value == data)
            .map(|(id, _)| *id)
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

impl<T: fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nodes[{}]:", self.nodes.len())?;
        for (id, data) in &self.nodes {
            write!(f, " ({id}: {data})")?;
        }
        writeln!(f)?;
        write!(f, "Edges[{}]:", self.edges.len())?;
        for edge in self.edges.values() {
            write!(f, " ({}, {}: {})", edge.start, edge.end, edge.weight)?;
        }
        Ok(())
    }
}
