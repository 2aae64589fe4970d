use dollar_core::errors::{ErrorInfo, GameError};
use dollar_core::rng::{RngHandle, PARTITION_SUBSTREAM};
use dollar_core::{EdgeId, NodeId};
use dollar_graph::Graph;
use dollar_partition::RandomPartition;
use log::{debug, info, warn};

use crate::config::{Difficulty, GameConfig};
use crate::purse::Purse;

/// Label shown in place of the genus while the board is disconnected.
pub const NOT_APPLICABLE: &str = "N/A";

/// A dollar game board: an undirected graph of purses plus the generator used
/// to randomize it.
#[derive(Debug, Clone)]
pub struct DollarGame {
    config: GameConfig,
    graph: Graph<Purse>,
    partition: RandomPartition,
    rng: RngHandle,
}

impl DollarGame {
    /// Creates an empty board after validating `config`.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let partition = RandomPartition::new(config.partition)?;
        let rng = RngHandle::for_substream(config.seed, PARTITION_SUBSTREAM);
        Ok(Self {
            config,
            graph: Graph::undirected(),
            partition,
            rng,
        })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the board.
    pub fn graph(&self) -> &Graph<Purse> {
        &self.graph
    }

    /// Changes the difficulty used by later calls to [`DollarGame::randomize`].
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    /// Adds a node holding `amount`.
    pub fn add_purse(&mut self, amount: i64) -> NodeId {
        self.graph.add_node(Purse::with_amount(amount), None)
    }

    /// Returns the purse stored on `node`.
    pub fn purse(&self, node: NodeId) -> Option<&Purse> {
        self.graph.node_data(node)
    }

    /// Overwrites the amount held by `node`.
    pub fn set_amount(&mut self, node: NodeId, amount: i64) -> Result<(), GameError> {
        self.purse_mut(node)?.amount = amount;
        Ok(())
    }

    /// Joins two existing nodes.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<EdgeId, GameError> {
        self.purse_mut(a)?;
        self.purse_mut(b)?;
        self.graph.add_edge(a, b, 0)
    }

    /// Removes the edge between two nodes. Returns whether one existed.
    pub fn disconnect(&mut self, a: NodeId, b: NodeId) -> bool {
        self.graph.remove_edge(a, b)
    }

    /// Removes a node and its edges. Returns whether the node existed.
    pub fn remove_purse(&mut self, node: NodeId) -> bool {
        self.graph.remove_node(node)
    }

    /// `node` gives one unit to every neighbour.
    pub fn give(&mut self, node: NodeId) -> Result<(), GameError> {
        self.transfer(node, -1)?;
        self.purse_mut(node)?.gives += 1;
        Ok(())
    }

    /// `node` takes one unit from every neighbour.
    pub fn take(&mut self, node: NodeId) -> Result<(), GameError> {
        self.transfer(node, 1)?;
        self.purse_mut(node)?.takes += 1;
        Ok(())
    }

    /// Returns whether no node is in debt.
    pub fn is_solved(&self) -> bool {
        self.graph.all_node_data().iter().all(|purse| !purse.in_debt())
    }

    /// Sum of every amount on the board.
    pub fn total(&self) -> i64 {
        self.graph
            .all_node_data()
            .iter()
            .map(|purse| purse.amount)
            .sum()
    }

    /// Returns whether the board is connected.
    pub fn is_connected(&self) -> bool {
        self.graph.is_connected()
    }

    /// Genus of the board, or `NotConnected`.
    pub fn genus(&self) -> Result<i64, GameError> {
        self.graph.genus()
    }

    /// Genus rendered for display, [`NOT_APPLICABLE`] while disconnected.
    pub fn genus_label(&self) -> String {
        match self.graph.genus() {
            Ok(genus) => genus.to_string(),
            Err(_) => NOT_APPLICABLE.to_string(),
        }
    }

    /// Total that [`DollarGame::randomize`] aims for: the difficulty offset
    /// plus the genus when the board is connected.
    pub fn target_sum(&self) -> i64 {
        let offset = self.config.difficulty.offset();
        match self.graph.genus() {
            Ok(genus) => offset + genus,
            Err(_) => {
                debug!("randomizing a disconnected board, genus ignored");
                offset
            }
        }
    }

    /// Assigns random amounts to every node.
    ///
    /// Amounts lie in the configured range and add up to
    /// [`DollarGame::target_sum`]. Values are written positionally against
    /// the node id list and move counters are reset. When no assignment
    /// exists the board is left untouched and `Infeasible` is returned.
    pub fn randomize(&mut self) -> Result<(), GameError> {
        let nodes = self.graph.node_ids();
        let target = self.target_sum();
        let (floor, ceiling) = (self.config.min_amount, self.config.max_amount);
        let values = self
            .partition
            .find_random_set(target, nodes.len(), floor, ceiling, &mut self.rng)
            .ok_or_else(|| {
                warn!("unable to spread {target} over {} nodes", nodes.len());
                GameError::Infeasible(
                    ErrorInfo::new(
                        "infeasible-partition",
                        "no amounts in range add up to the target",
                    )
                    .with_context("target", target)
                    .with_context("nodes", nodes.len())
                    .with_context("min_amount", floor)
                    .with_context("max_amount", ceiling)
                    .with_hint("add nodes, widen the amount range, or change the difficulty"),
                )
            })?;

        for (node, amount) in nodes.into_iter().zip(values) {
            if let Some(purse) = self.graph.node_data_mut(node) {
                *purse = Purse::with_amount(amount);
            }
        }
        info!("randomized board to a total of {target}");
        Ok(())
    }

    /// Moves one unit along every edge at `node`; `direction` is +1 to take
    /// and -1 to give.
    fn transfer(&mut self, node: NodeId, direction: i64) -> Result<(), GameError> {
        self.purse_mut(node)?;
        let neighbours = self.graph.all_adjacent_to(node);
        for neighbour in &neighbours {
            if let Some(purse) = self.graph.node_data_mut(*neighbour) {
                purse.amount -= direction;
            }
        }
        self.purse_mut(node)?.amount += direction * neighbours.len() as i64;
        debug!(
            "node {node} {} with {} neighbours",
            if direction > 0 { "took" } else { "gave" },
            neighbours.len()
        );
        Ok(())
    }

    fn purse_mut(&mut self, node: NodeId) -> Result<&mut Purse, GameError> {
        self.graph.node_data_mut(node).ok_or_else(|| {
            GameError::NotFound(
                ErrorInfo::new("unknown-node", "node does not exist").with_context("node", node),
            )
        })
    }
}
