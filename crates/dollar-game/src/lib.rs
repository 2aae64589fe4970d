#![deny(missing_docs)]

//! Rules of the dollar game on top of [`dollar_graph::Graph`].
//!
//! Every node holds a [`Purse`] with an integer amount. A node can give one
//! unit to each neighbour or take one unit from each neighbour; the board is
//! solved once no amount is negative. [`DollarGame::randomize`] fills the
//! board with a random partition whose total is the genus of the graph shifted
//! by the configured [`Difficulty`].

mod config;
mod game;
mod purse;

pub use config::{Difficulty, GameConfig};
pub use game::{DollarGame, NOT_APPLICABLE};
pub use purse::Purse;
