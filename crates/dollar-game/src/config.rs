use dollar_core::errors::{ErrorInfo, GameError};
use dollar_partition::PartitionConfig;
use serde::{Deserialize, Serialize};

/// How far the randomized total sits from the genus of the board.
///
/// A total of at least the genus always admits a solution on a connected
/// board; going below it may produce unsolvable puzzles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    /// Genus plus two.
    VeryEasy,
    /// Genus plus one.
    Easy,
    /// Exactly the genus.
    #[default]
    Challenging,
    /// Genus minus one.
    NotAlwaysPossible,
}

impl Difficulty {
    /// Offset added to the genus when computing the randomized total.
    pub const fn offset(&self) -> i64 {
        match self {
            Difficulty::VeryEasy => 2,
            Difficulty::Easy => 1,
            Difficulty::Challenging => 0,
            Difficulty::NotAlwaysPossible => -1,
        }
    }
}

/// Parameters of a [`DollarGame`](crate::DollarGame).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Smallest amount randomize may place on a node.
    #[serde(default = "default_min_amount")]
    pub min_amount: i64,
    /// Largest amount randomize may place on a node.
    #[serde(default = "default_max_amount")]
    pub max_amount: i64,
    /// Offset applied to the genus when randomizing.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Weighting used by the partition generator.
    #[serde(default)]
    pub partition: PartitionConfig,
    /// Master seed for every random draw made by the game.
    #[serde(default)]
    pub seed: u64,
}

fn default_min_amount() -> i64 {
    -5
}

fn default_max_amount() -> i64 {
    5
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_amount: default_min_amount(),
            max_amount: default_max_amount(),
            difficulty: Difficulty::default(),
            partition: PartitionConfig::default(),
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Checks the amount range and the partition settings.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.min_amount > self.max_amount {
            return Err(GameError::Config(
                ErrorInfo::new("invalid-range", "min_amount exceeds max_amount")
                    .with_context("min_amount", self.min_amount)
                    .with_context("max_amount", self.max_amount),
            ));
        }
        self.partition.validate()
    }

    /// Parses a JSON document and validates the result. Missing fields take
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| GameError::Config(ErrorInfo::new("parse-config", err.to_string())))?;
        config.validate()?;
        Ok(config)
    }
}
