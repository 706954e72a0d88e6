//! Configuration types for playing and inspecting games.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, tictactoe::Player};

/// Who the decision-tree AI plays against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OpponentKind {
    /// A second exhaustive minimax player
    #[default]
    DecisionTree,
    /// Uniformly random legal moves
    Random,
}

impl fmt::Display for OpponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpponentKind::DecisionTree => write!(f, "decision-tree"),
            OpponentKind::Random => write!(f, "random"),
        }
    }
}

/// Configuration for a `tttree` run.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
///
/// # Examples
///
/// ```
/// use tttree::app::PlayConfig;
/// use tttree::tictactoe::Player;
///
/// let config = PlayConfig::default().with_first_player(Player::O).with_games(5);
/// assert_eq!(config.games, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Mark played by the decision-tree AI
    pub ai_mark: Player,
    /// Which mark moves first in each game
    pub first_player: Player,
    pub opponent: OpponentKind,
    /// Seed for the random opponent; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Number of games for `play`
    pub games: usize,
    /// Layers printed by `tree`
    pub inspect_depth: usize,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Whether to show progress bars
    pub progress: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            ai_mark: Player::X,
            first_player: Player::X,
            opponent: OpponentKind::default(),
            seed: None,
            games: 1,
            inspect_depth: 2,
            log_level: "info".to_string(),
            progress: true,
        }
    }
}

impl PlayConfig {
    pub fn with_ai_mark(mut self, mark: Player) -> Self {
        self.ai_mark = mark;
        self
    }

    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    pub fn with_opponent(mut self, opponent: OpponentKind) -> Self {
        self.opponent = opponent;
        self
    }

    /// Set the random seed for deterministic games.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Check values serde cannot rule out on its own.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when `games` is zero or the
    /// log level is blank.
    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(Error::InvalidConfiguration {
                message: "games must be at least 1".to_string(),
            });
        }
        if self.log_level.trim().is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "log_level must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
