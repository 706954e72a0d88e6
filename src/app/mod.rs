//! Application layer: run configuration and where it comes from.
//!
//! [`PlayConfig`] holds everything a CLI run needs; [`loader`] resolves it
//! from a TOML file plus `TTTREE_*` environment overrides.
//!
//! # Usage
//!
//! ```
//! use tttree::app::{OpponentKind, PlayConfig};
//! use tttree::tictactoe::Player;
//!
//! let config = PlayConfig::default()
//!     .with_ai_mark(Player::O)
//!     .with_opponent(OpponentKind::Random)
//!     .with_seed(42);
//! config.validate()?;
//! # Ok::<(), tttree::Error>(())
//! ```

pub mod config;
pub mod loader;

pub use config::{OpponentKind, PlayConfig};
pub use loader::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE, load_config};
