//! Exhaustive minimax decision trees, applied to tic-tac-toe
//!
//! This crate provides:
//! - A generic decision-tree engine: full tree construction, minimax choice,
//!   and read-only inspection of the explored tree
//! - A tic-tac-toe game-state model with live and projected boards
//! - A decision-tree AI plus a seeded random baseline behind one `Decider` port
//! - Configuration loading and a CLI for deciding, playing and inspecting

pub mod ai;
pub mod app;
pub mod cli;
pub mod decision_tree;
pub mod error;
pub mod ports;
pub mod tictactoe;

pub use decision_tree::{Branch, DecisionTree};
pub use error::{Error, Result};
