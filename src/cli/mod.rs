//! CLI infrastructure for the tttree toolkit
//!
//! This module provides the command-line interface for asking the AI for a
//! move, playing games, and inspecting decision trees.

pub mod commands;
pub mod output;
