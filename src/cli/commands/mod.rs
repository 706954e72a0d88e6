//! Subcommands of the `tttree` binary

pub mod decide;
pub mod play;
pub mod tree;

use anyhow::{Context, Result};

use crate::tictactoe::ProjectedBoard;

/// Parse a `--state` argument, defaulting to the empty board with X to move
pub(crate) fn parse_state(state: Option<&str>) -> Result<ProjectedBoard> {
    match state {
        Some(text) => {
            ProjectedBoard::from_string(text).with_context(|| format!("invalid --state '{text}'"))
        }
        None => Ok(ProjectedBoard::new()),
    }
}
