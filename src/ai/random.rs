//! Uniformly random baseline player

use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use super::DecisionContext;
use crate::{
    Error, Result,
    ports::Decider,
    tictactoe::{Cell, GameState},
};

/// Picks uniformly among the empty cells.
///
/// Plays legal but not deliberate moves, which makes it a useful sparring
/// partner for checking that the search never loses.
#[derive(Debug, Clone)]
pub struct RandomAi {
    rng: StdRng,
}

impl RandomAi {
    /// Random player with a fixed seed for reproducible games
    pub fn with_seed(seed: u64) -> Self {
        RandomAi {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Random player seeded from the operating system
    pub fn from_entropy() -> Self {
        RandomAi {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Decider for RandomAi {
    fn decide(&mut self, context: &DecisionContext) -> Result<Cell> {
        if context.board.is_over() {
            return Err(Error::NoDecisionAvailable);
        }
        context
            .board
            .empty_cells()
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoDecisionAvailable)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
