//! Decide command - Ask the decision-tree AI for a move

use anyhow::Result;
use clap::Parser;

use super::parse_state;
use crate::{
    ai::{DecisionContext, create_decision_tree, fitness},
    cli::output::{format_number, print_board, print_kv, print_section, print_subsection},
    tictactoe::{GameState, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Choose the AI's move for a board")]
pub struct DecideArgs {
    /// Board as 9 row-major cells (`.`, `X`, `O`) with optional `_X`/`_O` turn suffix
    #[arg(long, short = 's')]
    pub state: String,

    /// Mark the AI plays (defaults to the side to move)
    #[arg(long)]
    pub ai: Option<Player>,
}

pub fn execute(args: DecideArgs) -> Result<()> {
    let board = parse_state(Some(&args.state))?;
    let ai_mark = args.ai.unwrap_or_else(|| board.to_move());
    let context = DecisionContext::new(ai_mark.is_x(), &board);

    print_section("Decision");
    print_board(&board);
    print_kv("AI plays", &ai_mark.to_string());
    print_kv("To move", &board.to_move().to_string());

    let tree = create_decision_tree(context);
    print_kv("Tree nodes", &format_number(tree.node_count()));

    let choice = *tree.choose(fitness)?;
    print_kv("Choice", &choice.to_string());

    print_subsection("Root scores");
    for (cell, score) in tree.scored_choices(fitness) {
        let marker = if *cell == choice { "  <-" } else { "" };
        println!("  {cell}  {score:+.0}{marker}");
    }

    Ok(())
}
