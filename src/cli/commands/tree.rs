//! Tree command - Build and inspect the full decision tree for a board

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;

use super::parse_state;
use crate::{
    ai::{DecisionContext, TttDecisionTree, create_decision_tree, fitness},
    app::PlayConfig,
    cli::output::{create_spinner, format_number, print_kv, print_section, print_subsection},
    tictactoe::{GameState, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Build the decision tree for a board and print its shape")]
pub struct TreeArgs {
    /// Board to search from (defaults to the empty board)
    #[arg(long, short = 's')]
    pub state: Option<String>,

    /// Mark the AI plays (defaults to the side to move)
    #[arg(long)]
    pub ai: Option<Player>,

    /// Number of layers below the root to print
    #[arg(long, short = 'd')]
    pub depth: Option<usize>,

    /// Export the explored tree to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Limit the exported tree to this many layers
    #[arg(long)]
    pub export_depth: Option<usize>,
}

/// Terminal states of a tree, split by result for the AI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalBreakdown {
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

pub fn terminal_breakdown(tree: &TttDecisionTree) -> TerminalBreakdown {
    let mut breakdown = TerminalBreakdown::default();
    for leaf in tree.leaves() {
        let score = fitness(leaf);
        if score > 0.0 {
            breakdown.wins += 1;
        } else if score < 0.0 {
            breakdown.losses += 1;
        } else {
            breakdown.draws += 1;
        }
    }
    breakdown
}

pub fn execute(args: TreeArgs, config: &PlayConfig) -> Result<()> {
    let board = parse_state(args.state.as_deref())?;
    let ai_mark = args.ai.unwrap_or_else(|| board.to_move());
    let context = DecisionContext::new(ai_mark.is_x(), &board);
    let depth = args.depth.unwrap_or(config.inspect_depth);

    let spinner = if config.progress {
        Some(create_spinner("Building decision tree...")?)
    } else {
        None
    };
    let tree = create_decision_tree(context);
    let summary = tree.summary();
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    print_section("Decision Tree");
    print_kv("Root", &context.to_string());
    print_kv("Nodes", &format_number(summary.nodes));
    print_kv("Leaves", &format_number(summary.leaves));
    print_kv("Height", &summary.height.to_string());

    let breakdown = terminal_breakdown(&tree);
    print_subsection("Terminal states (AI perspective)");
    print_kv("Wins", &format_number(breakdown.wins));
    print_kv("Draws", &format_number(breakdown.draws));
    print_kv("Losses", &format_number(breakdown.losses));

    print_subsection("Layer widths");
    for (level, width) in summary.layer_widths.iter().enumerate() {
        println!("  Depth {level}: {}", format_number(*width));
    }

    if depth > 0 {
        print_subsection(&format!("First {depth} layer(s)"));
        let root_placed = board.occupied_count();
        tree.visit_children(depth, |parent, cell, child| {
            let indent = parent.board.occupied_count() - root_placed;
            println!(
                "  {}{} -> {cell} -> {}",
                "  ".repeat(indent),
                parent.board.encode(),
                child.board.encode()
            );
        });
    }

    if let Some(path) = args.export {
        let exported = tree.export(args.export_depth);
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &exported)
            .with_context(|| format!("failed to write {}", path.display()))?;
        writer.flush()?;
        println!("\nTree exported to: {}", path.display());
    }

    Ok(())
}
