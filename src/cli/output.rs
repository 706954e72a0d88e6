//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Error, Result};

/// Create a progress bar for a batch of games
pub fn create_game_progress(total_games: u64) -> Result<ProgressBar> {
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
        .map_err(|e| Error::ProgressBarTemplate {
            message: e.to_string(),
        })?
        .progress_chars("=>-");
    let pb = ProgressBar::new(total_games);
    pb.set_style(style);
    Ok(pb)
}

/// Create a spinner for a long tree build
pub fn create_spinner(message: &str) -> Result<ProgressBar> {
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .map_err(|e| Error::ProgressBarTemplate {
            message: e.to_string(),
        })?;
    let pb = ProgressBar::new_spinner();
    pb.set_style(style);
    pb.set_message(message.to_string());
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print a board indented under a header, one row per line
pub fn print_board(board: &impl std::fmt::Display) {
    for row in board.to_string().lines() {
        println!("    {row}");
    }
}
