//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{BoardState, Move};

/// Create a progress bar for simulated games
pub fn create_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
    pb.set_style(style);
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// `(r, c)` for a move, `none` for no move
pub fn format_move(mv: Option<Move>) -> String {
    mv.map_or_else(|| "none".to_string(), |mv| mv.to_string())
}

/// Render a board with column numbers across the top and row numbers down the side
pub fn render_board(board: &BoardState) -> String {
    let size = board.size();
    let mut out = String::from("   ");
    for col in 0..size {
        out.push_str(&format!(" {col}"));
    }
    out.push('\n');
    for (row, marks) in board.cells().chunks(size).enumerate() {
        out.push_str(&format!("{row:>2} "));
        for mark in marks {
            out.push(' ');
            out.push(mark.to_char());
        }
        out.push('\n');
    }
    out
}
