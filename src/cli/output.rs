//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::Board;

/// Create a progress bar for a batch of games
pub fn create_games_progress(total_games: u64) -> crate::Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
        .map_err(|e| crate::Error::ProgressBarTemplate {
            message: e.to_string(),
        })?
        .progress_chars("=>-");
    pb.set_style(style);
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:16} {}", format!("{}:", key), value);
}

/// Render a board with row and column labels.
///
/// ```text
///    0 1 2
/// 0  X . O
/// 1  . X .
/// 2  . . .
/// ```
pub fn format_board(board: &Board) -> String {
    let mut out = String::from("   0 1 2\n");
    for (row, cells) in board.cells().chunks(3).enumerate() {
        let line: Vec<String> = cells.iter().map(|c| c.to_char().to_string()).collect();
        out.push_str(&format!("{row}  {}\n", line.join(" ")));
    }
    out
}

/// Format a fraction as a percentage with one decimal
pub fn percent(part: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 * 100.0 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_board() {
        let board = Board::from_string("X.O .X. ...").unwrap();
        assert_eq!(format_board(&board), "   0 1 2\n0  X . O\n1  . X .\n2  . . .\n");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(1, 4), "25.0%");
        assert_eq!(percent(0, 0), "0.0%");
    }
}
