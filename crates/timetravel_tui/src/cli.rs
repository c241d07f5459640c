//! Command-line interface for timetravel_tui.

use clap::Parser;
use std::path::PathBuf;
use timetravel_tictactoe::ListOrder;

/// Time-travel tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "timetravel_tui")]
#[command(about = "Tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Initial move-list order (overrides the config file)
    #[arg(long, value_parser = parse_order)]
    pub order: Option<ListOrder>,

    /// Log file (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn parse_order(s: &str) -> Result<ListOrder, String> {
    s.parse::<ListOrder>()
        .map_err(|_| format!("expected 'ascending' or 'descending', got '{}'", s))
}
