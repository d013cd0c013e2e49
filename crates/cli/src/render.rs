//! Turn board snapshots into terminal output

use tf_core::card::{stat_lines, EmptyState, TaskCard};
use tf_core::task::TaskCounts;
use tf_core::view::Board;

use crate::cli::OutputFormat;

/// Render the whole board in the requested format
pub fn board(board: &Board, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(board)?),
        OutputFormat::Table => Ok(board_table(board)),
    }
}

/// Render only the counters
pub fn counts(counts: &TaskCounts, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(counts)?),
        OutputFormat::Table => Ok(stats_line(counts)),
    }
}

fn stats_line(counts: &TaskCounts) -> String {
    stat_lines(counts)
        .iter()
        .map(|(label, count)| format!("{label}: {count}"))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn board_table(board: &Board) -> String {
    let mut lines = vec![
        format!(
            "== TaskFlow · {} · {} ==",
            board.selection.mode, board.selection.status_filter
        ),
        stats_line(&board.counts),
        String::new(),
    ];

    if board.is_empty() {
        lines.push(EmptyState::for_mode(board.selection.mode).to_string());
    } else {
        let cards = board
            .tasks
            .iter()
            .map(|task| TaskCard::new(task).to_string())
            .collect::<Vec<_>>();
        lines.push(cards.join("\n\n"));
    }

    lines.join("\n")
}
