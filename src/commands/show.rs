//! `fleetdash show`: render the visible widgets against a snapshot.

use std::path::Path;

use ratatui::text::Line;

use super::{Board, CommandError};
use crate::config::schema::Config;
use crate::snapshot::DashboardSnapshot;
use crate::widgets::{compose, WidgetContext, WidgetRegistry};

/// Render the board into lines, plus a footer such as `+2 hidden` or
/// `+1 hidden, 1 unsupported`.
///
/// Hidden counts only widgets this build can render. Visible entries with
/// no registered widget are reported as unsupported.
pub fn render_board(board: &Board, snapshot: &DashboardSnapshot, width: u16) -> Vec<String> {
    let registry = WidgetRegistry::new();
    let context = WidgetContext::new(snapshot);
    let mut lines: Vec<String> = compose(board.widgets(), &registry, &context, width)
        .iter()
        .map(Line::to_string)
        .collect();

    if let Some(footer) = footer(board, &registry) {
        lines.push(footer);
    }
    lines
}

fn footer(board: &Board, registry: &WidgetRegistry) -> Option<String> {
    let (renderable, unsupported): (Vec<_>, Vec<_>) = board
        .widgets()
        .iter()
        .partition(|w| registry.contains(&w.id));
    let hidden = renderable.iter().filter(|w| !w.visible).count();
    let unsupported = unsupported.iter().filter(|w| w.visible).count();

    match (hidden, unsupported) {
        (0, 0) => None,
        (hidden, 0) => Some(format!("+{hidden} hidden")),
        (0, unsupported) => Some(format!("+{unsupported} unsupported")),
        (hidden, unsupported) => Some(format!("+{hidden} hidden, {unsupported} unsupported")),
    }
}

/// `show [--snapshot <path>] [--width <n>]`
///
/// Flags override `[dashboard] snapshot` and `[dashboard] width`. Without
/// any snapshot every count renders as zero.
pub fn run_show(
    config: &Config,
    board: &Board,
    snapshot: Option<&Path>,
    width: Option<u16>,
) -> Result<(), CommandError> {
    let snapshot = match snapshot
        .map(Path::to_path_buf)
        .or_else(|| config.dashboard.snapshot_path())
    {
        Some(path) => DashboardSnapshot::load(&path)?,
        None => DashboardSnapshot::new(),
    };
    let width = width.unwrap_or(config.dashboard.width);

    for line in render_board(board, &snapshot, width) {
        println!("{line}");
    }
    Ok(())
}
