//! `fleetdash widgets` subcommands.
//!
//! Each mutating command goes through the board callbacks, so the change
//! is persisted exactly as an interactive gesture would be, then prints
//! the resulting list.

use std::fmt::Write as _;

use widget_prefs::{encode, WidgetConfig, WidgetId};

use super::{Board, CommandError};

/// Human-readable listing: `<position>  [x] <label> (<id>)`, one per line.
pub fn format_list(widgets: &[WidgetConfig]) -> String {
    let mut out = String::new();
    for (position, widget) in widgets.iter().enumerate() {
        let mark = if widget.visible { 'x' } else { ' ' };
        let _ = writeln!(
            out,
            "{position}  [{mark}] {} ({})",
            widget.label, widget.id
        );
    }
    out
}

fn print_list(board: &Board, json: bool) -> Result<(), CommandError> {
    if json {
        println!("{}", encode(board.widgets())?);
    } else {
        print!("{}", format_list(board.widgets()));
    }
    Ok(())
}

/// `widgets list [--json]`
pub fn run_list(board: &Board, json: bool) -> Result<(), CommandError> {
    print_list(board, json)
}

/// `widgets toggle <id>`
///
/// Fails without saving when `id` is not on the board.
pub fn run_toggle(board: &mut Board, id: &str) -> Result<(), CommandError> {
    let id = WidgetId::from(id.to_string());
    if !board.widgets().iter().any(|w| w.id == id) {
        return Err(CommandError::UnknownWidget(id.to_string()));
    }
    board.on_toggle(&id);
    tracing::info!("Toggled widget '{id}'");
    print_list(board, false)
}

/// `widgets move <from> <to>`
///
/// Out-of-range positions leave the order unchanged.
pub fn run_move(board: &mut Board, from: usize, to: usize) -> Result<(), CommandError> {
    if from >= board.widgets().len() {
        tracing::warn!(
            "Position {from} is out of range (0..{}), order unchanged",
            board.widgets().len()
        );
    }
    board.on_reorder(from, to);
    print_list(board, false)
}

/// `widgets reset`
pub fn run_reset(board: &mut Board) -> Result<(), CommandError> {
    board.reset();
    tracing::info!("Widget preferences reset to defaults");
    print_list(board, false)
}
