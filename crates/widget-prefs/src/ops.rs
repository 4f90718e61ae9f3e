//! Pure transformations over a widget sequence
//!
//! Every function here borrows its input and returns a fresh `Vec`. Callers
//! hand the result to the store for persistence.

use crate::types::{default_widgets, WidgetConfig, WidgetId};
use std::collections::HashSet;

/// Flip `visible` on the entry matching `id` (pure function, no I/O)
///
/// Returns an equal sequence when no entry matches. Order is unchanged.
pub fn toggle(widgets: &[WidgetConfig], id: &WidgetId) -> Vec<WidgetConfig> {
    widgets
        .iter()
        .map(|w| {
            if &w.id == id {
                WidgetConfig {
                    visible: !w.visible,
                    ..w.clone()
                }
            } else {
                w.clone()
            }
        })
        .collect()
}

/// Move the entry at `from` so it lands at `to` (pure function, no I/O)
///
/// Splice semantics: the entry is removed first and `to` indexes the
/// shortened sequence. A `from` past the end leaves the sequence
/// unchanged; `to` is clamped to the end of the shortened sequence.
pub fn reorder(widgets: &[WidgetConfig], from: usize, to: usize) -> Vec<WidgetConfig> {
    let mut result = widgets.to_vec();
    if from >= result.len() {
        return result;
    }
    let moved = result.remove(from);
    let to = to.min(result.len());
    result.insert(to, moved);
    result
}

/// Append default entries missing from `saved` (pure function, no I/O)
///
/// Saved entries keep their order, labels, and visibility. Defaults whose
/// id is absent are appended in default order, visible. Unknown ids in
/// `saved` are kept as-is.
pub fn merge_with_defaults(saved: Vec<WidgetConfig>) -> Vec<WidgetConfig> {
    let present: HashSet<WidgetId> = saved.iter().map(|w| w.id.clone()).collect();
    let mut merged = saved;
    merged.extend(
        default_widgets()
            .into_iter()
            .filter(|w| !present.contains(&w.id)),
    );
    merged
}
