//! Widget context providing shared state for widget rendering.
//!
//! The [`WidgetContext`] struct carries the data widgets read during
//! rendering. It is passed by reference to each widget's `render` method.

use crate::snapshot::DashboardSnapshot;

/// Shared context passed to widgets during rendering.
///
/// # Example
///
/// ```
/// use fleet_dashboard::snapshot::DashboardSnapshot;
/// use fleet_dashboard::widgets::WidgetContext;
/// use widget_prefs::WidgetId;
///
/// let snapshot = DashboardSnapshot::new();
/// let ctx = WidgetContext::new(&snapshot);
/// assert_eq!(ctx.snapshot.tally(&WidgetId::Tasks).total, 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WidgetContext<'a> {
    /// Record counts for this render.
    pub snapshot: &'a DashboardSnapshot,
}

impl<'a> WidgetContext<'a> {
    /// Creates a context borrowing `snapshot`.
    pub fn new(snapshot: &'a DashboardSnapshot) -> Self {
        Self { snapshot }
    }
}
