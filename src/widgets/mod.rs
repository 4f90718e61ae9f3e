//! Widget system for the fleet dashboard.
//!
//! This module defines the `Widget` trait that all dashboard widgets must
//! implement, the `WidgetRegistry` for creating widgets from persisted
//! identifiers, and [`compose`] which turns a board's preference list into
//! rendered lines.
//!
//! # Architecture
//!
//! Each widget renders a single line summarizing one CRM record category.
//! Widgets receive a `WidgetContext` borrowing the current
//! [`DashboardSnapshot`](crate::snapshot::DashboardSnapshot) and render
//! themselves into a ratatui `Line`.
//!
//! # Example
//!
//! ```
//! use fleet_dashboard::snapshot::DashboardSnapshot;
//! use fleet_dashboard::widgets::{compose, WidgetContext, WidgetRegistry};
//! use widget_prefs::default_widgets;
//!
//! let registry = WidgetRegistry::new();
//! let snapshot = DashboardSnapshot::new();
//! let ctx = WidgetContext::new(&snapshot);
//! let lines = compose(&default_widgets(), &registry, &ctx, 60);
//! assert_eq!(lines.len(), 7);
//! assert_eq!(lines[0].to_string(), "My Tasks: 0 open");
//! ```

pub mod context;
pub mod summary;

pub use context::WidgetContext;

use ratatui::text::Line;
use std::collections::HashMap;
use widget_prefs::{WidgetConfig, WidgetId};

/// Trait for dashboard widgets.
///
/// Each widget renders a single [`Line`] of content given a width
/// constraint and shared context. Widgets must be thread-safe
/// (`Send + Sync`).
pub trait Widget: Send + Sync {
    /// Render the widget content as a single line no wider than `width`.
    fn render(&self, width: u16, context: &WidgetContext) -> Line<'static>;

    /// Identifier of the preference entry this widget renders.
    fn id(&self) -> WidgetId;

    /// Minimum width in columns required for useful output.
    fn min_width(&self) -> u16;
}

/// Factory function type for creating widget instances.
pub type WidgetFactory = fn() -> Box<dyn Widget>;

/// Registry mapping widget identifiers to factory functions.
///
/// # Example
///
/// ```
/// use fleet_dashboard::widgets::WidgetRegistry;
/// use widget_prefs::WidgetId;
///
/// let registry = WidgetRegistry::new();
/// assert!(registry.create(&WidgetId::Tasks).is_some());
/// assert!(registry.create(&WidgetId::from("parking".to_string())).is_none());
/// ```
pub struct WidgetRegistry {
    factories: HashMap<WidgetId, WidgetFactory>,
}

impl WidgetRegistry {
    /// Creates a registry with a summary widget for every known id.
    pub fn new() -> Self {
        let mut reg = Self {
            factories: HashMap::new(),
        };
        reg.register(WidgetId::Tasks, summary::tasks);
        reg.register(WidgetId::Contracts, summary::contracts);
        reg.register(WidgetId::ServiceReminders, summary::service_reminders);
        reg.register(WidgetId::SalesLeads, summary::sales_leads);
        reg.register(WidgetId::OpenCases, summary::open_cases);
        reg.register(WidgetId::Notifications, summary::notifications);
        reg.register(WidgetId::FleetStatus, summary::fleet_status);
        reg
    }

    /// Register a widget factory for the given identifier.
    ///
    /// Overwrites any existing factory for the same ID.
    pub fn register(&mut self, id: WidgetId, factory: WidgetFactory) {
        self.factories.insert(id, factory);
    }

    /// Create a widget instance by identifier.
    ///
    /// Returns `None` if no factory is registered for the given ID.
    pub fn create(&self, id: &WidgetId) -> Option<Box<dyn Widget>> {
        self.factories.get(id).map(|f| f())
    }

    /// True if a factory is registered for `id`.
    pub fn contains(&self, id: &WidgetId) -> bool {
        self.factories.contains_key(id)
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Render one line per visible entry of `widgets`, in order.
///
/// Entries whose id has no registered factory are skipped.
pub fn compose(
    widgets: &[WidgetConfig],
    registry: &WidgetRegistry,
    context: &WidgetContext,
    width: u16,
) -> Vec<Line<'static>> {
    widgets
        .iter()
        .filter(|w| w.visible)
        .filter_map(|w| {
            let widget = registry.create(&w.id);
            if widget.is_none() {
                tracing::debug!("No widget registered for '{}', skipping", w.id);
            }
            widget
        })
        .map(|widget| widget.render(width, context))
        .collect()
}
