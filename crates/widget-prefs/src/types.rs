//! Core domain types for widget-prefs
//!
//! This module defines the known widget kinds (`WidgetId`), the per-widget
//! preference entry (`WidgetConfig`), and the default sequence.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Dashboard widget identifier
///
/// Serialized as a kebab-case string. Identifiers this version does not
/// know (written by an older or newer build) round-trip through `Other`.
///
/// Equality and hashing compare the wire identifier, so `Other("tasks")`
/// is the same id as `Tasks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WidgetId {
    /// Open tasks and tickets
    Tasks,
    /// Corporate rental contracts
    Contracts,
    /// Upcoming vehicle service
    ServiceReminders,
    /// Sales pipeline leads
    SalesLeads,
    /// Open support cases
    OpenCases,
    /// Unread notifications
    Notifications,
    /// Fleet availability
    FleetStatus,
    /// Identifier unknown to this version
    Other(String),
}

impl WidgetId {
    /// Known widget kinds in canonical default order.
    pub const KNOWN: [WidgetId; 7] = [
        WidgetId::Tasks,
        WidgetId::Contracts,
        WidgetId::ServiceReminders,
        WidgetId::SalesLeads,
        WidgetId::OpenCases,
        WidgetId::Notifications,
        WidgetId::FleetStatus,
    ];

    /// Wire identifier
    pub fn as_str(&self) -> &str {
        match self {
            WidgetId::Tasks => "tasks",
            WidgetId::Contracts => "contracts",
            WidgetId::ServiceReminders => "service-reminders",
            WidgetId::SalesLeads => "sales-leads",
            WidgetId::OpenCases => "open-cases",
            WidgetId::Notifications => "notifications",
            WidgetId::FleetStatus => "fleet-status",
            WidgetId::Other(id) => id,
        }
    }

    /// Display name used in the default sequence, `None` for unknown ids.
    pub fn default_label(&self) -> Option<&'static str> {
        match self {
            WidgetId::Tasks => Some("My Tasks"),
            WidgetId::Contracts => Some("Corporate Contracts"),
            WidgetId::ServiceReminders => Some("Service Reminders"),
            WidgetId::SalesLeads => Some("Sales Pipeline"),
            WidgetId::OpenCases => Some("Open Cases"),
            WidgetId::Notifications => Some("Notifications"),
            WidgetId::FleetStatus => Some("Fleet Status"),
            WidgetId::Other(_) => None,
        }
    }

    /// True for ids this version can render
    pub fn is_known(&self) -> bool {
        !matches!(self, WidgetId::Other(_))
    }
}

impl PartialEq for WidgetId {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for WidgetId {}

impl Hash for WidgetId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<String> for WidgetId {
    fn from(value: String) -> Self {
        match value.as_str() {
            "tasks" => WidgetId::Tasks,
            "contracts" => WidgetId::Contracts,
            "service-reminders" => WidgetId::ServiceReminders,
            "sales-leads" => WidgetId::SalesLeads,
            "open-cases" => WidgetId::OpenCases,
            "notifications" => WidgetId::Notifications,
            "fleet-status" => WidgetId::FleetStatus,
            _ => WidgetId::Other(value),
        }
    }
}

impl From<WidgetId> for String {
    fn from(value: WidgetId) -> Self {
        match value {
            WidgetId::Other(id) => id,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for WidgetId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(WidgetId::from(s.to_string()))
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dashboard widget preference entry
///
/// Matches the persisted record shape `{"id", "label", "visible"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Widget identifier
    pub id: WidgetId,
    /// Human-readable display name
    pub label: String,
    /// Whether the widget currently renders
    pub visible: bool,
}

impl WidgetConfig {
    /// Create an entry
    pub fn new(id: WidgetId, label: impl Into<String>, visible: bool) -> Self {
        Self {
            id,
            label: label.into(),
            visible,
        }
    }
}

/// The hardcoded default sequence: every known widget, visible, in
/// declaration order.
pub fn default_widgets() -> Vec<WidgetConfig> {
    WidgetId::KNOWN
        .iter()
        .map(|id| WidgetConfig::new(id.clone(), id.default_label().unwrap_or_default(), true))
        .collect()
}
