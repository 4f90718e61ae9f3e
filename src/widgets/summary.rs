//! Summary widgets: one line of counts per CRM record category.
//!
//! # Display Format
//!
//! `<label>: <total> <noun>[, <flagged> <flag noun>]`
//!
//! e.g. `My Tasks: 12 open, 3 overdue`. The flagged part is omitted when
//! zero and highlighted in yellow otherwise. Lines wider than the
//! available width are cut and end with `…`.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use widget_prefs::WidgetId;

use super::{Widget, WidgetContext};

/// Widget rendering the tally of one record category.
pub struct SummaryWidget {
    id: WidgetId,
    label: String,
    noun: &'static str,
    flag_noun: &'static str,
}

impl SummaryWidget {
    /// Create a summary widget for `id`, labelled with its default label.
    pub fn new(id: WidgetId, noun: &'static str, flag_noun: &'static str) -> Self {
        let label = id
            .default_label()
            .map(str::to_string)
            .unwrap_or_else(|| id.as_str().to_string());
        Self {
            id,
            label,
            noun,
            flag_noun,
        }
    }
}

impl Widget for SummaryWidget {
    fn render(&self, width: u16, context: &WidgetContext) -> Line<'static> {
        let tally = context.snapshot.tally(&self.id);
        let head = format!("{}: {} {}", self.label, tally.total, self.noun);
        let flag = (tally.flagged > 0).then(|| format!("{} {}", tally.flagged, self.flag_noun));

        let full_width =
            head.chars().count() + flag.as_ref().map_or(0, |f| f.chars().count() + 2);
        if full_width > usize::from(width) {
            let mut text = head;
            if let Some(flag) = flag {
                text.push_str(", ");
                text.push_str(&flag);
            }
            return Line::raw(truncate(&text, width));
        }

        let mut spans = vec![Span::raw(head)];
        if let Some(flag) = flag {
            spans.push(Span::raw(", "));
            spans.push(Span::styled(flag, Style::default().fg(Color::Yellow)));
        }
        Line::from(spans)
    }

    fn id(&self) -> WidgetId {
        self.id.clone()
    }

    fn min_width(&self) -> u16 {
        // label + ": 0"
        u16::try_from(self.label.chars().count() + 3).unwrap_or(u16::MAX)
    }
}

/// Cut `text` to `width` columns, ending with an ellipsis.
fn truncate(text: &str, width: u16) -> String {
    let width = usize::from(width);
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Factory for the `tasks` widget.
pub fn tasks() -> Box<dyn Widget> {
    Box::new(SummaryWidget::new(WidgetId::Tasks, "open", "overdue"))
}

/// Factory for the `contracts` widget.
pub fn contracts() -> Box<dyn Widget> {
    Box::new(SummaryWidget::new(WidgetId::Contracts, "active", "expiring"))
}

/// Factory for the `service-reminders` widget.
pub fn service_reminders() -> Box<dyn Widget> {
    Box::new(SummaryWidget::new(
        WidgetId::ServiceReminders,
        "due",
        "overdue",
    ))
}

/// Factory for the `sales-leads` widget.
pub fn sales_leads() -> Box<dyn Widget> {
    Box::new(SummaryWidget::new(WidgetId::SalesLeads, "leads", "hot"))
}

/// Factory for the `open-cases` widget.
pub fn open_cases() -> Box<dyn Widget> {
    Box::new(SummaryWidget::new(WidgetId::OpenCases, "open", "escalated"))
}

/// Factory for the `notifications` widget.
pub fn notifications() -> Box<dyn Widget> {
    Box::new(SummaryWidget::new(
        WidgetId::Notifications,
        "unread",
        "urgent",
    ))
}

/// Factory for the `fleet-status` widget.
pub fn fleet_status() -> Box<dyn Widget> {
    Box::new(SummaryWidget::new(
        WidgetId::FleetStatus,
        "available",
        "in service",
    ))
}
