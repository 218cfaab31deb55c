//! User-visible outcome messages ("toasts") raised after a successful change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use employee_hub_core::EmployeeId;

/// Which change a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Added,
    Updated,
    Removed,
}

impl NotificationKind {
    /// Stable name, usable as a log field or CSS hook.
    pub fn event_type(self) -> &'static str {
        match self {
            NotificationKind::Added => "directory.employee.added",
            NotificationKind::Updated => "directory.employee.updated",
            NotificationKind::Removed => "directory.employee.removed",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            NotificationKind::Added => "Employee Added",
            NotificationKind::Updated => "Employee Updated",
            NotificationKind::Removed => "Employee Removed",
        }
    }

    fn describe(self, name: &str) -> String {
        match self {
            NotificationKind::Added => format!("{name} has been added to the team."),
            NotificationKind::Updated => format!("{name} has been updated successfully."),
            NotificationKind::Removed => format!("{name} has been removed from the team."),
        }
    }
}

/// Outcome of a successful directory change, ready to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub employee_id: EmployeeId,
    pub title: String,
    pub description: String,
    pub occurred_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        employee_id: EmployeeId,
        name: &str,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            employee_id,
            title: kind.title().to_string(),
            description: kind.describe(name),
            occurred_at,
        }
    }
}
