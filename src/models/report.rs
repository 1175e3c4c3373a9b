//! Daily report records and the raw entries staff fill in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One line of time spent on a department task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    pub id: String,
    pub user_id: String,
    pub department_id: String,
    pub task_id: String,
    pub description: String,
    /// Hours, always positive.
    pub time_spent: f64,
    pub date: NaiveDate,
}

/// Unvalidated report row as typed by a staff member.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub task_id: String,
    pub description: String,
    pub time_spent: String,
}

impl ReportEntry {
    pub fn new(task_id: impl Into<String>, description: impl Into<String>, time_spent: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            description: description.into(),
            time_spent: time_spent.into(),
        }
    }

    /// Parsed hours if the entry has a task, a description, and a positive time.
    pub fn hours(&self) -> Option<f64> {
        if self.task_id.trim().is_empty() || self.description.trim().is_empty() {
            return None;
        }
        self.time_spent
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|h| h.is_finite() && *h > 0.0)
    }

    /// Whether this entry survives submission filtering.
    pub fn is_complete(&self) -> bool {
        self.hours().is_some()
    }
}
