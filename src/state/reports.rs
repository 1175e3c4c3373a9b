//! Daily report ledger.

use chrono::NaiveDate;

use super::{WorkforceState, new_id};
use crate::error::{AppError, Result};
use crate::models::{DailyReport, ReportEntry};
use crate::store::Storage;

impl<S: Storage> WorkforceState<S> {
    /// Submit a batch of report entries for `user` dated `today`.
    ///
    /// Incomplete entries are dropped. Each kept entry must name a task of
    /// the user's department, by ID or name; otherwise nothing is stored.
    pub fn submit_reports(&mut self, user: &str, entries: &[ReportEntry], today: NaiveDate) -> Result<Vec<DailyReport>> {
        if entries.len() > self.max_report_entries {
            return Err(AppError::validation(format!(
                "At most {} report entries per submission",
                self.max_report_entries
            )));
        }

        let dept = self
            .department_for(user)
            .ok_or_else(|| AppError::validation(format!("{user} does not belong to any department")))?;

        let mut new_reports = Vec::new();
        for entry in entries {
            let Some(hours) = entry.hours() else {
                continue;
            };
            let task = dept.find_task(&entry.task_id).ok_or_else(|| {
                AppError::validation(format!("Task '{}' is not part of {}", entry.task_id.trim(), dept.name))
            })?;

            new_reports.push(DailyReport {
                id: new_id(),
                user_id: user.to_string(),
                department_id: dept.id.clone(),
                task_id: task.id.clone(),
                description: entry.description.trim().to_string(),
                time_spent: hours,
                date: today,
            });
        }

        if new_reports.is_empty() {
            return Err(AppError::validation("No complete report entries to submit"));
        }

        let mut next = self.reports.clone();
        next.extend(new_reports.iter().cloned());
        self.commit_reports(next)?;

        let skipped = entries.len() - new_reports.len();
        tracing::info!(
            "{} submitted {} report(s), skipped {} incomplete",
            user,
            new_reports.len(),
            skipped
        );
        Ok(new_reports)
    }
}
