//! Holiday calendar.

use super::{WorkforceState, new_id};
use crate::error::{AppError, Result};
use crate::models::{CreateHoliday, Holiday};
use crate::store::Storage;

impl<S: Storage> WorkforceState<S> {
    /// Add a holiday to the calendar.
    pub fn add_holiday(&mut self, data: CreateHoliday) -> Result<&Holiday> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Holiday name cannot be empty"));
        }

        let mut next = self.holidays.clone();
        next.push(Holiday {
            id: new_id(),
            name: name.to_string(),
            date: data.date,
            description: data.description.trim().to_string(),
        });
        self.commit_holidays(next)?;

        let holiday = &self.holidays[self.holidays.len() - 1];
        tracing::info!("Added holiday '{}' on {}", holiday.name, holiday.date);
        Ok(holiday)
    }
}
