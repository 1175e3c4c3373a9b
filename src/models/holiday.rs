//! Company holidays.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

/// DTO for adding a holiday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHoliday {
    pub name: String,
    pub date: NaiveDate,
    pub description: String,
}

/// Holidays written on first run when nothing is stored yet.
pub fn default_holidays() -> Vec<Holiday> {
    let seeds = [
        ("New Year's Day", 1, 1, "New Year's Day Celebration"),
        ("Independence Day", 7, 4, "Independence Day Celebration"),
    ];

    seeds
        .into_iter()
        .filter_map(|(name, month, day, description)| {
            NaiveDate::from_ymd_opt(2024, month, day).map(|date| Holiday {
                id: uuid::Uuid::new_v4().to_string(),
                name: name.to_string(),
                date,
                description: description.to_string(),
            })
        })
        .collect()
}
