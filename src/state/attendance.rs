//! Attendance tracker: check-in, check-out, and WFH.

use chrono::{NaiveDate, NaiveDateTime};

use super::{WorkforceState, new_id};
use crate::error::{AppError, Result};
use crate::models::{AttendanceActions, AttendanceRecord, AttendanceStatus};
use crate::store::Storage;

impl<S: Storage> WorkforceState<S> {
    /// The user's record for `day`, if any.
    pub fn attendance_on(&self, user: &str, day: NaiveDate) -> Option<&AttendanceRecord> {
        self.attendance.iter().find(|r| r.user_id == user && r.date == day)
    }

    /// Actions available to `user` on `day`.
    pub fn attendance_actions(&self, user: &str, day: NaiveDate) -> AttendanceActions {
        AttendanceActions::for_record(self.attendance_on(user, day))
    }

    /// Start the day in the office.
    pub fn check_in(&mut self, user: &str, now: NaiveDateTime) -> Result<&AttendanceRecord> {
        self.open_day(user, now, AttendanceStatus::Present)
    }

    /// Start the day working from home.
    pub fn work_from_home(&mut self, user: &str, now: NaiveDateTime) -> Result<&AttendanceRecord> {
        self.open_day(user, now, AttendanceStatus::Wfh)
    }

    fn open_day(&mut self, user: &str, now: NaiveDateTime, status: AttendanceStatus) -> Result<&AttendanceRecord> {
        let today = now.date();
        if !self.attendance_actions(user, today).check_in {
            return Err(AppError::attendance(format!("{user} already checked in on {today}")));
        }

        let mut next = self.attendance.clone();
        next.push(AttendanceRecord {
            id: new_id(),
            user_id: user.to_string(),
            date: today,
            check_in: now,
            check_out: None,
            status,
        });
        self.commit_attendance(next)?;

        tracing::info!("{} checked in ({}) at {}", user, status.name(), now.time());
        Ok(&self.attendance[self.attendance.len() - 1])
    }

    /// Close today's record.
    pub fn check_out(&mut self, user: &str, now: NaiveDateTime) -> Result<&AttendanceRecord> {
        let today = now.date();
        let idx = self
            .attendance
            .iter()
            .position(|r| r.user_id == user && r.date == today)
            .ok_or_else(|| AppError::attendance(format!("{user} has not checked in on {today}")))?;

        if self.attendance[idx].is_checked_out() {
            return Err(AppError::attendance(format!("{user} already checked out on {today}")));
        }

        let mut next = self.attendance.clone();
        next[idx].check_out = Some(now);
        self.commit_attendance(next)?;

        tracing::info!("{} checked out at {}", user, now.time());
        Ok(&self.attendance[idx])
    }
}
