//! Workforce state: the five record collections and their mutations.
//!
//! Every mutation rewrites the affected collection in storage before
//! returning. There is no locking; the last writer wins.

mod attendance;
mod departments;
mod holidays;
mod leave;
mod reports;

use crate::config::DEFAULT_MAX_REPORT_ENTRIES;
use crate::error::Result;
use crate::models::holiday::default_holidays;
use crate::models::{AttendanceRecord, DailyReport, Department, Holiday, LeaveRequest};
use crate::store::{Storage, collection, keys};

/// Process-wide HR state backed by a [`Storage`].
pub struct WorkforceState<S: Storage> {
    storage: S,
    departments: Vec<Department>,
    reports: Vec<DailyReport>,
    leave_requests: Vec<LeaveRequest>,
    holidays: Vec<Holiday>,
    attendance: Vec<AttendanceRecord>,
    max_report_entries: usize,
}

/// Record counts for all collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionCounts {
    pub departments: usize,
    pub reports: usize,
    pub leave_requests: usize,
    pub holidays: usize,
    pub attendance: usize,
}

impl<S: Storage> WorkforceState<S> {
    /// Load every collection from storage.
    ///
    /// Holidays are seeded and written back when none were stored yet.
    pub fn load(storage: S) -> Result<Self> {
        let departments = collection::load_or(&storage, keys::DEPARTMENTS, Vec::new)?;
        let reports = collection::load_or(&storage, keys::REPORTS, Vec::new)?;
        let leave_requests = collection::load_or(&storage, keys::LEAVE_REQUESTS, Vec::new)?;
        let attendance = collection::load_or(&storage, keys::ATTENDANCE, Vec::new)?;

        let holidays = match collection::load(&storage, keys::HOLIDAYS)? {
            Some(holidays) => holidays,
            None => {
                let seeded = default_holidays();
                collection::save(&storage, keys::HOLIDAYS, &seeded)?;
                tracing::info!("Seeded {} default holidays", seeded.len());
                seeded
            }
        };

        let state = Self {
            storage,
            departments,
            reports,
            leave_requests,
            holidays,
            attendance,
            max_report_entries: DEFAULT_MAX_REPORT_ENTRIES,
        };

        let counts = state.counts();
        tracing::debug!(
            "Loaded {} departments, {} reports, {} leave requests, {} holidays, {} attendance records",
            counts.departments,
            counts.reports,
            counts.leave_requests,
            counts.holidays,
            counts.attendance
        );

        Ok(state)
    }

    /// Override how many report entries one submission may carry.
    pub fn with_max_report_entries(mut self, max: usize) -> Self {
        self.max_report_entries = max;
        self
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn reports(&self) -> &[DailyReport] {
        &self.reports
    }

    pub fn leave_requests(&self) -> &[LeaveRequest] {
        &self.leave_requests
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn attendance(&self) -> &[AttendanceRecord] {
        &self.attendance
    }

    /// Get record counts for all collections.
    pub fn counts(&self) -> CollectionCounts {
        CollectionCounts {
            departments: self.departments.len(),
            reports: self.reports.len(),
            leave_requests: self.leave_requests.len(),
            holidays: self.holidays.len(),
            attendance: self.attendance.len(),
        }
    }

    // Each commit saves the candidate collection and only then replaces the
    // in-memory copy, so a failed write leaves state unchanged.

    fn commit_departments(&mut self, next: Vec<Department>) -> Result<()> {
        collection::save(&self.storage, keys::DEPARTMENTS, &next)?;
        self.departments = next;
        Ok(())
    }

    fn commit_reports(&mut self, next: Vec<DailyReport>) -> Result<()> {
        collection::save(&self.storage, keys::REPORTS, &next)?;
        self.reports = next;
        Ok(())
    }

    fn commit_leave_requests(&mut self, next: Vec<LeaveRequest>) -> Result<()> {
        collection::save(&self.storage, keys::LEAVE_REQUESTS, &next)?;
        self.leave_requests = next;
        Ok(())
    }

    fn commit_holidays(&mut self, next: Vec<Holiday>) -> Result<()> {
        collection::save(&self.storage, keys::HOLIDAYS, &next)?;
        self.holidays = next;
        Ok(())
    }

    fn commit_attendance(&mut self, next: Vec<AttendanceRecord>) -> Result<()> {
        collection::save(&self.storage, keys::ATTENDANCE, &next)?;
        self.attendance = next;
        Ok(())
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
