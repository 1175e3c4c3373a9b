//! Attendance records and derived per-member presence.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// How a staff member is recorded for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    #[default]
    Present,
    Wfh,
    Leave,
}

impl AttendanceStatus {
    pub fn name(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Wfh => "wfh",
            AttendanceStatus::Leave => "leave",
        }
    }
}

/// One user's attendance for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub check_in: NaiveDateTime,
    pub check_out: Option<NaiveDateTime>,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn is_checked_out(&self) -> bool {
        self.check_out.is_some()
    }

    /// Hours between check-in and check-out, if checked out.
    pub fn work_hours(&self) -> Option<f64> {
        self.check_out
            .map(|out| (out - self.check_in).num_minutes() as f64 / 60.0)
    }
}

/// Buttons a staff member may press today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttendanceActions {
    pub check_in: bool,
    pub check_out: bool,
    pub wfh: bool,
}

impl AttendanceActions {
    /// Derive enabled actions from today's record.
    pub fn for_record(today: Option<&AttendanceRecord>) -> Self {
        match today {
            None => Self {
                check_in: true,
                check_out: false,
                wfh: true,
            },
            Some(record) if !record.is_checked_out() => Self {
                check_in: false,
                check_out: true,
                wfh: false,
            },
            Some(_) => Self::default(),
        }
    }
}

/// Display state of a department member, highest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberPresence {
    OnLeave,
    Wfh,
    Present,
    Absent,
}

impl MemberPresence {
    pub fn label(&self) -> &'static str {
        match self {
            MemberPresence::OnLeave => "On Leave",
            MemberPresence::Wfh => "WFH",
            MemberPresence::Present => "Present",
            MemberPresence::Absent => "Absent",
        }
    }

    /// Resolve presence with precedence on-leave > wfh > present > absent.
    pub fn resolve(on_approved_leave: bool, today: Option<&AttendanceRecord>) -> Self {
        if on_approved_leave {
            return MemberPresence::OnLeave;
        }
        match today.map(|r| r.status) {
            Some(AttendanceStatus::Leave) => MemberPresence::OnLeave,
            Some(AttendanceStatus::Wfh) => MemberPresence::Wfh,
            Some(AttendanceStatus::Present) => MemberPresence::Present,
            None => MemberPresence::Absent,
        }
    }
}
