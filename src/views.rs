//! Read-only views derived from the collections.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

use crate::models::{
    AttendanceRecord, DailyReport, Department, Holiday, LeaveRequest, LeaveStatus, MemberPresence,
};

pub const UNKNOWN_DEPARTMENT: &str = "Unknown Department";
pub const UNKNOWN_TASK: &str = "Unknown Task";

/// Sunday..Saturday week containing `day`.
pub fn week_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = u64::from(day.weekday().num_days_from_sunday());
    let start = day - Days::new(offset);
    (start, start + Days::new(6))
}

/// Reports in the week containing `day`, newest first, optionally for one staff member.
pub fn weekly_reports<'a>(reports: &'a [DailyReport], day: NaiveDate, staff: Option<&str>) -> Vec<&'a DailyReport> {
    let (start, end) = week_bounds(day);
    let mut rows: Vec<_> = reports
        .iter()
        .filter(|r| staff.is_none_or(|s| r.user_id == s))
        .filter(|r| r.date >= start && r.date <= end)
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

/// A user's own reports in submission order.
pub fn reports_for<'a>(reports: &'a [DailyReport], user: &str) -> Vec<&'a DailyReport> {
    reports.iter().filter(|r| r.user_id == user).collect()
}

/// Every member of every department, sorted and de-duplicated.
pub fn staff_directory(departments: &[Department]) -> Vec<String> {
    let mut staff: Vec<String> = departments.iter().flat_map(|d| d.members.iter().cloned()).collect();
    staff.sort();
    staff.dedup();
    staff
}

pub fn department_name<'a>(departments: &'a [Department], department_id: &str) -> &'a str {
    departments
        .iter()
        .find(|d| d.id == department_id)
        .map(|d| d.name.as_str())
        .unwrap_or(UNKNOWN_DEPARTMENT)
}

pub fn task_name<'a>(departments: &'a [Department], department_id: &str, task_id: &str) -> &'a str {
    departments
        .iter()
        .find(|d| d.id == department_id)
        .and_then(|d| d.task(task_id))
        .map(|t| t.name.as_str())
        .unwrap_or(UNKNOWN_TASK)
}

/// Leave requests still awaiting a decision.
pub fn pending_leave(requests: &[LeaveRequest]) -> Vec<&LeaveRequest> {
    requests.iter().filter(|r| r.status == LeaveStatus::Pending).collect()
}

pub fn leave_for<'a>(requests: &'a [LeaveRequest], user: &str) -> Vec<&'a LeaveRequest> {
    requests.iter().filter(|r| r.user_id == user).collect()
}

/// Whether `user` has approved leave covering `day`.
pub fn is_on_leave(requests: &[LeaveRequest], user: &str, day: NaiveDate) -> bool {
    requests.iter().any(|r| r.user_id == user && r.is_active_on(day))
}

/// One row of the department status board.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberStatus {
    pub member: String,
    pub is_manager: bool,
    pub presence: MemberPresence,
    pub check_in: Option<NaiveDateTime>,
    pub check_out: Option<NaiveDateTime>,
}

/// Today's presence of every member of `department`.
pub fn department_status(
    department: &Department,
    attendance: &[AttendanceRecord],
    leave: &[LeaveRequest],
    today: NaiveDate,
) -> Vec<MemberStatus> {
    department
        .members
        .iter()
        .map(|member| {
            let record = attendance.iter().find(|r| r.user_id == *member && r.date == today);
            MemberStatus {
                member: member.clone(),
                is_manager: department.is_manager(member),
                presence: MemberPresence::resolve(is_on_leave(leave, member, today), record),
                check_in: record.map(|r| r.check_in),
                check_out: record.and_then(|r| r.check_out),
            }
        })
        .collect()
}

/// Holidays on or after `today`, soonest first.
pub fn upcoming_holidays(holidays: &[Holiday], today: NaiveDate) -> Vec<&Holiday> {
    let mut upcoming: Vec<_> = holidays.iter().filter(|h| h.date >= today).collect();
    upcoming.sort_by_key(|h| h.date);
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceStatus, Task};

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    fn report(user: &str, day: NaiveDate) -> DailyReport {
        DailyReport {
            id: format!("{user}-{day}"),
            user_id: user.to_string(),
            department_id: "d1".to_string(),
            task_id: "t1".to_string(),
            description: "work".to_string(),
            time_spent: 1.0,
            date: day,
        }
    }

    fn department() -> Department {
        Department {
            id: "d1".to_string(),
            name: "Engineering".to_string(),
            tasks: vec![Task {
                id: "t1".to_string(),
                name: "Code Review".to_string(),
            }],
            members: vec!["alice".to_string(), "bob".to_string(), "carol".to_string(), "dave".to_string()],
            manager: Some("alice".to_string()),
        }
    }

    #[test]
    fn test_week_bounds_start_on_sunday() {
        // 2026-10-16 is a Friday
        assert_eq!(week_bounds(date(10, 16)), (date(10, 11), date(10, 17)));
        assert_eq!(week_bounds(date(10, 11)), (date(10, 11), date(10, 17)));
        assert_eq!(week_bounds(date(10, 17)), (date(10, 11), date(10, 17)));
    }

    #[test]
    fn test_weekly_reports_filter_and_order() {
        let reports = vec![
            report("alice", date(10, 12)),
            report("bob", date(10, 15)),
            report("alice", date(10, 16)),
            report("alice", date(10, 18)),
            report("alice", date(10, 10)),
        ];

        let all = weekly_reports(&reports, date(10, 14), None);
        let days: Vec<_> = all.iter().map(|r| r.date).collect();
        assert_eq!(days, [date(10, 16), date(10, 15), date(10, 12)]);

        let alice = weekly_reports(&reports, date(10, 14), Some("alice"));
        assert_eq!(alice.len(), 2);
        assert!(alice.iter().all(|r| r.user_id == "alice"));
    }

    #[test]
    fn test_staff_directory_sorted_unique() {
        let mut other = department();
        other.id = "d2".to_string();
        other.members = vec!["zoe".to_string(), "bob".to_string()];

        assert_eq!(
            staff_directory(&[department(), other]),
            ["alice", "bob", "carol", "dave", "zoe"]
        );
    }

    #[test]
    fn test_name_lookups() {
        let depts = [department()];
        assert_eq!(department_name(&depts, "d1"), "Engineering");
        assert_eq!(department_name(&depts, "gone"), UNKNOWN_DEPARTMENT);
        assert_eq!(task_name(&depts, "d1", "t1"), "Code Review");
        assert_eq!(task_name(&depts, "d1", "t9"), UNKNOWN_TASK);
    }

    #[test]
    fn test_department_status_precedence() {
        let today = date(10, 16);
        let at = |h| today.and_hms_opt(h, 0, 0).unwrap();
        let attendance = vec![
            AttendanceRecord {
                id: "a1".to_string(),
                user_id: "alice".to_string(),
                date: today,
                check_in: at(9),
                check_out: None,
                status: AttendanceStatus::Wfh,
            },
            AttendanceRecord {
                id: "a2".to_string(),
                user_id: "bob".to_string(),
                date: today,
                check_in: at(8),
                check_out: Some(at(17)),
                status: AttendanceStatus::Present,
            },
            AttendanceRecord {
                id: "a3".to_string(),
                user_id: "carol".to_string(),
                date: today,
                check_in: at(9),
                check_out: None,
                status: AttendanceStatus::Present,
            },
        ];
        let leave = vec![LeaveRequest {
            id: "l1".to_string(),
            user_id: "carol".to_string(),
            start_date: date(10, 15),
            end_date: date(10, 17),
            reason: "trip".to_string(),
            status: LeaveStatus::Approved,
        }];

        let rows = department_status(&department(), &attendance, &leave, today);
        let presence: Vec<_> = rows.iter().map(|r| r.presence).collect();
        assert_eq!(
            presence,
            [
                MemberPresence::Wfh,
                MemberPresence::Present,
                MemberPresence::OnLeave,
                MemberPresence::Absent
            ]
        );
        assert!(rows[0].is_manager);
        assert_eq!(rows[1].check_out, Some(at(17)));
        assert!(rows[3].check_in.is_none());
    }

    #[test]
    fn test_pending_leave_not_counted_as_on_leave() {
        let leave = vec![LeaveRequest {
            id: "l1".to_string(),
            user_id: "bob".to_string(),
            start_date: date(10, 16),
            end_date: date(10, 16),
            reason: "dentist".to_string(),
            status: LeaveStatus::Pending,
        }];
        assert!(!is_on_leave(&leave, "bob", date(10, 16)));
        assert_eq!(pending_leave(&leave).len(), 1);
        assert_eq!(leave_for(&leave, "bob").len(), 1);
    }

    #[test]
    fn test_upcoming_holidays() {
        let holiday = |name: &str, day| Holiday {
            id: name.to_string(),
            name: name.to_string(),
            date: day,
            description: String::new(),
        };
        let holidays = vec![
            holiday("Christmas", date(12, 25)),
            holiday("Past", date(1, 1)),
            holiday("Today", date(10, 16)),
            holiday("Halloween", date(10, 31)),
        ];

        let names: Vec<_> = upcoming_holidays(&holidays, date(10, 16))
            .iter()
            .map(|h| h.name.as_str())
            .collect();
        assert_eq!(names, ["Today", "Halloween", "Christmas"]);
    }
}
