//! Data models for departments, reports, leave, holidays, and attendance.

pub mod attendance;
pub mod department;
pub mod holiday;
pub mod leave;
pub mod report;

pub use attendance::{AttendanceActions, AttendanceRecord, AttendanceStatus, MemberPresence};
pub use department::{CreateDepartment, Department, Task, UpdateDepartment};
pub use holiday::{CreateHoliday, Holiday};
pub use leave::{CreateLeaveRequest, LeaveDecision, LeaveRequest, LeaveStatus};
pub use report::{DailyReport, ReportEntry};
