//! Excel export functionality.

use crate::models::{DailyReport, Department};
use crate::views::{department_name, task_name};
use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet, XlsxError};
use std::path::Path;

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin)
}

/// Write the header row with column widths, then freeze it.
fn write_headers(worksheet: &mut Worksheet, headers: &[(&str, f64)]) -> Result<(), XlsxError> {
    let format = header_format();
    for (col, (header, width)) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &format)?;
        worksheet.set_column_width(col as u16, *width)?;
    }
    worksheet.set_freeze_panes(1, 0)?;
    Ok(())
}

/// Export the weekly report view to an Excel file.
pub fn export_reports_to_excel(
    reports: &[&DailyReport],
    departments: &[Department],
    path: &Path,
) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Staff Reports")?;

    let hours_format = Format::new().set_num_format("0.00");

    write_headers(
        worksheet,
        &[
            ("Date", 12.0),
            ("Staff Member", 20.0),
            ("Department", 25.0),
            ("Task", 25.0),
            ("Description", 50.0),
            ("Time Spent (hrs)", 16.0),
        ],
    )?;

    for (idx, report) in reports.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_string(row, 0, report.date.format("%Y-%m-%d").to_string())?;
        worksheet.write_string(row, 1, &report.user_id)?;
        worksheet.write_string(row, 2, department_name(departments, &report.department_id))?;
        worksheet.write_string(row, 3, task_name(departments, &report.department_id, &report.task_id))?;
        worksheet.write_string(row, 4, &report.description)?;
        worksheet.write_number_with_format(row, 5, report.time_spent, &hours_format)?;
    }

    if !reports.is_empty() {
        let last_row = reports.len() as u32;
        worksheet.autofilter(0, 0, last_row, 5)?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Export departments with their manager, members, and tasks, one member per row.
pub fn export_departments_to_excel(departments: &[Department], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Departments")?;

    write_headers(
        worksheet,
        &[("Department", 25.0), ("Member", 20.0), ("Manager", 10.0), ("Tasks", 50.0)],
    )?;

    let mut row = 0u32;
    for dept in departments {
        let tasks = dept.tasks.iter().map(|t| t.name.as_str()).collect::<Vec<_>>().join(", ");

        // Departments without members still get a row
        let members: Vec<Option<&String>> = if dept.members.is_empty() {
            vec![None]
        } else {
            dept.members.iter().map(Some).collect()
        };

        for member in members {
            row += 1;
            worksheet.write_string(row, 0, &dept.name)?;
            worksheet.write_string(row, 1, member.map(String::as_str).unwrap_or(""))?;
            let is_manager = member.is_some_and(|m| dept.is_manager(m));
            worksheet.write_string(row, 2, if is_manager { "Yes" } else { "" })?;
            worksheet.write_string(row, 3, &tasks)?;
        }
    }

    if row > 0 {
        worksheet.autofilter(0, 0, row, 3)?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Generate default filename for export.
pub fn generate_export_filename(prefix: &str) -> String {
    let now = Local::now();
    format!("{prefix}_{ts}.xlsx", ts = now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use chrono::NaiveDate;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("{name}-{}.xlsx", uuid::Uuid::new_v4()))
    }

    fn engineering() -> Department {
        Department {
            id: "d1".to_string(),
            name: "Engineering".to_string(),
            tasks: vec![Task {
                id: "t1".to_string(),
                name: "Code Review".to_string(),
            }],
            members: vec!["alice".to_string()],
            manager: Some("alice".to_string()),
        }
    }

    #[test]
    fn test_generate_export_filename() {
        let name = generate_export_filename("reports");
        assert!(name.starts_with("reports_"));
        assert!(name.ends_with(".xlsx"));
        assert_eq!(name.len(), "reports_".len() + 15 + ".xlsx".len());
    }

    #[test]
    fn test_export_reports_writes_file() {
        let report = DailyReport {
            id: "r1".to_string(),
            user_id: "alice".to_string(),
            department_id: "d1".to_string(),
            task_id: "t1".to_string(),
            description: "reviewed PR".to_string(),
            time_spent: 2.0,
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
        };
        let path = temp_path("reports");

        export_reports_to_excel(&[&report], &[engineering()], &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_export_departments_writes_file() {
        let mut empty = engineering();
        empty.id = "d2".to_string();
        empty.name = "Ops".to_string();
        empty.members.clear();
        empty.manager = None;
        let path = temp_path("departments");

        export_departments_to_excel(&[engineering(), empty], &path).unwrap();
        assert!(path.exists());
        std::fs::remove_file(&path).ok();
    }
}
