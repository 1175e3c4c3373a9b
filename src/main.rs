//! Workforce Desk - internal HR desk for attendance, daily reports, and leave.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use workforce_desk as app;

use app::auth::{self, Role, Session};
use app::config::{AppConfig, ConfigLoadResult, LoggingConfig};
use app::models::{CreateDepartment, CreateHoliday, CreateLeaveRequest, ReportEntry, UpdateDepartment};
use app::store::FileStorage;
use app::{AppError, WorkforceState, export, views};

/// Internal HR desk for attendance, daily reports, and leave.
#[derive(Parser)]
#[command(name = "workforce-desk", version)]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Explicit config file path
    #[arg(long, conflicts_with = "dev")]
    config: Option<PathBuf>,

    /// Override the configured data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Staff view: attendance, daily reports, leave
    Staff {
        /// Your username
        #[arg(long)]
        user: String,

        #[command(subcommand)]
        action: StaffCommand,
    },
    /// Admin view: departments, weekly reports, leave approval
    Admin {
        /// Your username
        #[arg(long)]
        user: String,

        /// Admin password
        #[arg(long)]
        password: String,

        #[command(subcommand)]
        action: AdminCommand,
    },
    /// Write a default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum StaffCommand {
    /// Check in at the office
    CheckIn,
    /// Check out for the day
    CheckOut,
    /// Start the day working from home
    Wfh,
    /// Show available actions and your department's status board
    Status,
    /// Submit today's report entries
    Report {
        /// Entry as "TASK|DESCRIPTION|HOURS"; TASK is a task ID or name
        #[arg(long = "entry", value_parser = parse_report_entry, required = true)]
        entries: Vec<ReportEntry>,
    },
    /// Request leave
    Leave {
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
        #[arg(long)]
        reason: String,
    },
    /// List your submitted reports
    MyReports,
    /// List your leave requests
    MyLeave,
    /// List upcoming holidays
    Holidays,
}

#[derive(Subcommand)]
enum AdminCommand {
    /// Add a department
    AddDepartment { name: String },
    /// Rename a department
    RenameDepartment {
        #[arg(long)]
        department: String,
        name: String,
    },
    /// Add a task to a department
    AddTask {
        #[arg(long)]
        department: String,
        name: String,
    },
    /// Add a member to a department
    AddMember {
        #[arg(long)]
        department: String,
        member: String,
    },
    /// Assign a department manager; omit MEMBER to clear it
    AssignManager {
        #[arg(long)]
        department: String,
        member: Option<String>,
    },
    /// List departments with tasks and members
    Departments,
    /// List all staff members
    Staff,
    /// Weekly staff reports (Sunday to Saturday)
    Reports {
        /// Any day in the week to show (default: today)
        #[arg(long)]
        week: Option<NaiveDate>,
        /// Only this staff member
        #[arg(long)]
        staff: Option<String>,
        /// Also export to Excel, optionally to the given path
        #[arg(long)]
        export: Option<Option<PathBuf>>,
    },
    /// List leave requests
    Leave {
        /// Only pending requests
        #[arg(long)]
        pending: bool,
    },
    /// Approve a pending leave request
    Approve { id: String },
    /// Reject a pending leave request
    Reject { id: String },
    /// Add a holiday
    AddHoliday {
        #[arg(long)]
        name: String,
        #[arg(long)]
        date: NaiveDate,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List all holidays
    Holidays,
    /// Export the department roster to Excel
    ExportDepartments { path: Option<PathBuf> },
    /// Show record counts
    Counts,
}

/// Signed-in view selected on the command line.
enum View {
    Staff(StaffCommand),
    Admin(String, AdminCommand),
}

/// Parse "TASK|DESCRIPTION|HOURS" into a report entry.
fn parse_report_entry(raw: &str) -> Result<ReportEntry, String> {
    let mut parts = raw.splitn(3, '|');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(task), Some(description), Some(hours)) => Ok(ReportEntry::new(task, description, hours)),
        _ => Err(format!("expected TASK|DESCRIPTION|HOURS, got '{raw}'")),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = if cli.dev {
        PathBuf::from("config.toml")
    } else {
        cli.config.clone().unwrap_or_else(AppConfig::default_path)
    };

    let (user, action) = match cli.command {
        Command::InitConfig { force } => return init_config(&config_path, cli.data_dir, force),
        Command::Staff { user, action } => (user, View::Staff(action)),
        Command::Admin { user, password, action } => (user, View::Admin(password, action)),
    };

    let load_result = AppConfig::try_load(&config_path);
    let logging = match &load_result {
        ConfigLoadResult::Loaded(config) => config.logging.clone(),
        _ => LoggingConfig::default(),
    };
    let _guard = init_logging(&logging);

    tracing::debug!("Config path: {:?}", config_path);
    let mut config = match load_result {
        ConfigLoadResult::Loaded(config) => config,
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, using defaults");
            AppConfig::default()
        }
        ConfigLoadResult::Invalid(e) => bail!("Invalid config {}: {e}", config_path.display()),
    };
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = dir;
    }

    let storage = FileStorage::open(&config.storage.data_dir)
        .with_context(|| format!("opening data directory {}", config.storage.data_dir.display()))?;
    tracing::debug!("Data directory: {:?}", storage.dir());
    let mut state = WorkforceState::load(storage)?.with_max_report_entries(config.reports.max_entries);

    match action {
        View::Staff(action) => {
            let session = auth::login(&user, Role::Staff, None, &config.auth.admin_password)?;
            run_staff(&mut state, &session, action)?;
        }
        View::Admin(password, action) => {
            let session = auth::login(&user, Role::Admin, Some(password.as_str()), &config.auth.admin_password)?;
            tracing::info!("{} opened the admin view", session.username);
            run_admin(&mut state, action)?;
        }
    }

    Ok(())
}

/// Initialize tracing to stderr, or to the configured log file.
fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match &config.file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("workforce-desk.log"));
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

fn init_config(path: &Path, data_dir: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    let mut config = AppConfig::default();
    if let Some(dir) = data_dir {
        config.storage.data_dir = dir;
    }
    config.save(path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn run_staff(state: &mut WorkforceState<FileStorage>, session: &Session, action: StaffCommand) -> app::Result<()> {
    let user = session.username.as_str();
    let now = Local::now().naive_local();
    let today = now.date();

    match action {
        StaffCommand::CheckIn => {
            let record = state.check_in(user, now)?;
            println!("Checked in at {}", record.check_in.format("%H:%M:%S"));
        }
        StaffCommand::CheckOut => {
            let record = state.check_out(user, now)?;
            let hours = record.work_hours().unwrap_or_default();
            println!("Checked out at {} ({hours:.2} h)", now.format("%H:%M:%S"));
        }
        StaffCommand::Wfh => {
            let record = state.work_from_home(user, now)?;
            println!("Working from home since {}", record.check_in.format("%H:%M:%S"));
        }
        StaffCommand::Status => {
            let actions = state.attendance_actions(user, today);
            println!(
                "Today {today}: check-in {}, check-out {}, WFH {}",
                enabled(actions.check_in),
                enabled(actions.check_out),
                enabled(actions.wfh)
            );

            let Some(dept) = state.department_for(user) else {
                println!("You are not a member of any department.");
                return Ok(());
            };
            println!("\n{} status:", dept.name);
            for row in views::department_status(dept, state.attendance(), state.leave_requests(), today) {
                let manager = if row.is_manager { " (Manager)" } else { "" };
                let mut line = format!("  {}{manager}: {}", row.member, row.presence.label());
                if let Some(check_in) = row.check_in {
                    line.push_str(&format!("  Check In: {}", check_in.format("%H:%M:%S")));
                }
                if let Some(check_out) = row.check_out {
                    line.push_str(&format!("  Check Out: {}", check_out.format("%H:%M:%S")));
                }
                println!("{line}");
            }
        }
        StaffCommand::Report { entries } => {
            let created = state.submit_reports(user, &entries, today)?;
            println!("Submitted {} report(s) for {today}", created.len());
        }
        StaffCommand::Leave { from, to, reason } => {
            let request = state.request_leave(
                user,
                CreateLeaveRequest {
                    start_date: from,
                    end_date: to,
                    reason,
                },
            )?;
            println!("Leave request {} filed ({})", request.id, request.status.name());
        }
        StaffCommand::MyReports => {
            let departments = state.departments();
            for report in views::reports_for(state.reports(), user) {
                println!(
                    "{}  {:<20} {:>5.2} h  {}",
                    report.date,
                    views::task_name(departments, &report.department_id, &report.task_id),
                    report.time_spent,
                    report.description
                );
            }
        }
        StaffCommand::MyLeave => {
            for request in views::leave_for(state.leave_requests(), user) {
                println!(
                    "{} to {}  {:<8}  {}",
                    request.start_date,
                    request.end_date,
                    request.status.name(),
                    request.reason
                );
            }
        }
        StaffCommand::Holidays => {
            for holiday in views::upcoming_holidays(state.holidays(), today) {
                println!("{}  {}  {}", holiday.date.format("%B %d, %Y"), holiday.name, holiday.description);
            }
        }
    }

    Ok(())
}

fn enabled(on: bool) -> &'static str {
    if on { "enabled" } else { "disabled" }
}

fn department_id(state: &WorkforceState<FileStorage>, id_or_name: &str) -> app::Result<String> {
    state
        .resolve_department(id_or_name)
        .map(|d| d.id.clone())
        .ok_or_else(|| AppError::not_found(format!("department {id_or_name}")))
}

fn run_admin(state: &mut WorkforceState<FileStorage>, action: AdminCommand) -> app::Result<()> {
    let today = Local::now().date_naive();

    match action {
        AdminCommand::AddDepartment { name } => {
            let dept = state.add_department(CreateDepartment { name })?;
            println!("Added department {} ({})", dept.name, dept.id);
        }
        AdminCommand::RenameDepartment { department, name } => {
            let id = department_id(state, &department)?;
            let dept = state.update_department(&id, UpdateDepartment { name: Some(name) })?;
            println!("Renamed department to {}", dept.name);
        }
        AdminCommand::AddTask { department, name } => {
            let id = department_id(state, &department)?;
            let task = state.add_task(&id, &name)?;
            println!("Added task {} ({})", task.name, task.id);
        }
        AdminCommand::AddMember { department, member } => {
            let id = department_id(state, &department)?;
            state.add_member(&id, &member)?;
            println!("Added {} to {department}", member.trim());
        }
        AdminCommand::AssignManager { department, member } => {
            let id = department_id(state, &department)?;
            state.assign_manager(&id, member.as_deref())?;
            match member {
                Some(member) => println!("{member} now manages {department}"),
                None => println!("Cleared manager of {department}"),
            }
        }
        AdminCommand::Departments => {
            for dept in state.departments() {
                println!("{} ({})", dept.name, dept.id);
                println!("  Manager: {}", dept.manager.as_deref().unwrap_or("-"));
                for task in &dept.tasks {
                    println!("  Task: {} ({})", task.name, task.id);
                }
                for member in &dept.members {
                    println!("  Member: {member}");
                }
            }
        }
        AdminCommand::Staff => {
            for member in views::staff_directory(state.departments()) {
                println!("{member}");
            }
        }
        AdminCommand::Reports { week, staff, export: export_to } => {
            let day = week.unwrap_or(today);
            let (start, end) = views::week_bounds(day);
            let rows = views::weekly_reports(state.reports(), day, staff.as_deref());
            let departments = state.departments();

            println!("Week {start} to {end}: {} report(s)", rows.len());
            for report in &rows {
                println!(
                    "{}  {:<12} {:<20} {:<20} {:>5.2} h  {}",
                    report.date.format("%b %d, %Y"),
                    report.user_id,
                    views::department_name(departments, &report.department_id),
                    views::task_name(departments, &report.department_id, &report.task_id),
                    report.time_spent,
                    report.description
                );
            }

            if let Some(path) = export_to {
                let path = path.unwrap_or_else(|| PathBuf::from(export::generate_export_filename("staff_reports")));
                export::export_reports_to_excel(&rows, departments, &path)?;
                println!("Exported to {}", path.display());
            }
        }
        AdminCommand::Leave { pending } => {
            let requests = if pending {
                views::pending_leave(state.leave_requests())
            } else {
                state.leave_requests().iter().collect()
            };
            for request in requests {
                println!(
                    "{}  {:<12} {} to {}  {:<8}  {}",
                    request.id,
                    request.user_id,
                    request.start_date,
                    request.end_date,
                    request.status.name(),
                    request.reason
                );
            }
        }
        AdminCommand::Approve { id } => {
            let request = state.approve_leave(&id)?;
            println!("Approved leave for {}", request.user_id);
        }
        AdminCommand::Reject { id } => {
            let request = state.reject_leave(&id)?;
            println!("Rejected leave for {}", request.user_id);
        }
        AdminCommand::AddHoliday { name, date, description } => {
            let holiday = state.add_holiday(CreateHoliday { name, date, description })?;
            println!("Added holiday {} on {}", holiday.name, holiday.date);
        }
        AdminCommand::Holidays => {
            let mut holidays: Vec<_> = state.holidays().iter().collect();
            holidays.sort_by_key(|h| h.date);
            for holiday in holidays {
                println!("{}  {}  {}", holiday.date, holiday.name, holiday.description);
            }
        }
        AdminCommand::ExportDepartments { path } => {
            let path = path.unwrap_or_else(|| PathBuf::from(export::generate_export_filename("departments")));
            export::export_departments_to_excel(state.departments(), &path)?;
            println!("Exported to {}", path.display());
        }
        AdminCommand::Counts => {
            let counts = state.counts();
            println!(
                "{} departments, {} reports, {} leave requests, {} holidays, {} attendance records",
                counts.departments, counts.reports, counts.leave_requests, counts.holidays, counts.attendance
            );
        }
    }

    Ok(())
}
