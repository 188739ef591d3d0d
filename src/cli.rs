use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::{Value, json};

use staffdesk::{
    MockApi, ServiceError, ServiceResult,
    model::{
        attendance::ClockAction,
        employee::NewStaffMember,
        leave_request::{LeaveDecision, LeaveType, NewLeave},
        performance_review::NewPerformanceReview,
        project::{NewProject, ProjectStatus},
        task::{NewTask, Priority, TaskStatus},
    },
};

/// Employee dashboard data layer, driven from the command line.
#[derive(Debug, Parser)]
#[command(name = "staffdesk", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct StaffArgs {
    pub username: String,
    pub password: String,
    pub name: String,
    pub position: String,
}

impl From<StaffArgs> for NewStaffMember {
    fn from(args: StaffArgs) -> Self {
        NewStaffMember {
            username: args.username,
            password: args.password,
            name: args.name,
            position: args.position,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and print the session token
    Login { username: String, password: String },
    /// Resolve a session token
    Me { token: String },
    Profile { token: String },

    /// Tasks visible to the token's owner
    Tasks { token: String },
    ManagerTasks,
    TaskStatus { id: u64, status: TaskStatus },
    AddTask {
        title: String,
        #[arg(long, value_parser = parse_deadline)]
        deadline: DateTime<Utc>,
        #[arg(long)]
        assigned_to: u64,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        priority: Option<Priority>,
        #[arg(long)]
        status: Option<TaskStatus>,
        #[arg(long)]
        project_id: Option<u64>,
    },
    /// Apply a JSON object of field updates, e.g. '{"title":"New"}'
    UpdateTask { id: u64, updates: Value },
    DeleteTask { id: u64 },

    Projects,
    AddProject {
        name: String,
        #[arg(value_parser = parse_deadline)]
        deadline: DateTime<Utc>,
        #[arg(long, default_value = "not-started")]
        status: ProjectStatus,
    },
    UpdateProject { id: u64, updates: Value },
    DeleteProject { id: u64 },

    LeaveBalance {
        #[arg(default_value_t = 1)]
        user_id: u64,
    },
    LeaveHistory,
    RequestLeave {
        leave_type: LeaveType,
        start: NaiveDate,
        end: NaiveDate,
        #[arg(long)]
        user_id: Option<u64>,
        #[arg(long)]
        reason: Option<String>,
    },
    ManagerLeaves,
    LeaveStatus { id: u64, decision: LeaveDecision },

    TimeStatus,
    /// Clock `in` or `out`
    Clock { action: ClockAction },
    TimeHistory,
    Attendance,

    Reviews,
    AddReview {
        employee_id: u64,
        employee_name: String,
        rating: f64,
        feedback: String,
        reviewer: String,
    },

    Employees,
    Managers,
    ManagerEmployees,
    AddEmployee(StaffArgs),
    AddManager(StaffArgs),
    DeleteUser { id: u64 },
    AssignManager { employee_id: u64, manager_id: u64 },
    Assignments,

    Stats,
    Metrics,
    Deadlines,
    Announcements,
    Team,
    Notifications,
    Report,
}

/// RFC 3339 timestamp, or a bare date taken as midnight UTC.
fn parse_deadline(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| format!("`{value}` is neither an RFC 3339 timestamp nor YYYY-MM-DD"))
}

fn to_json<T: Serialize>(value: T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

pub fn success(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

pub fn failure(err: &ServiceError) -> Value {
    json!({ "success": false, "code": err.code(), "message": err.to_string() })
}

pub async fn run(api: &MockApi, command: Command) -> ServiceResult<Value> {
    let data = match command {
        Command::Login { username, password } => to_json(api.login(&username, &password).await?),
        Command::Me { token } => to_json(api.get_current_user(&token).await?),
        Command::Profile { token } => to_json(api.get_employee_profile(&token).await?),

        Command::Tasks { token } => to_json(api.get_tasks(&token).await?),
        Command::ManagerTasks => to_json(api.get_manager_tasks().await?),
        Command::TaskStatus { id, status } => {
            api.update_task_status(id, status).await?;
            Value::Null
        }
        Command::AddTask {
            title,
            deadline,
            assigned_to,
            description,
            priority,
            status,
            project_id,
        } => to_json(
            api.add_task(NewTask {
                title,
                description,
                deadline,
                priority,
                status,
                assigned_to,
                project_id,
            })
            .await?,
        ),
        Command::UpdateTask { id, updates } => to_json(api.update_task(id, &updates).await?),
        Command::DeleteTask { id } => {
            api.delete_task(id).await?;
            Value::Null
        }

        Command::Projects => to_json(api.get_projects().await?),
        Command::AddProject {
            name,
            deadline,
            status,
        } => to_json(
            api.add_project(NewProject {
                name,
                deadline,
                status,
            })
            .await?,
        ),
        Command::UpdateProject { id, updates } => to_json(api.update_project(id, &updates).await?),
        Command::DeleteProject { id } => {
            api.delete_project(id).await?;
            Value::Null
        }

        Command::LeaveBalance { user_id } => to_json(api.get_leave_balance(user_id).await),
        Command::LeaveHistory => to_json(api.get_leave_history().await?),
        Command::RequestLeave {
            leave_type,
            start,
            end,
            user_id,
            reason,
        } => to_json(
            api.request_leave(NewLeave {
                leave_type,
                start_date: start,
                end_date: end,
                user_id,
                reason,
            })
            .await?,
        ),
        Command::ManagerLeaves => to_json(api.get_manager_leaves().await?),
        Command::LeaveStatus { id, decision } => {
            to_json(api.update_leave_status(id, decision).await?)
        }

        Command::TimeStatus => to_json(api.get_time_status().await?),
        Command::Clock { action } => to_json(api.clock_in_out(action).await?),
        Command::TimeHistory => to_json(api.get_time_history().await?),
        Command::Attendance => to_json(api.get_all_attendance().await?),

        Command::Reviews => to_json(api.get_performance_reviews().await?),
        Command::AddReview {
            employee_id,
            employee_name,
            rating,
            feedback,
            reviewer,
        } => to_json(
            api.add_performance_review(NewPerformanceReview {
                employee_id,
                employee_name,
                rating,
                feedback,
                reviewer,
            })
            .await?,
        ),

        Command::Employees => to_json(api.get_employees().await?),
        Command::Managers => to_json(api.get_managers().await?),
        Command::ManagerEmployees => to_json(api.get_manager_employees().await?),
        Command::AddEmployee(args) => to_json(api.add_employee(args.into()).await?),
        Command::AddManager(args) => to_json(api.add_manager(args.into()).await?),
        Command::DeleteUser { id } => {
            api.delete_user(id).await?;
            Value::Null
        }
        Command::AssignManager {
            employee_id,
            manager_id,
        } => to_json(api.assign_manager(employee_id, manager_id).await?),
        Command::Assignments => to_json(api.get_manager_assignments().await?),

        Command::Stats => to_json(api.get_stats().await?),
        Command::Metrics => to_json(api.get_performance_metrics().await?),
        Command::Deadlines => to_json(api.get_upcoming_deadlines().await?),
        Command::Announcements => to_json(api.get_announcements().await),
        Command::Team => to_json(api.get_team_availability().await),
        Command::Notifications => to_json(api.get_notifications().await),
        Command::Report => to_json(api.get_report_data().await?),
    };
    Ok(data)
}
