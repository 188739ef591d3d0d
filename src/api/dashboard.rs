use tracing::instrument;

use super::{MockApi, PERFORMANCE_REVIEWS, TASKS, TIME_HISTORY, USERS};
use crate::error::ServiceResult;
use crate::model::{
    attendance::AttendanceStatus,
    dashboard::{Announcement, Notification, PerformanceMetrics, ReportStats, Stats, TeamMember},
    role::Role,
    task::{Task, TaskStatus},
};
use crate::seed;

const NEW_HIRES: u32 = 2;
const ATTENDANCE_RATE: &str = "95%";
const PROJECTS_CONTRIBUTED: u32 = 3;
const AVERAGE_TASK_COMPLETION: f64 = 2.5;
const ON_TIME_COMPLETION_RATE: u32 = 95;

/// Share of `part` in `total` as a whole percentage, 0 for an empty total.
fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}

fn count_status(tasks: &[Task], status: TaskStatus) -> usize {
    tasks.iter().filter(|t| t.status == status).count()
}

impl MockApi {
    #[instrument(name = "get_stats", skip_all)]
    pub async fn get_stats(&self) -> ServiceResult<Stats> {
        self.latency.wait(400).await;
        let users = self.load(&USERS)?;
        let with_role = |role| users.iter().filter(|u| u.role == role).count();

        Ok(Stats {
            total_employees: with_role(Role::Employee),
            new_hires: NEW_HIRES,
            attendance_rate: ATTENDANCE_RATE.to_string(),
            managers: with_role(Role::Manager),
        })
    }

    /// Task counts come from the stored tasks; the other figures are fixed.
    #[instrument(name = "get_performance_metrics", skip_all)]
    pub async fn get_performance_metrics(&self) -> ServiceResult<PerformanceMetrics> {
        self.latency.wait(400).await;
        let tasks = self.load(&TASKS)?;

        Ok(PerformanceMetrics {
            tasks_completed: count_status(&tasks, TaskStatus::Completed),
            tasks_in_progress: count_status(&tasks, TaskStatus::InProgress),
            projects_contributed: PROJECTS_CONTRIBUTED,
            average_task_completion: AVERAGE_TASK_COMPLETION,
            on_time_completion_rate: ON_TIME_COMPLETION_RATE,
        })
    }

    /// Every task not yet completed, in stored order.
    #[instrument(name = "get_upcoming_deadlines", skip_all)]
    pub async fn get_upcoming_deadlines(&self) -> ServiceResult<Vec<Task>> {
        self.latency.wait(300).await;
        Ok(self
            .load(&TASKS)?
            .into_iter()
            .filter(|t| t.status != TaskStatus::Completed)
            .collect())
    }

    pub async fn get_announcements(&self) -> Vec<Announcement> {
        self.latency.wait(300).await;
        seed::announcements()
    }

    pub async fn get_team_availability(&self) -> Vec<TeamMember> {
        self.latency.wait(300).await;
        seed::team_availability()
    }

    pub async fn get_notifications(&self) -> Vec<Notification> {
        self.latency.wait(300).await;
        seed::notifications()
    }

    #[instrument(name = "get_report_data", skip_all)]
    pub async fn get_report_data(&self) -> ServiceResult<ReportStats> {
        self.latency.wait(700).await;
        let users = self.load(&USERS)?;
        let tasks = self.load(&TASKS)?;
        let reviews = self.load(&PERFORMANCE_REVIEWS)?;
        let attendance = self.load(&TIME_HISTORY)?;

        let avg_performance = if reviews.is_empty() {
            0.0
        } else {
            let total: f64 = reviews.iter().map(|r| r.rating).sum();
            (total / reviews.len() as f64 * 10.0).round() / 10.0
        };

        // records without a status count as on time
        let on_time = attendance
            .iter()
            .filter(|a| a.status != Some(AttendanceStatus::Late))
            .count();

        Ok(ReportStats {
            avg_performance,
            task_completion_rate: percent(count_status(&tasks, TaskStatus::Completed), tasks.len()),
            on_time_attendance: percent(on_time, attendance.len()),
            total_employees: users.iter().filter(|u| u.role == Role::Employee).count(),
            department_breakdown: seed::department_breakdown(),
        })
    }
}
