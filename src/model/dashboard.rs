use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: u64,
    pub title: String,
    pub date: NaiveDate,
    pub content: String,
    pub preview: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: u64,
    pub name: String,
    pub position: String,
    pub status: String,
    pub return_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    pub time: String,
}

/// Headline numbers on the HR dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_employees: usize,
    pub new_hires: u32,
    pub attendance_rate: String,
    pub managers: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub tasks_completed: usize,
    pub tasks_in_progress: usize,
    pub projects_contributed: u32,
    pub average_task_completion: f64,
    pub on_time_completion_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    /// Mean review rating to one decimal, 0 without reviews.
    pub avg_performance: f64,
    pub task_completion_rate: u32,
    pub on_time_attendance: u32,
    pub total_employees: usize,
    /// Fixed figures; not derived from employee records.
    pub department_breakdown: BTreeMap<String, u32>,
}
