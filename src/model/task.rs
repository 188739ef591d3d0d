use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::model::timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    #[strum(to_string = "In Progress", serialize = "in-progress", serialize = "InProgress")]
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    #[serde(serialize_with = "timestamp::serialize")]
    pub deadline: DateTime<Utc>,
    pub priority: Priority,
    pub status: TaskStatus,
    pub assigned_to: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
}

/// Payload for `add_task`. Priority and status fall back to Medium / Pending.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub deadline: DateTime<Utc>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    pub assigned_to: u64,
    #[serde(default)]
    pub project_id: Option<u64>,
}

impl NewTask {
    pub fn into_task(self, id: u64) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            deadline: timestamp::to_millis(self.deadline),
            priority: self.priority.unwrap_or(Priority::Medium),
            status: self.status.unwrap_or(TaskStatus::Pending),
            assigned_to: self.assigned_to,
            project_id: self.project_id,
        }
    }
}
