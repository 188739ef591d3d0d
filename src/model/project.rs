use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::model::timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ProjectStatus {
    #[serde(rename = "Not Started")]
    #[strum(to_string = "Not Started", serialize = "not-started", serialize = "NotStarted")]
    NotStarted,
    #[serde(rename = "In Progress")]
    #[strum(to_string = "In Progress", serialize = "in-progress", serialize = "InProgress")]
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub id: u64,
    pub name: String,
    #[serde(serialize_with = "timestamp::serialize")]
    pub deadline: DateTime<Utc>,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewProject {
    pub name: String,
    pub deadline: DateTime<Utc>,
    #[serde(default = "default_project_status")]
    pub status: ProjectStatus,
}

fn default_project_status() -> ProjectStatus {
    ProjectStatus::NotStarted
}

impl NewProject {
    pub fn into_project(self, id: u64) -> Project {
        Project {
            id,
            name: self.name,
            deadline: timestamp::to_millis(self.deadline),
            status: self.status,
        }
    }
}
