use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Employee,
    Manager,
    Hr,
}

impl Role {
    /// Managers and HR see every team member's work, employees only their own.
    pub fn sees_all_tasks(&self) -> bool {
        matches!(self, Role::Manager | Role::Hr)
    }
}
