use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The demo user leave requests are filed for when no user is given.
pub const DEFAULT_LEAVE_USER: u64 = 1;
pub const DEFAULT_LEAVE_REASON: &str = "Requested via Dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum LeaveType {
    Annual,
    Sick,
    Personal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

/// A manager's verdict on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum LeaveDecision {
    Approved,
    Rejected,
}

impl From<LeaveDecision> for LeaveStatus {
    fn from(decision: LeaveDecision) -> Self {
        match decision {
            LeaveDecision::Approved => LeaveStatus::Approved,
            LeaveDecision::Rejected => LeaveStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LeaveRequest {
    pub id: u64,
    pub user_id: u64,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
    pub reason: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeave {
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl NewLeave {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.start_date > self.end_date {
            return Err("startDate cannot be after endDate");
        }
        Ok(())
    }

    /// New requests always start out pending.
    pub fn into_request(self, id: u64) -> LeaveRequest {
        LeaveRequest {
            id,
            user_id: self.user_id.unwrap_or(DEFAULT_LEAVE_USER),
            leave_type: self.leave_type,
            start_date: self.start_date,
            end_date: self.end_date,
            status: LeaveStatus::Pending,
            reason: self
                .reason
                .unwrap_or_else(|| DEFAULT_LEAVE_REASON.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    pub annual: u32,
    pub sick: u32,
    pub personal: u32,
}

/// Leave request joined with the requesting employee, for the manager view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerLeave {
    #[serde(flatten)]
    pub leave: LeaveRequest,
    pub employee_name: String,
    pub employee_position: String,
}
