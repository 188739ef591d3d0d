use tracing::{info, instrument};

use super::{LEAVES, MockApi, USERS, hold};
use crate::error::{ServiceError, ServiceResult};
use crate::model::leave_request::{
    LeaveBalance, LeaveDecision, LeaveRequest, LeaveStatus, ManagerLeave, NewLeave,
};
use crate::seed;

const UNKNOWN: &str = "Unknown";

impl MockApi {
    /* =========================
    Balances and history
    ========================= */

    /// Remaining days per leave type; `None` for users without an allowance.
    #[instrument(name = "get_leave_balance", skip(self))]
    pub async fn get_leave_balance(&self, user_id: u64) -> Option<LeaveBalance> {
        self.latency.wait(300).await;
        seed::leave_balance(user_id)
    }

    /// All requests, newest first.
    #[instrument(name = "get_leave_history", skip_all)]
    pub async fn get_leave_history(&self) -> ServiceResult<Vec<LeaveRequest>> {
        self.latency.wait(300).await;
        self.load(&LEAVES)
    }

    /* =========================
    Create leave request
    ========================= */
    #[instrument(name = "request_leave", skip_all, fields(leave_type = %new_leave.leave_type))]
    pub async fn request_leave(&self, new_leave: NewLeave) -> ServiceResult<LeaveRequest> {
        self.latency.wait(600).await;
        new_leave
            .validate()
            .map_err(|msg| ServiceError::InvalidInput(msg.into()))?;

        let _guard = hold(&self.locks.leaves);
        let mut leaves = self.load(&LEAVES)?;

        let id = self.allocate_id(&LEAVES, leaves.iter().map(|l| l.id))?;
        let leave = new_leave.into_request(id);
        leaves.insert(0, leave.clone());
        self.save(&LEAVES, &leaves)?;

        info!(leave_id = id, user_id = leave.user_id, "leave request submitted");
        Ok(leave)
    }

    /* =========================
    Manager view and decisions
    ========================= */

    /// Every request joined with the requester's name and position.
    #[instrument(name = "get_manager_leaves", skip_all)]
    pub async fn get_manager_leaves(&self) -> ServiceResult<Vec<ManagerLeave>> {
        self.latency.wait(400).await;
        let users = self.load(&USERS)?;
        let leaves = self.load(&LEAVES)?;

        Ok(leaves
            .into_iter()
            .map(|leave| {
                let user = users.iter().find(|u| u.id == leave.user_id);
                ManagerLeave {
                    employee_name: user.map_or_else(|| UNKNOWN.into(), |u| u.name.clone()),
                    employee_position: user.map_or_else(|| UNKNOWN.into(), |u| u.position.clone()),
                    leave,
                }
            })
            .collect())
    }

    /// Resolves a pending request. Requests already approved or rejected,
    /// and unknown ids, are refused.
    #[instrument(name = "update_leave_status", skip(self))]
    pub async fn update_leave_status(
        &self,
        leave_id: u64,
        decision: LeaveDecision,
    ) -> ServiceResult<LeaveRequest> {
        self.latency.wait(500).await;
        let _guard = hold(&self.locks.leaves);
        let mut leaves = self.load(&LEAVES)?;

        let leave = leaves
            .iter_mut()
            .find(|l| l.id == leave_id && l.status == LeaveStatus::Pending)
            .ok_or_else(|| {
                info!("leave request not found or already processed");
                ServiceError::LeaveNotPending
            })?;
        leave.status = decision.into();
        let updated = leave.clone();
        self.save(&LEAVES, &leaves)?;

        info!(status = %updated.status, "leave request resolved");
        Ok(updated)
    }
}
