use tracing::{info, instrument};

use super::{MockApi, TIME_HISTORY, TIME_STATUS, USERS, hold};
use crate::error::{ServiceError, ServiceResult};
use crate::model::attendance::{
    AttendanceStatus, ClockAction, ClockState, ClockStatus, TimeHistoryRecord,
};

impl MockApi {
    #[instrument(name = "get_time_status", skip_all)]
    pub async fn get_time_status(&self) -> ServiceResult<ClockStatus> {
        self.latency.wait(300).await;
        Ok(TIME_STATUS.load(self.store())?)
    }

    /// Toggles the clock. Clocking in while in, or out while out, is refused.
    /// Clocking out prepends the finished shift to the time history.
    #[instrument(name = "clock_in_out", skip(self))]
    pub async fn clock_in_out(&self, action: ClockAction) -> ServiceResult<ClockStatus> {
        self.latency.wait(500).await;
        let _guard = hold(&self.locks.time);
        let current = TIME_STATUS.load(self.store())?;
        let now = self.clock.now();

        let next = match (action, current.status) {
            (ClockAction::In, ClockState::In) | (ClockAction::Out, ClockState::Out) => {
                info!(state = %current.status, "clock already in requested state");
                return Err(ServiceError::ClockTransition {
                    from: current.status,
                });
            }
            (ClockAction::In, ClockState::Out) => ClockStatus {
                status: ClockState::In,
                time_in: Some(now),
                time_out: None,
            },
            (ClockAction::Out, ClockState::In) => {
                let time_in = current.time_in.unwrap_or(now);
                let mut history = self.load(&TIME_HISTORY)?;
                history.insert(0, TimeHistoryRecord::from_shift(time_in, now));
                self.save(&TIME_HISTORY, &history)?;

                ClockStatus {
                    status: ClockState::Out,
                    time_in: Some(time_in),
                    time_out: Some(now),
                }
            }
        };

        TIME_STATUS.save(self.store(), &next)?;
        info!(state = %next.status, "clock toggled");
        Ok(next)
    }

    #[instrument(name = "get_time_history", skip_all)]
    pub async fn get_time_history(&self) -> ServiceResult<Vec<TimeHistoryRecord>> {
        self.latency.wait(300).await;
        self.load(&TIME_HISTORY)
    }

    /// Time history for the HR view. Records written by the shared clock
    /// carry no user; they are attributed to the first user in the
    /// directory, and a missing status reads as on time.
    #[instrument(name = "get_all_attendance", skip_all)]
    pub async fn get_all_attendance(&self) -> ServiceResult<Vec<TimeHistoryRecord>> {
        self.latency.wait(500).await;
        let users = self.load(&USERS)?;
        let history = self.load(&TIME_HISTORY)?;
        let fallback = users.first();

        Ok(history
            .into_iter()
            .map(|mut record| {
                if record.user_id.is_none() || record.name.is_none() {
                    if let Some(user) = fallback {
                        record.user_id = Some(user.id);
                        record.name = Some(user.name.clone());
                    }
                    record.status.get_or_insert(AttendanceStatus::OnTime);
                }
                record
            })
            .collect())
    }
}
