use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::model::timestamp;

/// Source of "now" for timestamps and generated ids.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        timestamp::to_millis(Utc::now())
    }
}

/// Settable clock for tests.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        ManualClock {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().expect("manual clock poisoned") = now;
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock().expect("manual clock poisoned");
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("manual clock poisoned")
    }
}

/// Millisecond timestamp id, bumped past the largest id already in use so
/// two records created within the same millisecond never collide. `None`
/// once `u64::MAX` is taken.
pub fn next_id(now: DateTime<Utc>, existing: impl IntoIterator<Item = u64>) -> Option<u64> {
    let stamp = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    let floor = match existing.into_iter().max() {
        Some(max) => max.checked_add(1)?,
        None => 0,
    };
    Some(stamp.max(floor))
}
