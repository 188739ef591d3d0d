//! The dashboard's service facade.
//!
//! [`MockApi`] exposes one async method per business operation. Each call
//! waits out a fixed artificial latency, then does a synchronous
//! load-mutate-save against the [`Storage`] port, or a pure computation
//! over the current snapshot. Mutations hold the lock of every collection
//! they touch, so concurrent callers are serialized per collection instead
//! of overwriting each other's updates.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, info};

use crate::error::{ServiceError, ServiceResult};
use crate::model::{
    attendance::{ClockStatus, TimeHistoryRecord},
    leave_request::LeaveRequest,
    performance_review::PerformanceReview,
    project::Project,
    task::Task,
    user::User,
};
use crate::seed;
use crate::storage::{Collection, Document, Storage, keys};
use crate::utils::clock::{Clock, next_id};

mod attendance;
mod dashboard;
mod employee;
mod leave_request;
mod performance;
mod project;
mod session;
mod task;

pub const USERS: Collection<User> = Collection::new(keys::USERS, seed::users);
pub const TASKS: Collection<Task> = Collection::new(keys::TASKS, seed::tasks);
pub const LEAVES: Collection<LeaveRequest> = Collection::new(keys::LEAVES, seed::leaves);
pub const TIME_HISTORY: Collection<TimeHistoryRecord> =
    Collection::new(keys::TIME_HISTORY, seed::time_history);
pub const PERFORMANCE_REVIEWS: Collection<PerformanceReview> =
    Collection::new(keys::PERFORMANCE_REVIEWS, seed::performance_reviews);
pub const PROJECTS: Collection<Project> = Collection::new(keys::PROJECTS, seed::projects);
pub const TIME_STATUS: Document<ClockStatus> = Document::new(keys::TIME_STATUS);
/// employee id -> manager id
pub const MANAGER_ASSIGNMENTS: Document<BTreeMap<u64, u64>> =
    Document::new(keys::MANAGER_ASSIGNMENTS);

/// Artificial per-call delay, standing in for a network round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    enabled: bool,
}

impl Latency {
    pub fn simulated() -> Self {
        Latency { enabled: true }
    }

    pub fn none() -> Self {
        Latency { enabled: false }
    }

    pub fn from_flag(enabled: bool) -> Self {
        Latency { enabled }
    }

    async fn wait(&self, millis: u64) {
        if self.enabled {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Latency::simulated()
    }
}

#[derive(Debug, Default)]
struct CollectionLocks {
    users: Mutex<()>,
    tasks: Mutex<()>,
    leaves: Mutex<()>,
    /// clock status and time history change together on clock-out
    time: Mutex<()>,
    reviews: Mutex<()>,
    projects: Mutex<()>,
    assignments: Mutex<()>,
}

// The mutexes guard no data, so a panic mid-update leaves nothing to repair.
fn hold(lock: &Mutex<()>) -> MutexGuard<'_, ()> {
    lock.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct MockApi {
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    latency: Latency,
    locks: CollectionLocks,
}

impl MockApi {
    /// Builds the facade and writes the seed of every collection that is
    /// not in storage yet.
    pub fn new(
        storage: Arc<dyn Storage>,
        clock: Arc<dyn Clock>,
        latency: Latency,
    ) -> ServiceResult<Self> {
        let api = MockApi {
            storage,
            clock,
            latency,
            locks: CollectionLocks::default(),
        };
        api.init_data()?;
        Ok(api)
    }

    fn init_data(&self) -> ServiceResult<()> {
        let now = self.clock.now();
        let store = self.storage.as_ref();
        let seeded = [
            USERS.ensure_seeded(store, now)?,
            TASKS.ensure_seeded(store, now)?,
            LEAVES.ensure_seeded(store, now)?,
            TIME_HISTORY.ensure_seeded(store, now)?,
            PERFORMANCE_REVIEWS.ensure_seeded(store, now)?,
            PROJECTS.ensure_seeded(store, now)?,
        ];
        let written = seeded.iter().filter(|s| **s).count();
        if written > 0 {
            info!(collections = written, "seeded empty collections");
        } else {
            debug!("all collections already present");
        }
        Ok(())
    }

    fn store(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    fn load<T>(&self, collection: &Collection<T>) -> ServiceResult<Vec<T>>
    where
        T: serde::Serialize + serde::de::DeserializeOwned,
    {
        Ok(collection.load(self.store(), self.clock.now())?)
    }

    fn save<T>(&self, collection: &Collection<T>, records: &[T]) -> ServiceResult<()>
    where
        T: serde::Serialize + serde::de::DeserializeOwned,
    {
        Ok(collection.save(self.store(), records)?)
    }

    fn allocate_id<T>(
        &self,
        collection: &Collection<T>,
        taken: impl IntoIterator<Item = u64>,
    ) -> ServiceResult<u64>
    where
        T: serde::Serialize + serde::de::DeserializeOwned,
    {
        next_id(self.clock.now(), taken).ok_or(ServiceError::IdsExhausted {
            collection: collection.key(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::utils::clock::SystemClock;

    #[test]
    fn construction_seeds_every_collection_once() {
        let storage = Arc::new(MemoryStorage::new());
        MockApi::new(storage.clone(), Arc::new(SystemClock), Latency::none()).unwrap();
        assert_eq!(storage.len(), 6);
        assert!(storage.get(keys::TIME_STATUS).unwrap().is_none());

        storage.set(keys::TASKS, "[]").unwrap();
        MockApi::new(storage.clone(), Arc::new(SystemClock), Latency::none()).unwrap();
        assert_eq!(storage.get(keys::TASKS).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn corrupt_collection_fails_on_first_read() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(keys::LEAVES, "not json").unwrap();
        // presence is all seeding checks; corruption surfaces on first read
        let api = MockApi::new(storage, Arc::new(SystemClock), Latency::none()).unwrap();
        assert!(api.load(&LEAVES).is_err());
    }
}
