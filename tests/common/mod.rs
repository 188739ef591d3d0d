#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use staffdesk::{Latency, MockApi, storage::MemoryStorage, utils::clock::ManualClock};

pub const PASSWORD: &str = "password123";

pub struct TestEnv {
    pub api: MockApi,
    pub storage: Arc<MemoryStorage>,
    pub clock: Arc<ManualClock>,
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 8, 30, 0).unwrap()
}

pub fn setup() -> TestEnv {
    setup_with(Latency::none())
}

pub fn setup_with(latency: Latency) -> TestEnv {
    let storage = Arc::new(MemoryStorage::new());
    let clock = Arc::new(ManualClock::new(start_time()));
    let api = MockApi::new(storage.clone(), clock.clone(), latency).unwrap();
    TestEnv {
        api,
        storage,
        clock,
    }
}

pub fn raw_json(storage: &MemoryStorage, key: &str) -> serde_json::Value {
    use staffdesk::storage::Storage;
    let raw = storage.get(key).unwrap().expect("key present");
    serde_json::from_str(&raw).unwrap()
}
