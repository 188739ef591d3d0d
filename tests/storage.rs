mod common;

use std::sync::Arc;

use common::{raw_json, setup, start_time};
use staffdesk::{
    Latency, MockApi, ServiceError, StoreError,
    api::{LEAVES, PERFORMANCE_REVIEWS, PROJECTS, TASKS, TIME_HISTORY, USERS},
    model::{
        attendance::ClockAction,
        task::{NewTask, TaskStatus},
    },
    storage::{FileStorage, Storage, keys},
    utils::clock::ManualClock,
};

#[tokio::test]
async fn save_of_load_leaves_every_collection_unchanged() {
    let env = setup();
    env.api.clock_in_out(ClockAction::In).await.unwrap();
    env.api.clock_in_out(ClockAction::Out).await.unwrap();

    let store = env.storage.as_ref();
    let now = start_time();
    macro_rules! round_trip {
        ($collection:expr) => {{
            let key = $collection.key();
            let before = raw_json(&env.storage, key);
            let records = $collection.load(store, now).unwrap();
            $collection.save(store, &records).unwrap();
            assert_eq!(raw_json(&env.storage, key), before, "{key} changed");
        }};
    }
    round_trip!(USERS);
    round_trip!(TASKS);
    round_trip!(LEAVES);
    round_trip!(TIME_HISTORY);
    round_trip!(PERFORMANCE_REVIEWS);
    round_trip!(PROJECTS);
}

#[test]
fn hand_written_documents_survive_save_of_load() {
    let env = setup();
    let store = env.storage.as_ref();
    let now = start_time();
    macro_rules! round_trip {
        ($collection:expr, $raw:expr) => {{
            let key = $collection.key();
            store.set(key, $raw).unwrap();
            let before = raw_json(&env.storage, key);
            let records = $collection.load(store, now).unwrap();
            $collection.save(store, &records).unwrap();
            assert_eq!(raw_json(&env.storage, key), before, "{key} changed");
        }};
    }
    round_trip!(
        TIME_HISTORY,
        r#"[{"date":"2026-03-01","timeIn":"08:55 AM"}]"#
    );
    round_trip!(
        TASKS,
        r#"[{"id":7,"title":"Ship","description":"","deadline":"2026-03-04T08:30:00.000Z","priority":"High","status":"In Progress","assignedTo":1}]"#
    );
    round_trip!(
        PERFORMANCE_REVIEWS,
        r#"[{"id":1,"employeeId":4,"employeeName":"Alice Williams","rating":5,"feedback":"Great","reviewer":"Jane Smith","reviewDate":"2026-02-01T12:00:00.250Z"}]"#
    );
}

#[test]
fn documents_a_save_would_rewrite_are_rejected() {
    let env = setup();
    let store = env.storage.as_ref();
    let task = |extra: &str, deadline: &str| {
        format!(
            r#"[{{"id":7,"title":"Ship","description":"","deadline":"{deadline}","priority":"High","status":"Pending","assignedTo":1{extra}}}]"#
        )
    };
    for raw in [
        task(r#","projectId":null"#, "2026-03-04T08:30:00.000Z"),
        task("", "2026-03-04T08:30:00Z"),
        task(r#","assigned_to":4"#, "2026-03-04T08:30:00.000Z"),
    ] {
        store.set(keys::TASKS, &raw).unwrap();
        assert!(TASKS.load(store, start_time()).is_err(), "accepted {raw}");
        assert_eq!(store.get(keys::TASKS).unwrap(), Some(raw));
    }

    store
        .set(
            keys::TIME_HISTORY,
            r#"[{"date":"2026-03-01","timeIn":"08:55 AM","timeOut":null}]"#,
        )
        .unwrap();
    let err = TIME_HISTORY.load(store, start_time()).unwrap_err();
    assert!(matches!(err, StoreError::NonCanonical { index: 0, .. }));
}

#[tokio::test]
async fn exhausted_id_space_is_an_error_not_a_panic() {
    let env = setup();
    env.storage
        .set(
            keys::TASKS,
            &format!(
                r#"[{{"id":{},"title":"Last","description":"","deadline":"2026-03-04T08:30:00.000Z","priority":"Low","status":"Pending","assignedTo":1}}]"#,
                u64::MAX
            ),
        )
        .unwrap();

    let err = env
        .api
        .add_task(NewTask {
            title: "One more".into(),
            description: String::new(),
            deadline: start_time(),
            priority: None,
            status: None,
            assigned_to: 1,
            project_id: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::IdsExhausted { collection } if collection == keys::TASKS));
    assert_eq!(env.api.get_manager_tasks().await.unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_collection_is_an_error_not_an_empty_list() {
    let env = setup();
    env.storage.set(keys::TASKS, "[{\"id\": 1}").unwrap();

    let err = env.api.get_manager_tasks().await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Store(StoreError::Malformed { ref key, .. }) if key == keys::TASKS
    ));

    env.storage
        .set(keys::TASKS, r#"[{"id":1,"status":"Someday"}]"#)
        .unwrap();
    assert!(env.api.get_performance_metrics().await.is_err());
}

#[tokio::test]
async fn absent_collection_is_reseeded_on_access() {
    let env = setup();
    env.storage.remove(keys::PROJECTS).unwrap();
    assert_eq!(env.api.get_projects().await.unwrap().len(), 3);
    assert!(env.storage.get(keys::PROJECTS).unwrap().is_some());
}

#[tokio::test]
async fn file_storage_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let clock = Arc::new(ManualClock::new(start_time()));

    let storage: Arc<dyn Storage> = Arc::new(FileStorage::open(dir.path()).unwrap());
    let api = MockApi::new(storage, clock.clone(), Latency::none()).unwrap();
    api.update_task_status(102, TaskStatus::Completed)
        .await
        .unwrap();
    api.clock_in_out(ClockAction::In).await.unwrap();
    drop(api);

    let storage: Arc<dyn Storage> = Arc::new(FileStorage::open(dir.path()).unwrap());
    let api = MockApi::new(storage, clock, Latency::none()).unwrap();
    let metrics = api.get_performance_metrics().await.unwrap();
    assert_eq!(metrics.tasks_completed, 2);
    assert_eq!(
        api.get_time_status().await.unwrap().time_in,
        Some(start_time())
    );
}

#[tokio::test]
async fn simulated_latency_delays_each_call() {
    let env = common::setup_with(Latency::simulated());
    let started = std::time::Instant::now();
    env.api.get_time_status().await.unwrap();
    assert!(started.elapsed() >= std::time::Duration::from_millis(300));
}
