mod common;

use chrono::Duration;
use common::{raw_json, setup, start_time};
use serde_json::json;
use staffdesk::{
    ServiceError,
    model::{
        project::{NewProject, ProjectStatus},
        task::{NewTask, Priority, TaskStatus},
    },
    storage::keys,
};

const EMPLOYEE: &str = "mock-token-employee-123456";
const MANAGER: &str = "mock-token-manager-123456";
const ALICE: &str = "mock-token-alice-123";

fn new_task(title: &str, assigned_to: u64) -> NewTask {
    NewTask {
        title: title.into(),
        description: String::new(),
        deadline: start_time() + Duration::days(3),
        priority: None,
        status: None,
        assigned_to,
        project_id: Some(1),
    }
}

#[tokio::test]
async fn metrics_follow_status_changes() {
    let env = setup();

    let metrics = env.api.get_performance_metrics().await.unwrap();
    assert_eq!(metrics.tasks_completed, 1);
    assert_eq!(metrics.tasks_in_progress, 1);
    assert_eq!(metrics.projects_contributed, 3);

    env.api
        .update_task_status(102, TaskStatus::Completed)
        .await
        .unwrap();
    env.api
        .update_task_status(101, TaskStatus::Completed)
        .await
        .unwrap();

    let metrics = env.api.get_performance_metrics().await.unwrap();
    assert_eq!(metrics.tasks_completed, 3);
    assert_eq!(metrics.tasks_in_progress, 0);
}

#[tokio::test]
async fn completing_102_moves_the_counts() {
    let env = setup();
    env.api
        .update_task_status(101, TaskStatus::Pending)
        .await
        .unwrap();
    env.api
        .update_task_status(102, TaskStatus::Completed)
        .await
        .unwrap();

    let metrics = env.api.get_performance_metrics().await.unwrap();
    assert_eq!(metrics.tasks_completed, 2);
    assert_eq!(metrics.tasks_in_progress, 0);
}

#[tokio::test]
async fn metrics_match_stored_counts_after_mixed_mutations() {
    let env = setup();
    let added = env.api.add_task(new_task("Ship it", 4)).await.unwrap();
    env.api
        .update_task_status(added.id, TaskStatus::InProgress)
        .await
        .unwrap();
    env.api.delete_task(104).await.unwrap();
    env.api
        .update_task(103, &json!({"status": "Completed"}))
        .await
        .unwrap();

    let tasks = env.api.get_manager_tasks().await.unwrap();
    let metrics = env.api.get_performance_metrics().await.unwrap();
    let count = |s| tasks.iter().filter(|t| t.status == s).count();
    assert_eq!(metrics.tasks_completed, count(TaskStatus::Completed));
    assert_eq!(metrics.tasks_in_progress, count(TaskStatus::InProgress));
    assert_eq!(metrics.tasks_completed, 1);
    assert_eq!(metrics.tasks_in_progress, 2);
}

#[tokio::test]
async fn status_update_is_idempotent() {
    let env = setup();
    for _ in 0..2 {
        env.api
            .update_task_status(102, TaskStatus::Completed)
            .await
            .unwrap();
    }

    let tasks = env.api.get_manager_tasks().await.unwrap();
    assert_eq!(tasks.len(), 4);
    let matching: Vec<_> = tasks.iter().filter(|t| t.id == 102).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].status, TaskStatus::Completed);
}

#[tokio::test]
async fn any_status_may_follow_any_other() {
    let env = setup();
    env.api
        .update_task_status(104, TaskStatus::Pending)
        .await
        .unwrap();
    let tasks = env.api.get_manager_tasks().await.unwrap();
    assert_eq!(
        tasks.iter().find(|t| t.id == 104).unwrap().status,
        TaskStatus::Pending
    );
}

#[tokio::test]
async fn unknown_task_id_changes_nothing() {
    let env = setup();
    let before = raw_json(&env.storage, keys::TASKS);
    env.api
        .update_task_status(999, TaskStatus::Completed)
        .await
        .unwrap();
    env.api.delete_task(999).await.unwrap();
    assert!(env.api.update_task(999, &json!({"title": "x"})).await.unwrap().is_none());
    assert_eq!(raw_json(&env.storage, keys::TASKS), before);
}

#[tokio::test]
async fn task_visibility_depends_on_role() {
    let env = setup();
    assert_eq!(env.api.get_tasks(EMPLOYEE).await.unwrap().len(), 4);
    assert!(env.api.get_tasks(ALICE).await.unwrap().is_empty());

    env.api.add_task(new_task("Review layout", 4)).await.unwrap();
    assert_eq!(env.api.get_tasks(ALICE).await.unwrap().len(), 1);
    assert_eq!(env.api.get_tasks(MANAGER).await.unwrap().len(), 5);

    let err = env.api.get_tasks("stale-token").await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidSession));
}

#[tokio::test]
async fn added_task_gets_defaults_and_a_fresh_id() {
    let env = setup();
    let first = env.api.add_task(new_task("One", 1)).await.unwrap();
    let second = env.api.add_task(new_task("Two", 1)).await.unwrap();

    assert_eq!(first.priority, Priority::Medium);
    assert_eq!(first.status, TaskStatus::Pending);
    assert_eq!(first.id, start_time().timestamp_millis() as u64);
    // same clock reading, still distinct
    assert_eq!(second.id, first.id + 1);

    let tasks = env.api.get_manager_tasks().await.unwrap();
    assert_eq!(tasks.last().unwrap().id, second.id);
}

#[tokio::test]
async fn partial_update_merges_fields() {
    let env = setup();
    let updated = env
        .api
        .update_task(101, &json!({"title": "Implement SSO", "priority": "Low"}))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "Implement SSO");
    assert_eq!(updated.priority, Priority::Low);
    assert_eq!(updated.status, TaskStatus::InProgress);
    assert_eq!(updated.assigned_to, 1);

    let err = env
        .api
        .update_task(101, &json!({"status": "Blocked"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
}

#[tokio::test]
async fn update_with_unknown_field_is_rejected() {
    let env = setup();
    let before = raw_json(&env.storage, keys::TASKS);
    let err = env
        .api
        .update_task(101, &json!({"assigned_to": 4}))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(ref msg) if msg.contains("assigned_to")));
    assert!(env.api.update_project(1, &json!({"owner": "Jane"})).await.is_err());
    assert_eq!(raw_json(&env.storage, keys::TASKS), before);
}

#[tokio::test]
async fn updated_deadline_is_stored_in_millisecond_form() {
    let env = setup();
    env.api
        .update_task(101, &json!({"deadline": "2026-04-01T10:00:00+02:00"}))
        .await
        .unwrap()
        .unwrap();
    let stored = raw_json(&env.storage, keys::TASKS);
    assert_eq!(stored[0]["deadline"], "2026-04-01T08:00:00.000Z");
    assert_eq!(env.api.get_manager_tasks().await.unwrap().len(), 4);
}

#[tokio::test]
async fn upcoming_deadlines_skip_completed_tasks() {
    let env = setup();
    let deadlines = env.api.get_upcoming_deadlines().await.unwrap();
    let ids: Vec<_> = deadlines.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![101, 102, 103]);
}

#[tokio::test]
async fn project_crud() {
    let env = setup();
    assert_eq!(env.api.get_projects().await.unwrap().len(), 3);

    let project = env
        .api
        .add_project(NewProject {
            name: "Payroll Export".into(),
            deadline: start_time() + Duration::days(60),
            status: ProjectStatus::NotStarted,
        })
        .await
        .unwrap();

    let updated = env
        .api
        .update_project(project.id, &json!({"status": "In Progress"}))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, ProjectStatus::InProgress);
    assert_eq!(updated.name, "Payroll Export");

    env.api.delete_project(1).await.unwrap();
    let projects = env.api.get_projects().await.unwrap();
    let ids: Vec<_> = projects.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3, project.id]);
}
