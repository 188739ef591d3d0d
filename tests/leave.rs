mod common;

use std::sync::Arc;

use chrono::NaiveDate;
use common::{setup, setup_with};
use staffdesk::{
    Latency, ServiceError,
    model::leave_request::{LeaveDecision, LeaveStatus, LeaveType, NewLeave},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn annual(user_id: Option<u64>) -> NewLeave {
    NewLeave {
        leave_type: LeaveType::Annual,
        start_date: date(2026, 4, 6),
        end_date: date(2026, 4, 10),
        user_id,
        reason: None,
    }
}

#[tokio::test]
async fn new_request_is_pending_and_listed_first() {
    let env = setup();
    let before = env.api.get_leave_history().await.unwrap();

    let leave = env.api.request_leave(annual(None)).await.unwrap();
    assert_eq!(leave.status, LeaveStatus::Pending);
    assert_eq!(leave.user_id, 1);
    assert_eq!(leave.reason, "Requested via Dashboard");
    assert!(before.iter().all(|l| l.id != leave.id));

    let history = env.api.get_leave_history().await.unwrap();
    assert_eq!(history.len(), before.len() + 1);
    assert_eq!(history[0], leave);

    let again = env.api.request_leave(annual(Some(4))).await.unwrap();
    assert_ne!(again.id, leave.id);
    assert_eq!(env.api.get_leave_history().await.unwrap()[0].id, again.id);
}

#[tokio::test]
async fn inverted_date_range_is_rejected() {
    let env = setup();
    let mut leave = annual(None);
    leave.end_date = date(2026, 4, 1);
    let err = env.api.request_leave(leave).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
    assert_eq!(env.api.get_leave_history().await.unwrap().len(), 3);
}

#[tokio::test]
async fn only_pending_requests_can_be_resolved() {
    let env = setup();
    let approved = env
        .api
        .update_leave_status(203, LeaveDecision::Approved)
        .await
        .unwrap();
    assert_eq!(approved.status, LeaveStatus::Approved);

    let err = env
        .api
        .update_leave_status(203, LeaveDecision::Rejected)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::LeaveNotPending));

    let err = env
        .api
        .update_leave_status(42, LeaveDecision::Approved)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::LeaveNotPending));

    let history = env.api.get_leave_history().await.unwrap();
    assert_eq!(
        history.iter().find(|l| l.id == 203).unwrap().status,
        LeaveStatus::Approved
    );
}

#[tokio::test]
async fn manager_view_names_the_requester() {
    let env = setup();
    env.api.request_leave(annual(Some(99))).await.unwrap();

    let leaves = env.api.get_manager_leaves().await.unwrap();
    assert_eq!(leaves.len(), 4);
    assert_eq!(leaves[0].employee_name, "Unknown");
    assert_eq!(leaves[0].employee_position, "Unknown");
    assert_eq!(leaves[1].employee_name, "John Doe");
    assert_eq!(leaves[1].employee_position, "Senior Frontend Developer");

    let json = serde_json::to_value(&leaves[1]).unwrap();
    assert_eq!(json["employeeName"], "John Doe");
    assert_eq!(json["type"], "Annual");
}

#[tokio::test]
async fn balances_exist_for_the_first_three_users() {
    let env = setup();
    let balance = env.api.get_leave_balance(1).await.unwrap();
    assert_eq!((balance.annual, balance.sick, balance.personal), (15, 8, 3));
    assert_eq!(env.api.get_leave_balance(2).await.unwrap().annual, 20);
    assert!(env.api.get_leave_balance(4).await.is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_decisions_are_not_lost() {
    let env = setup_with(Latency::none());
    let mut ids = Vec::new();
    for user_id in [1, 4, 5, 6] {
        ids.push(env.api.request_leave(annual(Some(user_id))).await.unwrap().id);
    }

    let api = Arc::new(env.api);
    let handles: Vec<_> = ids
        .iter()
        .map(|&id| {
            let api = Arc::clone(&api);
            tokio::spawn(async move { api.update_leave_status(id, LeaveDecision::Approved).await })
        })
        .collect();
    for result in futures::future::join_all(handles).await {
        result.unwrap().unwrap();
    }

    let history = api.get_leave_history().await.unwrap();
    for id in ids {
        assert_eq!(
            history.iter().find(|l| l.id == id).unwrap().status,
            LeaveStatus::Approved
        );
    }
}
