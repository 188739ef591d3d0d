//! Reference data written to storage on first run.
//!
//! Dates are relative to the moment the store is first populated, so a fresh
//! store always has upcoming and overdue deadlines.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use once_cell::sync::Lazy;

use crate::model::{
    attendance::{AttendanceStatus, TimeHistoryRecord},
    dashboard::{Announcement, Notification, NotificationKind, TeamMember},
    leave_request::{LeaveBalance, LeaveRequest, LeaveStatus, LeaveType},
    performance_review::PerformanceReview,
    project::{Project, ProjectStatus},
    role::Role,
    task::{Priority, Task, TaskStatus},
    user::{Token, User},
};

const DEMO_PASSWORD: &str = "password123";

static LEAVE_BALANCES: Lazy<HashMap<u64, LeaveBalance>> = Lazy::new(|| {
    HashMap::from([
        (1, LeaveBalance { annual: 15, sick: 8, personal: 3 }),
        (2, LeaveBalance { annual: 20, sick: 10, personal: 5 }),
        (3, LeaveBalance { annual: 20, sick: 10, personal: 5 }),
    ])
});

fn user(id: u64, username: &str, name: &str, role: Role, position: &str, token: &str) -> User {
    User {
        id,
        username: username.into(),
        password: DEMO_PASSWORD.into(),
        name: name.into(),
        role,
        position: position.into(),
        token: Token::new(token),
    }
}

pub fn users(_now: DateTime<Utc>) -> Vec<User> {
    vec![
        user(1, "employee", "John Doe", Role::Employee, "Senior Frontend Developer", "mock-token-employee-123456"),
        user(2, "manager", "Jane Smith", Role::Manager, "Engineering Manager", "mock-token-manager-123456"),
        user(3, "hr", "Robert Johnson", Role::Hr, "HR Specialist", "mock-token-hr-123456"),
        user(4, "alice", "Alice Williams", Role::Employee, "Frontend Developer", "mock-token-alice-123"),
        user(5, "bob", "Bob Brown", Role::Employee, "Backend Developer", "mock-token-bob-123"),
        user(6, "charlie", "Charlie Davis", Role::Employee, "UI/UX Designer", "mock-token-charlie-123"),
    ]
}

pub fn projects(now: DateTime<Utc>) -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "Website Redesign".into(),
            deadline: now + Duration::days(14),
            status: ProjectStatus::InProgress,
        },
        Project {
            id: 2,
            name: "Mobile App Migration".into(),
            deadline: now + Duration::days(30),
            status: ProjectStatus::NotStarted,
        },
        Project {
            id: 3,
            name: "Internal Dashboard".into(),
            deadline: now + Duration::days(7),
            status: ProjectStatus::Completed,
        },
    ]
}

pub fn tasks(now: DateTime<Utc>) -> Vec<Task> {
    let task = |id, title: &str, description: &str, deadline, priority, status| Task {
        id,
        title: title.into(),
        description: description.into(),
        deadline,
        priority,
        status,
        assigned_to: 1,
        project_id: None,
    };
    vec![
        task(
            101,
            "Implement Login Page",
            "Create a responsive login page with validation.",
            now + Duration::days(2),
            Priority::High,
            TaskStatus::InProgress,
        ),
        task(
            102,
            "Fix Navigation Bug",
            "Navbar collapses incorrectly on mobile devices.",
            now + Duration::hours(12),
            Priority::Medium,
            TaskStatus::Pending,
        ),
        // overdue on first run
        task(
            103,
            "Update Documentation",
            "Update the README with new setup instructions.",
            now - Duration::days(1),
            Priority::Low,
            TaskStatus::Pending,
        ),
        task(
            104,
            "Code Review",
            "Review PR #45 by Alice.",
            now + Duration::days(5),
            Priority::High,
            TaskStatus::Completed,
        ),
    ]
}

pub fn leaves(now: DateTime<Utc>) -> Vec<LeaveRequest> {
    let day = |offset: i64| (now + Duration::days(offset)).date_naive();
    let leave = |id, leave_type, start, end, status, reason: &str| LeaveRequest {
        id,
        user_id: 1,
        leave_type,
        start_date: start,
        end_date: end,
        status,
        reason: reason.into(),
    };
    vec![
        leave(201, LeaveType::Annual, day(-30), day(-25), LeaveStatus::Approved, "Vacation"),
        leave(202, LeaveType::Sick, day(-10), day(-9), LeaveStatus::Approved, "Flu"),
        leave(203, LeaveType::Personal, day(10), day(11), LeaveStatus::Pending, "Appointment"),
    ]
}

pub fn time_history(now: DateTime<Utc>) -> Vec<TimeHistoryRecord> {
    let record = |id, user_id, name: &str, date: NaiveDate, time_in: &str, time_out: &str, status| {
        TimeHistoryRecord {
            id: Some(id),
            user_id: Some(user_id),
            name: Some(name.into()),
            date,
            time_in: time_in.into(),
            time_out: Some(time_out.into()),
            status: Some(status),
        }
    };
    let yesterday = (now - Duration::days(1)).date_naive();
    let two_days_ago = (now - Duration::days(2)).date_naive();
    vec![
        record(1, 1, "John Doe", yesterday, "08:58 AM", "05:02 PM", AttendanceStatus::OnTime),
        record(2, 4, "Alice Williams", yesterday, "09:05 AM", "05:15 PM", AttendanceStatus::Late),
        record(3, 5, "Bob Brown", yesterday, "08:45 AM", "04:55 PM", AttendanceStatus::Early),
        record(4, 1, "John Doe", two_days_ago, "09:05 AM", "05:15 PM", AttendanceStatus::Late),
    ]
}

pub fn performance_reviews(now: DateTime<Utc>) -> Vec<PerformanceReview> {
    vec![
        PerformanceReview {
            id: 1,
            employee_id: 4,
            employee_name: "Alice Williams".into(),
            rating: 4.5,
            feedback: "Excellent work on the frontend migration. Demonstrated strong layout skills.".into(),
            reviewer: "Jane Smith".into(),
            review_date: now - Duration::days(15),
        },
        PerformanceReview {
            id: 2,
            employee_id: 5,
            employee_name: "Bob Brown".into(),
            rating: 3.8,
            feedback: "Good backend logic, but needs to improve documentation habits.".into(),
            reviewer: "Jane Smith".into(),
            review_date: now - Duration::days(45),
        },
        PerformanceReview {
            id: 3,
            employee_id: 6,
            employee_name: "Charlie Davis".into(),
            rating: 4.8,
            feedback: "Outstanding UI designs for the new dashboard. Exceeded expectations.".into(),
            reviewer: "Robert Johnson".into(),
            review_date: now - Duration::days(5),
        },
    ]
}

pub fn leave_balance(user_id: u64) -> Option<LeaveBalance> {
    LEAVE_BALANCES.get(&user_id).copied()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: 1,
            title: "New Remote Work Policy".into(),
            date: date(2023, 10, 25),
            content: "We have updated our remote work policy. Please review the handbook for details on the new hybrid model starting next month.".into(),
            preview: "We have updated our remote work policy. Please review...".into(),
        },
        Announcement {
            id: 2,
            title: "Quarterly Town Hall".into(),
            date: date(2023, 10, 28),
            content: "Join us for the Q4 Town Hall meeting this Friday at 2 PM. We will be discussing our yearly goals and celebrating team wins.".into(),
            preview: "Join us for the Q4 Town Hall meeting this Friday...".into(),
        },
        Announcement {
            id: 3,
            title: "Health & Wellness Benefit".into(),
            date: date(2023, 11, 1),
            content: "New gym memberships and mental health support programs are now available to all full-time employees.".into(),
            preview: "New gym memberships and mental health support programs...".into(),
        },
    ]
}

pub fn team_availability() -> Vec<TeamMember> {
    let member = |id, name: &str, position: &str, status: &str, return_date: Option<&str>| TeamMember {
        id,
        name: name.into(),
        position: position.into(),
        status: status.into(),
        return_date: return_date.map(Into::into),
    };
    vec![
        member(101, "Sarah Jenkins", "Designer", "On Leave", Some("2023-10-27")),
        member(102, "Mike Ross", "Developer", "Sick", Some("Unknown")),
        member(103, "Jessica Pearson", "Manager", "Traveling", Some("2023-10-30")),
        member(104, "Harvey Specter", "Legal", "In Office", None),
    ]
}

pub fn notifications() -> Vec<Notification> {
    let note = |id, kind, message: &str, time: &str| Notification {
        id,
        kind,
        message: message.into(),
        time: time.into(),
    };
    vec![
        note(1, NotificationKind::Success, "Your leave request for Dec 24 has been approved.", "2 hours ago"),
        note(2, NotificationKind::Info, "New training module assigned: 'Security Awareness'.", "5 hours ago"),
        note(3, NotificationKind::Warning, "Please submit your timesheet for this week.", "1 day ago"),
    ]
}

pub fn department_breakdown() -> BTreeMap<String, u32> {
    BTreeMap::from([
        ("Development".to_string(), 3),
        ("Design".to_string(), 1),
        ("Marketing".to_string(), 1),
    ])
}
