pub mod attendance;
pub mod dashboard;
pub mod employee;
pub mod leave_request;
pub mod performance_review;
pub mod project;
pub mod role;
pub mod task;
pub mod timestamp;
pub mod user;
