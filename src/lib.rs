//! Data layer of an employee management dashboard.
//!
//! Role-specific views (HR, manager, employee) call [`api::MockApi`] as if it
//! were a remote service. It keeps its collections as JSON documents in a
//! key-value [`storage::Storage`], seeded from [`seed`] on first use.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod model;
pub mod seed;
pub mod storage;
pub mod utils;

pub use api::{Latency, MockApi};
pub use error::{ServiceError, ServiceResult, StoreError};
