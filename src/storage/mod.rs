//! Key-value storage port and the JSON collections kept in it.
//!
//! The dashboard keeps each mutable collection as one JSON document under a
//! flat key. [`Storage`] is the port; [`MemoryStorage`] backs tests and
//! [`FileStorage`] backs the command-line front end.

use std::io;
use std::path::Path;
use std::sync::Arc;

mod collection;
mod file;
mod memory;

pub use collection::{Collection, Document};
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage keys, one per persisted collection.
pub mod keys {
    pub const USERS: &str = "mock_users";
    pub const TASKS: &str = "mock_tasks";
    pub const LEAVES: &str = "mock_leaves";
    pub const TIME_HISTORY: &str = "mock_time_history";
    pub const PERFORMANCE_REVIEWS: &str = "mock_performance_reviews";
    pub const PROJECTS: &str = "mock_projects";
    pub const TIME_STATUS: &str = "mock_time_status";
    pub const MANAGER_ASSIGNMENTS: &str = "mock_manager_assignments";
}

pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> io::Result<()>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> io::Result<()>;
}

pub fn init_storage(dir: &Path) -> io::Result<Arc<dyn Storage>> {
    let storage = FileStorage::open(dir)?;
    tracing::info!(dir = %dir.display(), "file storage ready");
    Ok(Arc::new(storage))
}
