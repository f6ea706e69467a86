//! In-memory record store
//!
//! An explicit store object owning the three entity collections. It is
//! constructed once per process (or per test) and shared via `Arc` with
//! the repository adapters; there is no ambient global state, which keeps
//! the backend trivially resettable between tests.

use hrdesk_domain::{AttendanceRecord, Employee, LeaveRequest, RecordId};
use tokio::sync::RwLock;

/// Shared in-memory collections for the mock backend
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) employees: RwLock<Vec<Employee>>,
    pub(crate) attendance: RwLock<Vec<AttendanceRecord>>,
    pub(crate) leave_requests: RwLock<Vec<LeaveRequest>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all three collections.
    pub async fn reset(&self) {
        self.employees.write().await.clear();
        self.attendance.write().await.clear();
        self.leave_requests.write().await.clear();
    }

    /// Number of records across all collections.
    pub async fn len(&self) -> usize {
        self.employees.read().await.len()
            + self.attendance.read().await.len()
            + self.leave_requests.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Monotonic max+1 id assignment over a live collection.
pub(crate) fn next_id(ids: impl Iterator<Item = RecordId>) -> RecordId {
    ids.max().unwrap_or(0) + 1
}
