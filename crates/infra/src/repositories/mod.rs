//! Remote repository implementations of the collection ports
//!
//! One repository per collection, all sharing a [`StoreClient`]. Reads
//! degrade to empty results with an error log; writes propagate failures
//! to the caller.
//!
//! [`StoreClient`]: crate::store::StoreClient

pub mod attendance;
pub mod employees;
pub mod leave;

pub use attendance::ApiAttendanceRepository;
pub use employees::ApiEmployeeRepository;
pub use leave::ApiLeaveRepository;
