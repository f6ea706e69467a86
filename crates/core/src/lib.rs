//! # hrdesk Core
//!
//! Business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the three entity collections
//! - The cache services that hold the client-side state of each collection
//! - The in-memory backend implementation of the ports
//! - Derived statistics over cached entities
//!
//! ## Architecture Principles
//! - Only depends on `hrdesk-domain`
//! - No HTTP or platform code; the remote backend lives in `hrdesk-infra`
//! - External persistence is reached exclusively via traits

pub mod attendance;
pub mod employees;
pub mod leave;
pub mod memory;
pub mod reports;

// Re-export the ports and services at the crate root
pub use attendance::{AttendanceRepository, AttendanceService};
pub use employees::{EmployeeRepository, EmployeeService};
pub use leave::{LeaveRepository, LeaveService};
pub use memory::{
    MemoryAttendanceRepository, MemoryEmployeeRepository, MemoryLeaveRepository, MemoryStore,
};
