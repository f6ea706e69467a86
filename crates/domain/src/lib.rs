//! # hrdesk Domain
//!
//! Business domain types and models for the hrdesk employee-management
//! core.
//!
//! This crate contains:
//! - Entity types (Employee, AttendanceRecord, LeaveRequest) with their
//!   draft and patch companions
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other hrdesk crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
