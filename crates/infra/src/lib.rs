//! # hrdesk Infrastructure
//!
//! Infrastructure layer - the remote record store backend and runtime wiring.
//!
//! This crate contains:
//! - The record store HTTP client and its wire protocol types
//! - Remote repository implementations of the collection ports
//! - Configuration loading from environment variables and files
//! - Backend assembly that selects remote or in-memory repositories
//!
//! ## Architecture Principles
//! - Implements the port traits defined in `hrdesk-core`
//! - All store access goes through [`store::StoreClient`]
//! - Backend choice is made once in [`backend::Backend::from_config`]

pub mod backend;
pub mod config;
pub mod repositories;
pub mod store;

pub use backend::{Backend, Services};
pub use repositories::{ApiAttendanceRepository, ApiEmployeeRepository, ApiLeaveRepository};
pub use store::{StoreClient, StoreError};
