//! Record store access
//!
//! The hosted record store speaks a JSON envelope protocol over HTTP with
//! one endpoint family per collection. This module holds the transport,
//! the query and envelope wire types, and the typed client.

pub mod client;
pub mod envelope;
pub mod errors;
pub mod http;
pub mod query;

pub use client::{StoreClient, UpdateRecord};
pub use errors::StoreError;
pub use query::QueryParams;
