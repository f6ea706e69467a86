//! Leave request collection: port and cache service

pub mod ports;
pub mod service;

pub use ports::LeaveRepository;
pub use service::LeaveService;
