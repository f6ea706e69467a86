//! Attendance collection: port and cache service

pub mod ports;
pub mod service;

pub use ports::AttendanceRepository;
pub use service::AttendanceService;
