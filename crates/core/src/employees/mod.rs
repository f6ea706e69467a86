//! Employee collection: port and cache service

pub mod ports;
pub mod service;

pub use ports::EmployeeRepository;
pub use service::EmployeeService;
