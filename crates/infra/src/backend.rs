//! Backend assembly
//!
//! Builds the repository set named by [`Config`] and wires the cache
//! services on top of it. This is the only place that knows which concrete
//! repository type sits behind each port; everything downstream holds
//! trait objects.

use std::sync::Arc;

use hrdesk_core::{
    AttendanceRepository, AttendanceService, EmployeeRepository, EmployeeService,
    LeaveRepository, LeaveService, MemoryAttendanceRepository, MemoryEmployeeRepository,
    MemoryLeaveRepository, MemoryStore,
};
use hrdesk_domain::config::BackendKind;
use hrdesk_domain::{Config, Result};
use tracing::info;

use crate::repositories::{ApiAttendanceRepository, ApiEmployeeRepository, ApiLeaveRepository};
use crate::store::StoreClient;

/// The repositories chosen for one process lifetime.
pub struct Backend {
    pub employees: Arc<dyn EmployeeRepository>,
    pub attendance: Arc<dyn AttendanceRepository>,
    pub leave: Arc<dyn LeaveRepository>,
    /// Present only for the memory backend, so callers can seed or reset it.
    pub memory: Option<Arc<MemoryStore>>,
}

impl Backend {
    /// Builds the backend named by `config.backend`.
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.backend {
            BackendKind::Remote => {
                let store = Arc::new(StoreClient::new(&config.store)?);
                info!(base_url = %config.store.base_url, "Using the remote record store backend");
                Ok(Self {
                    employees: Arc::new(ApiEmployeeRepository::new(store.clone())),
                    attendance: Arc::new(ApiAttendanceRepository::new(store.clone())),
                    leave: Arc::new(ApiLeaveRepository::new(store)),
                    memory: None,
                })
            }
            BackendKind::Memory => {
                info!("Using the in-memory backend");
                Ok(Self::in_memory())
            }
        }
    }

    /// Builds an in-memory backend over a fresh, resettable store.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            employees: Arc::new(MemoryEmployeeRepository::new(store.clone())),
            attendance: Arc::new(MemoryAttendanceRepository::new(store.clone())),
            leave: Arc::new(MemoryLeaveRepository::new(store.clone())),
            memory: Some(store),
        }
    }

    /// Seed the demo dataset when running on the memory backend. A no-op
    /// for the remote backend, whose data lives in the store.
    pub async fn seed_demo(&self) -> Result<()> {
        match &self.memory {
            Some(store) => hrdesk_core::memory::seed::demo(store).await,
            None => Ok(()),
        }
    }

    /// Wires the three cache services over this backend's repositories.
    pub fn services(&self) -> Services {
        Services {
            employees: Arc::new(EmployeeService::new(self.employees.clone())),
            attendance: Arc::new(AttendanceService::new(self.attendance.clone())),
            leave: Arc::new(LeaveService::new(self.leave.clone())),
        }
    }
}

/// The cache service set handed to the presentation layer.
pub struct Services {
    pub employees: Arc<EmployeeService>,
    pub attendance: Arc<AttendanceService>,
    pub leave: Arc<LeaveService>,
}
