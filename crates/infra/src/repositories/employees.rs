//! Remote employee repository backed by the record store

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use hrdesk_core::EmployeeRepository;
use hrdesk_domain::{
    Employee, EmployeePatch, EmployeeStatus, HrdeskError, NewEmployee, RecordId, Result,
};
use serde::Serialize;
use tracing::error;

use crate::store::{QueryParams, StoreClient, UpdateRecord};

const COLLECTION: &str = "employee";

const FIELDS: &[&str] = &[
    "first_name",
    "last_name",
    "email",
    "phone",
    "role",
    "department",
    "join_date",
    "status",
    "photo_url",
];

const SEARCH_FIELDS: &[&str] = &["first_name", "last_name", "email", "department", "role"];

/// Record body sent to the create endpoint, defaults already applied.
#[derive(Debug, Serialize)]
struct EmployeeRecord {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    role: String,
    department: String,
    join_date: NaiveDate,
    status: EmployeeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo_url: Option<String>,
}

impl From<NewEmployee> for EmployeeRecord {
    fn from(new: NewEmployee) -> Self {
        Self {
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            role: new.role,
            department: new.department,
            join_date: new.join_date,
            status: new.status.unwrap_or_default(),
            photo_url: new.photo_url,
        }
    }
}

pub struct ApiEmployeeRepository {
    store: Arc<StoreClient>,
}

impl ApiEmployeeRepository {
    pub fn new(store: Arc<StoreClient>) -> Self {
        Self { store }
    }

    async fn fetch(&self, operation: &str, params: QueryParams) -> Result<Vec<Employee>> {
        match self.store.query(COLLECTION, &params).await {
            Ok(employees) => Ok(employees),
            Err(err) => {
                error!(error = %err, operation, "employee read failed, returning empty result");
                Ok(Vec::new())
            }
        }
    }
}

#[async_trait]
impl EmployeeRepository for ApiEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>> {
        self.fetch("list", QueryParams::select(FIELDS)).await
    }

    async fn find(&self, id: RecordId) -> Result<Option<Employee>> {
        match self.store.get_by_id(COLLECTION, id, &QueryParams::select(FIELDS)).await {
            Ok(employee) => Ok(employee),
            Err(err) => {
                error!(error = %err, id, "employee lookup failed, reporting absent");
                Ok(None)
            }
        }
    }

    async fn create(&self, new: NewEmployee) -> Result<Employee> {
        let records = [EmployeeRecord::from(new)];
        let mut created: Vec<Employee> =
            self.store.create_records(COLLECTION, &records).await?;
        created
            .pop()
            .ok_or_else(|| HrdeskError::Persistence("create returned no employee".to_string()))
    }

    async fn update(&self, id: RecordId, patch: EmployeePatch) -> Result<Employee> {
        let updates = [UpdateRecord { id, patch }];
        let mut updated: Vec<Employee> =
            self.store.update_records(COLLECTION, &updates).await?;
        updated
            .pop()
            .ok_or_else(|| HrdeskError::NotFound(format!("employee {} not found", id)))
    }

    async fn delete(&self, id: RecordId) -> Result<()> {
        self.store.delete_records(COLLECTION, &[id]).await?;
        Ok(())
    }

    async fn list_by_department(&self, department: &str) -> Result<Vec<Employee>> {
        let params = QueryParams::select(FIELDS).matching("department", department);
        self.fetch("list_by_department", params).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Employee>> {
        let params = QueryParams::select(FIELDS).containing_any(SEARCH_FIELDS, query);
        self.fetch("search", params).await
    }
}
