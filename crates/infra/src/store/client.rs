//! Record store client
//!
//! Thin typed wrapper over the store's per-collection endpoints. The client
//! is strict: any failed envelope or rejected record becomes an error, and
//! callers decide whether to degrade or propagate.

use hrdesk_domain::RecordId;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::envelope::{FetchEnvelope, WriteEnvelope};
use super::errors::StoreError;
use super::http::{status_error, HttpClient};
use super::query::QueryParams;
use hrdesk_domain::config::StoreConfig;

/// A patch addressed to one stored record, as sent to the update endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateRecord<P> {
    #[serde(rename = "Id")]
    pub id: RecordId,
    #[serde(flatten)]
    pub patch: P,
}

#[derive(Serialize)]
struct CreateBody<'a, R> {
    records: &'a [R],
}

#[derive(Serialize)]
struct DeleteBody<'a> {
    #[serde(rename = "RecordIds")]
    record_ids: &'a [RecordId],
}

#[derive(Debug, Clone)]
pub struct StoreClient {
    http: HttpClient,
    base_url: String,
}

impl StoreClient {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        if config.base_url.is_empty() {
            return Err(StoreError::Config("store base url is empty".to_string()));
        }
        Ok(Self {
            http: HttpClient::new(config)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches all records in `collection` matching `params`.
    pub async fn query<T>(&self, collection: &str, params: &QueryParams) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}/query", self.base_url, collection);
        let response = self
            .http
            .send(self.http.request(Method::POST, &url).json(params))
            .await?;
        let envelope: FetchEnvelope<Vec<T>> = decode(response).await?;
        if !envelope.success {
            return Err(StoreError::Request(envelope_message(envelope.message)));
        }
        Ok(envelope.data.unwrap_or_default())
    }

    /// Fetches a single record by id. An unsuccessful envelope means the
    /// record does not exist and is reported as `None`, not an error.
    pub async fn get_by_id<T>(
        &self,
        collection: &str,
        id: RecordId,
        params: &QueryParams,
    ) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}/{}/query", self.base_url, collection, id);
        let response = self
            .http
            .send(self.http.request(Method::POST, &url).json(params))
            .await?;
        let envelope: FetchEnvelope<T> = decode(response).await?;
        if !envelope.success {
            return Ok(None);
        }
        Ok(envelope.data)
    }

    /// Inserts the given records and returns them as stored, ids assigned.
    pub async fn create_records<T, R>(&self, collection: &str, records: &[R]) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
        R: Serialize,
    {
        let url = format!("{}/{}", self.base_url, collection);
        let body = CreateBody { records };
        let response = self
            .http
            .send(self.http.request(Method::POST, &url).json(&body))
            .await?;
        collect_written(decode(response).await?)
    }

    /// Applies the given patches and returns the updated records.
    pub async fn update_records<T, P>(
        &self,
        collection: &str,
        updates: &[UpdateRecord<P>],
    ) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let url = format!("{}/{}", self.base_url, collection);
        let body = CreateBody { records: updates };
        let response = self
            .http
            .send(self.http.request(Method::PATCH, &url).json(&body))
            .await?;
        collect_written(decode(response).await?)
    }

    /// Deletes the given records. Missing ids are reported by the store as
    /// record-level failures.
    pub async fn delete_records(&self, collection: &str, ids: &[RecordId]) -> Result<(), StoreError> {
        let url = format!("{}/{}", self.base_url, collection);
        let body = DeleteBody { record_ids: ids };
        let response = self
            .http
            .send(self.http.request(Method::DELETE, &url).json(&body))
            .await?;
        let envelope: WriteEnvelope<serde_json::Value> = decode(response).await?;
        check_write(&envelope)?;
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    let status = response.status();
    if !status.is_success() {
        return Err(status_error(status));
    }
    response
        .json()
        .await
        .map_err(|err| StoreError::Decode(err.to_string()))
}

fn check_write<T>(envelope: &WriteEnvelope<T>) -> Result<(), StoreError> {
    if !envelope.success {
        return Err(StoreError::Request(envelope_message(envelope.message.clone())));
    }
    for result in &envelope.results {
        if !result.success {
            return Err(StoreError::Record(envelope_message(result.message.clone())));
        }
    }
    Ok(())
}

fn collect_written<T>(envelope: WriteEnvelope<T>) -> Result<Vec<T>, StoreError> {
    check_write(&envelope)?;
    envelope
        .results
        .into_iter()
        .map(|result| {
            result
                .data
                .ok_or_else(|| StoreError::Decode("write result is missing record data".to_string()))
        })
        .collect()
}

fn envelope_message(message: Option<String>) -> String {
    message.unwrap_or_else(|| "record store reported a failure".to_string())
}
