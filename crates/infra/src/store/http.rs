//! Retrying HTTP transport for the record store
//!
//! Wraps a [`reqwest::Client`] configured from [`StoreConfig`] with the
//! project and authorization headers every request carries. Server errors
//! and transport failures are retried with bounded exponential backoff;
//! client errors are returned to the caller untouched.

use std::time::Duration;

use hrdesk_domain::config::StoreConfig;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use tracing::warn;

use super::errors::StoreError;

const MAX_ATTEMPTS: u32 = 3;
const BASE_BACKOFF_MS: u64 = 200;

/// HTTP client with store credentials and retry behaviour baked in.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Project-Id",
            HeaderValue::from_str(&config.project_id)
                .map_err(|err| StoreError::Config(format!("invalid project id: {}", err)))?,
        );
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|err| StoreError::Config(format!("invalid api key: {}", err)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|err| StoreError::Config(format!("failed to build http client: {}", err)))?;
        Ok(Self { inner })
    }

    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.inner.request(method, url)
    }

    /// Sends the request, retrying on 5xx responses and transport errors.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, StoreError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let request = builder
                .try_clone()
                .ok_or_else(|| StoreError::Transport("request body is not replayable".to_string()))?;
            match request.send().await {
                Ok(response) if response.status().is_server_error() && attempt < MAX_ATTEMPTS => {
                    warn!(
                        status = %response.status(),
                        attempt,
                        "record store returned a server error, retrying"
                    );
                }
                Ok(response) => return Ok(response),
                Err(err) if attempt < MAX_ATTEMPTS => {
                    warn!(error = %err, attempt, "record store request failed, retrying");
                }
                Err(err) => return Err(err.into()),
            }
            tokio::time::sleep(backoff(attempt)).await;
        }
    }
}

fn backoff(attempt: u32) -> Duration {
    Duration::from_millis(BASE_BACKOFF_MS * u64::from(2u32.saturating_pow(attempt - 1)))
}

pub(super) fn status_error(status: StatusCode) -> StoreError {
    StoreError::Transport(format!("record store returned status {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(base_url: &str) -> StoreConfig {
        StoreConfig {
            base_url: base_url.to_string(),
            project_id: "proj-1".to_string(),
            api_key: "secret".to_string(),
            timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn attaches_project_and_authorization_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(header("X-Project-Id", "proj-1"))
            .and(header("Authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(&config(&server.uri())).unwrap();
        let response = client
            .send(client.request(Method::GET, &format!("{}/ping", server.uri())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn retries_server_errors_until_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/flaky"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/flaky"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = HttpClient::new(&config(&server.uri())).unwrap();
        let response = client
            .send(client.request(Method::GET, &format!("{}/flaky", server.uri())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn client_errors_are_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(&config(&server.uri())).unwrap();
        let response = client
            .send(client.request(Method::GET, &format!("{}/missing", server.uri())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
