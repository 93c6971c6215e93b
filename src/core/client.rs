use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Raw outcome of a single downstream call, before any classification.
/// `Status` means the downstream answered and said no; `Network` means it
/// never produced a usable response at all.
#[derive(Debug, Clone)]
pub enum TransportFailure {
    Status { status: u16, body: String },
    Network { detail: String },
}

/// One-shot HTTP access to a single downstream service. Performs exactly one
/// attempt per call: no retries, no circuit breaking. Classifying failures is
/// the translator's job, so every non-2xx answer is captured verbatim.
pub struct DownstreamClient {
    service: &'static str,
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl DownstreamClient {
    pub fn new(
        service: &'static str,
        base_url: impl Into<String>,
        client: Client,
        timeout: Duration,
    ) -> Self {
        Self {
            service,
            base_url: base_url.into(),
            client,
            timeout,
        }
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, TransportFailure> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Calling {} API on URL: {}", self.service, url);

        let mut request = self.client.get(&url).timeout(self.timeout);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(network_failure)?;
        let status = response.status();
        if !status.is_success() {
            return Err(capture_status(status.as_u16(), response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| TransportFailure::Network {
                detail: format!("Failed to decode response body: {}", e),
            })
    }

    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, TransportFailure> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Posting to {} API on URL: {}", self.service, url);

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
            .map_err(network_failure)?;

        let status = response.status();
        if !status.is_success() {
            return Err(capture_status(status.as_u16(), response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| TransportFailure::Network {
                detail: format!("Failed to decode response body: {}", e),
            })
    }

    pub async fn delete(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<(), TransportFailure> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Calling {} delete API on URL: {}", self.service, url);

        let mut request = self.client.delete(&url).timeout(self.timeout);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(network_failure)?;
        let status = response.status();
        if !status.is_success() {
            return Err(capture_status(status.as_u16(), response).await);
        }

        Ok(())
    }
}

fn network_failure(e: reqwest::Error) -> TransportFailure {
    let detail = if e.is_timeout() {
        format!("Request timed out: {}", e)
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        format!("Request failed: {}", e)
    };
    TransportFailure::Network { detail }
}

async fn capture_status(status: u16, response: reqwest::Response) -> TransportFailure {
    // A body that cannot be read is captured as empty rather than turning a
    // status failure into a network one.
    let body = response.text().await.unwrap_or_default();
    TransportFailure::Status { status, body }
}
