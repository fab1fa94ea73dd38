use engine_logging::{engine_debug, engine_info, engine_warn, redacted};
use estimator_core::ProjectType;
use futures_util::StreamExt;

use crate::records::{parse_error_message, parse_records_body};
use crate::{ConnectError, ConnectorSettings};

#[async_trait::async_trait]
pub trait Connector: Send + Sync {
    /// Read the project-type table for `dataset_id` using `token`.
    ///
    /// Empty credentials fail with [`ConnectError::MissingCredentials`]
    /// before any request is made.
    async fn connect(
        &self,
        token: &str,
        dataset_id: &str,
    ) -> Result<Vec<ProjectType>, ConnectError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestConnector {
    settings: ConnectorSettings,
}

impl ReqwestConnector {
    pub fn new(settings: ConnectorSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ConnectError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ConnectError::Network(err.to_string()))
    }

    /// `{api_base}/{dataset_id}/{table}` with each segment percent-encoded.
    fn table_url(&self, dataset_id: &str) -> Result<reqwest::Url, ConnectError> {
        let api_base = &self.settings.api_base;
        let mut url = reqwest::Url::parse(api_base)
            .map_err(|err| ConnectError::InvalidEndpoint(format!("{api_base}: {err}")))?;
        url.path_segments_mut()
            .map_err(|_| ConnectError::InvalidEndpoint(api_base.clone()))?
            .pop_if_empty()
            .push(dataset_id)
            .push(&self.settings.table);
        Ok(url)
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, ConnectError> {
        let max_bytes = self.settings.max_body_bytes;
        if let Some(len) = response.content_length() {
            if len > max_bytes {
                return Err(too_large(max_bytes));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            if body.len() as u64 + chunk.len() as u64 > max_bytes {
                return Err(too_large(max_bytes));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait::async_trait]
impl Connector for ReqwestConnector {
    async fn connect(
        &self,
        token: &str,
        dataset_id: &str,
    ) -> Result<Vec<ProjectType>, ConnectError> {
        let token = token.trim();
        let dataset_id = dataset_id.trim();
        if token.is_empty() || dataset_id.is_empty() {
            return Err(ConnectError::MissingCredentials);
        }

        let url = self.table_url(dataset_id)?;
        let client = self.build_client()?;
        engine_info!("Connecting to {} token={}", url, redacted(token));

        let response = client
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            // The error body is best effort; a read failure still reports the status.
            let body = self.read_body(response).await.unwrap_or_default();
            let message = parse_error_message(&body)
                .unwrap_or_else(|| format!("Connection failed: {}", status.as_u16()));
            engine_warn!("Connect failed with status {}: {}", status.as_u16(), message);
            return Err(ConnectError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = self.read_body(response).await?;
        let project_types = parse_records_body(&body)?;
        engine_debug!("Received {} bytes", body.len());
        engine_info!("Loaded {} project types", project_types.len());
        Ok(project_types)
    }
}

fn too_large(max_bytes: u64) -> ConnectError {
    ConnectError::Parse(format!("response too large (max {max_bytes} bytes)"))
}

fn map_reqwest_error(err: reqwest::Error) -> ConnectError {
    if err.is_timeout() {
        return ConnectError::Network(format!("request timed out: {err}"));
    }
    ConnectError::Network(err.to_string())
}
