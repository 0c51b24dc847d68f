use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;

use crate::error::ProbeError;

/// One GET to perform. `path` is kept for reporting, `url` is what goes on
/// the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub path: String,
    pub url: String,
}

/// Performs a single request and reports whether it met expectations.
///
/// Implementations must capture every failure in the returned error rather
/// than panicking; the caller runs each probe on its own task.
#[async_trait]
pub trait Probe: Send + Sync + 'static {
    async fn probe(&self, request: &ProbeRequest) -> Result<(), ProbeError>;
}

#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
    expected_status: u16,
}

impl HttpProbe {
    #[must_use]
    pub const fn new(client: Client, expected_status: u16) -> Self {
        Self {
            client,
            expected_status,
        }
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn probe(&self, request: &ProbeRequest) -> Result<(), ProbeError> {
        let response = self
            .client
            .get(&request.url)
            .send()
            .await
            .map_err(ProbeError::from_request)?;
        let status = response.status();
        drain_response_body(response)
            .await
            .map_err(ProbeError::from_body)?;
        if status.as_u16() == self.expected_status {
            Ok(())
        } else {
            Err(ProbeError::UnexpectedStatus {
                status,
                expected: self.expected_status,
            })
        }
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
