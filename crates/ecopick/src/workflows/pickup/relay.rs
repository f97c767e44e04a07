use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::payload::SubmissionPayload;

const USER_AGENT: &str = concat!("ecopick/", env!("CARGO_PKG_VERSION"));

/// Proof that the payload left the process. The endpoint's answer is opaque,
/// so this never implies the request was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DispatchReceipt {
    pub dispatched_at: DateTime<Utc>,
}

impl DispatchReceipt {
    pub fn now() -> Self {
        Self {
            dispatched_at: Utc::now(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("submission relay misconfigured: {0}")]
    Configuration(String),
    #[error("submission relay transport failed: {0}")]
    Transport(String),
}

/// Outbound hand-off of accepted pickup requests.
pub trait SubmissionRelay: Send + Sync {
    fn dispatch(
        &self,
        payload: SubmissionPayload,
    ) -> impl Future<Output = Result<DispatchReceipt, RelayError>> + Send;
}

/// Posts payloads as JSON to a spreadsheet script endpoint.
#[derive(Debug, Clone)]
pub struct HttpSubmissionRelay {
    http: reqwest::Client,
    endpoint: reqwest::Url,
}

impl HttpSubmissionRelay {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, RelayError> {
        let endpoint = reqwest::Url::parse(endpoint)
            .map_err(|err| RelayError::Configuration(format!("invalid endpoint: {err}")))?;
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|err| RelayError::Configuration(err.to_string()))?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }
}

impl SubmissionRelay for HttpSubmissionRelay {
    fn dispatch(
        &self,
        payload: SubmissionPayload,
    ) -> impl Future<Output = Result<DispatchReceipt, RelayError>> + Send {
        let http = self.http.clone();
        let endpoint = self.endpoint.clone();

        async move {
            let response = http
                .post(endpoint)
                .json(&payload)
                .send()
                .await
                .map_err(|err| RelayError::Transport(err.to_string()))?;

            // Status and body are not part of the contract with the script endpoint.
            debug!(status = %response.status(), "submission relay responded");
            Ok(DispatchReceipt::now())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_endpoint() {
        match HttpSubmissionRelay::new("not a url", Duration::from_secs(1)) {
            Err(RelayError::Configuration(message)) => assert!(message.contains("endpoint")),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn keeps_parsed_endpoint() {
        let relay = HttpSubmissionRelay::new(
            "https://script.example.com/macros/s/abc/exec",
            Duration::from_secs(5),
        )
        .expect("relay builds");
        assert_eq!(relay.endpoint().host_str(), Some("script.example.com"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_surfaces_transport_error() {
        let relay = HttpSubmissionRelay::new("http://127.0.0.1:9/exec", Duration::from_secs(2))
            .expect("relay builds");

        match relay.dispatch(SubmissionPayload::default()).await {
            Err(RelayError::Transport(_)) => {}
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
