use chrono::NaiveDate;
use ecopick::config::RelayConfig;
use ecopick::workflows::pickup::{
    DispatchReceipt, HttpSubmissionRelay, RelayError, SubmissionPayload, SubmissionRelay,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Stand-in relay for deployments without a spreadsheet endpoint. Only the
/// fee summary is logged; contact details never reach the log stream.
#[derive(Default, Clone)]
pub(crate) struct LoggingRelay {
    dispatched: Arc<AtomicUsize>,
}

impl LoggingRelay {
    #[cfg(test)]
    pub(crate) fn dispatched(&self) -> usize {
        self.dispatched.load(Ordering::Relaxed)
    }
}

impl SubmissionRelay for LoggingRelay {
    fn dispatch(
        &self,
        payload: SubmissionPayload,
    ) -> impl Future<Output = Result<DispatchReceipt, RelayError>> + Send {
        let dispatched = self.dispatched.clone();

        async move {
            let sequence = dispatched.fetch_add(1, Ordering::Relaxed) + 1;
            info!(
                sequence,
                pickup_type = payload.pickup_type,
                fee_type = payload.pickup_fee_type,
                estimated_amount = payload.estimated_amount,
                "no relay endpoint configured; pickup request logged only"
            );
            Ok(DispatchReceipt::now())
        }
    }
}

#[derive(Clone)]
pub(crate) enum ConfiguredRelay {
    Http(HttpSubmissionRelay),
    Logging(LoggingRelay),
}

impl ConfiguredRelay {
    pub(crate) fn from_config(config: &RelayConfig) -> Result<Self, RelayError> {
        match config.endpoint.as_deref() {
            Some(endpoint) => {
                let relay = HttpSubmissionRelay::new(endpoint, config.timeout())?;
                info!(host = relay.endpoint().host_str(), "pickup relay endpoint configured");
                Ok(Self::Http(relay))
            }
            None => {
                warn!("PICKUP_RELAY_URL not set; pickup requests will only be logged");
                Ok(Self::Logging(LoggingRelay::default()))
            }
        }
    }
}

impl SubmissionRelay for ConfiguredRelay {
    fn dispatch(
        &self,
        payload: SubmissionPayload,
    ) -> impl Future<Output = Result<DispatchReceipt, RelayError>> + Send {
        let relay = self.clone();

        async move {
            match relay {
                ConfiguredRelay::Http(http) => http.dispatch(payload).await,
                ConfiguredRelay::Logging(logging) => logging.dispatch(payload).await,
            }
        }
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn logging_relay_counts_dispatches() {
        let relay = ConfiguredRelay::from_config(&RelayConfig {
            endpoint: None,
            timeout_secs: 10,
        })
        .expect("logging relay");

        let ConfiguredRelay::Logging(logging) = &relay else {
            panic!("expected logging relay");
        };

        relay
            .dispatch(SubmissionPayload::default())
            .await
            .expect("dispatch succeeds");
        relay
            .dispatch(SubmissionPayload::default())
            .await
            .expect("dispatch succeeds");

        assert_eq!(logging.dispatched(), 2);
    }

    #[test]
    fn configured_endpoint_selects_http_relay() {
        let config = RelayConfig {
            endpoint: Some("https://script.example.com/macros/s/abc/exec".to_string()),
            timeout_secs: 3,
        };
        assert_eq!(config.timeout(), Duration::from_secs(3));

        let relay = ConfiguredRelay::from_config(&config).expect("http relay");
        assert!(matches!(relay, ConfiguredRelay::Http(_)));
    }

    #[test]
    fn parse_date_trims_and_reports_bad_input() {
        assert_eq!(
            parse_date(" 2026-10-19 "),
            Ok(NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date"))
        );
        assert!(parse_date("19/10/2026").is_err());
    }
}
