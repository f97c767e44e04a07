use crate::cli::ServeArgs;
use crate::infra::{AppState, ConfiguredRelay};
use crate::routes::with_intake_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use ecopick::config::AppConfig;
use ecopick::error::AppError;
use ecopick::telemetry;
use ecopick::workflows::guide::GuideContent;
use ecopick::workflows::pickup::PickupIntakeService;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let relay = Arc::new(ConfiguredRelay::from_config(&config.relay)?);
    let intake_service = Arc::new(PickupIntakeService::new(relay));
    let guide_content = Arc::new(GuideContent::default());

    let app = with_intake_routes(intake_service, guide_content)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "pickup intake service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
