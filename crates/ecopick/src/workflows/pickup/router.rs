use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::domain::Quantities;
use super::relay::SubmissionRelay;
use super::service::{PickupIntakeService, PickupRequest};
use crate::error::AppError;

/// Router builder exposing the intake form's calculator and submit endpoints.
pub fn pickup_router<S>(service: Arc<PickupIntakeService<S>>) -> Router
where
    S: SubmissionRelay + 'static,
{
    Router::new()
        .route("/api/v1/pickup/prices", get(prices_handler::<S>))
        .route("/api/v1/pickup/estimate", post(estimate_handler::<S>))
        .route("/api/v1/pickup/region", post(region_handler::<S>))
        .route("/api/v1/pickup/date", post(date_handler::<S>))
        .route("/api/v1/pickup/requests", post(submit_handler::<S>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegionQuery {
    #[serde(default)]
    pub(crate) address: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DateQuery {
    pub(crate) date: NaiveDate,
}

pub(crate) async fn prices_handler<S>(
    State(service): State<Arc<PickupIntakeService<S>>>,
) -> Response
where
    S: SubmissionRelay + 'static,
{
    let entries = service.engine().table().entries();
    (StatusCode::OK, Json(json!({ "prices": entries }))).into_response()
}

pub(crate) async fn estimate_handler<S>(
    State(service): State<Arc<PickupIntakeService<S>>>,
    Json(quantities): Json<Quantities>,
) -> Response
where
    S: SubmissionRelay + 'static,
{
    let estimate = service.estimate(&quantities);
    let payload = json!({
        "estimate": estimate,
        "pickup_fee_type": estimate.fee_type(),
        "advisory": estimate.advisory(),
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn region_handler<S>(
    State(service): State<Arc<PickupIntakeService<S>>>,
    Json(query): Json<RegionQuery>,
) -> Response
where
    S: SubmissionRelay + 'static,
{
    let status = service.check_region(&query.address);
    let payload = json!({
        "address": query.address,
        "status": status,
        "notice": status.notice(),
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn date_handler<S>(
    State(service): State<Arc<PickupIntakeService<S>>>,
    Json(query): Json<DateQuery>,
) -> Response
where
    S: SubmissionRelay + 'static,
{
    match service.check_date(query.date) {
        Ok(date) => (
            StatusCode::OK,
            Json(json!({ "accepted": true, "date": date })),
        )
            .into_response(),
        Err(rejection) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "accepted": false,
                "date": query.date,
                "error": rejection.to_string(),
                "notice": rejection.notice(),
            })),
        )
            .into_response(),
    }
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<PickupIntakeService<S>>>,
    Json(request): Json<PickupRequest>,
) -> Response
where
    S: SubmissionRelay + 'static,
{
    match service.submit(request).await {
        Ok(receipt) => (StatusCode::ACCEPTED, Json(receipt)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}
