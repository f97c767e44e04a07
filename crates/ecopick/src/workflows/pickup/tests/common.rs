use std::future::Future;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::pickup::domain::{PickupType, Quantities, TimeSlot};
use crate::workflows::pickup::payload::SubmissionPayload;
use crate::workflows::pickup::pricing::PricingEngine;
use crate::workflows::pickup::region::RegionCatalog;
use crate::workflows::pickup::relay::{DispatchReceipt, RelayError, SubmissionRelay};
use crate::workflows::pickup::service::{PickupIntakeService, PickupRequest};

pub(super) fn engine() -> PricingEngine {
    PricingEngine::default()
}

pub(super) fn regions() -> RegionCatalog {
    RegionCatalog::standard()
}

pub(super) fn quantities(clothing: f64, shoes: f64, bags: f64) -> Quantities {
    Quantities {
        clothing_kg: clothing,
        shoes_kg: shoes,
        bags_kg: bags,
        ..Quantities::default()
    }
}

/// Weekday in the service calendar (Tuesday).
pub(super) fn open_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 20).expect("valid date")
}

pub(super) fn sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 25).expect("valid date")
}

pub(super) fn request() -> PickupRequest {
    PickupRequest {
        pickup_type: Some(PickupType::Visit),
        address: "경기 부천시 원미구 길주로 1".to_string(),
        address_detail: "101동 1001호".to_string(),
        phone: "010-1234-5678".to_string(),
        quantities: Quantities {
            clothing_kg: 30.0,
            shoes_kg: 5.0,
            bags_kg: 2.0,
            computers: 1.0,
            ..Quantities::default()
        },
        preferred_date: Some(open_date()),
        preferred_time: Some(TimeSlot::Morning),
        entrance_password: "#1234".to_string(),
        vehicle_registration: String::new(),
    }
}

#[derive(Default, Clone)]
pub(super) struct RecordingRelay {
    payloads: Arc<Mutex<Vec<SubmissionPayload>>>,
}

impl RecordingRelay {
    pub(super) fn payloads(&self) -> Vec<SubmissionPayload> {
        self.payloads.lock().expect("relay mutex poisoned").clone()
    }
}

impl SubmissionRelay for RecordingRelay {
    fn dispatch(
        &self,
        payload: SubmissionPayload,
    ) -> impl Future<Output = Result<DispatchReceipt, RelayError>> + Send {
        self.payloads
            .lock()
            .expect("relay mutex poisoned")
            .push(payload);
        async { Ok(DispatchReceipt::now()) }
    }
}

pub(super) struct OfflineRelay;

impl SubmissionRelay for OfflineRelay {
    fn dispatch(
        &self,
        _payload: SubmissionPayload,
    ) -> impl Future<Output = Result<DispatchReceipt, RelayError>> + Send {
        async {
            Err(RelayError::Transport(
                "error sending request: connection refused".to_string(),
            ))
        }
    }
}

pub(super) fn build_service() -> (PickupIntakeService<RecordingRelay>, Arc<RecordingRelay>) {
    let relay = Arc::new(RecordingRelay::default());
    let service = PickupIntakeService::new(relay.clone());
    (service, relay)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
