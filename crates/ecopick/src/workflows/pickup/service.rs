use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::{PickupType, Quantities, TimeSlot};
use super::error::IntakeError;
use super::payload::SubmissionPayload;
use super::pricing::{PricingEngine, SettlementEstimate};
use super::region::{RegionCatalog, RegionStatus};
use super::relay::SubmissionRelay;
use super::schedule::{check_pickup_date, DateRejection};
use super::session::IntakeSession;

/// Everything the intake form collects, as sent by a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PickupRequest {
    #[serde(default)]
    pub pickup_type: Option<PickupType>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub address_detail: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub quantities: Quantities,
    #[serde(default)]
    pub preferred_date: Option<NaiveDate>,
    #[serde(default)]
    pub preferred_time: Option<TimeSlot>,
    #[serde(default)]
    pub entrance_password: String,
    #[serde(default)]
    pub vehicle_registration: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Dispatched,
}

/// Response for an accepted request. `Dispatched` is the strongest claim the
/// service can make about delivery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionReceipt {
    pub status: SubmissionStatus,
    pub dispatched_at: DateTime<Utc>,
    pub estimate: SettlementEstimate,
    pub region: RegionStatus,
}

/// Service composing the price table, the service-area catalog, and the relay.
pub struct PickupIntakeService<S> {
    engine: PricingEngine,
    regions: RegionCatalog,
    relay: Arc<S>,
}

impl<S> PickupIntakeService<S>
where
    S: SubmissionRelay + 'static,
{
    pub fn new(relay: Arc<S>) -> Self {
        Self::with_catalog(PricingEngine::default(), RegionCatalog::standard(), relay)
    }

    pub fn with_catalog(engine: PricingEngine, regions: RegionCatalog, relay: Arc<S>) -> Self {
        Self {
            engine,
            regions,
            relay,
        }
    }

    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    pub fn regions(&self) -> &RegionCatalog {
        &self.regions
    }

    /// Quantities are clamped as they would be at the form fields.
    pub fn estimate(&self, quantities: &Quantities) -> SettlementEstimate {
        self.engine.estimate(&quantities.clamped())
    }

    pub fn check_region(&self, address: &str) -> RegionStatus {
        self.regions.check(address)
    }

    pub fn check_date(&self, date: NaiveDate) -> Result<NaiveDate, DateRejection> {
        check_pickup_date(date)
    }

    /// Replays a request into a fresh session, rejecting a closed-day date.
    pub fn open_session(&self, request: PickupRequest) -> Result<IntakeSession, IntakeError> {
        let PickupRequest {
            pickup_type,
            address,
            address_detail,
            phone,
            quantities,
            preferred_date,
            preferred_time,
            entrance_password,
            vehicle_registration,
        } = request;

        let mut session = IntakeSession::new();
        session.set_pickup_type(pickup_type);
        session.set_address(address);
        session.set_address_detail(address_detail);
        session.set_phone(phone);
        session.set_quantities(quantities);
        if let Some(date) = preferred_date {
            session.select_date(date)?;
        }
        session.set_preferred_time(preferred_time);
        session.set_entrance_password(entrance_password);
        session.set_vehicle_registration(vehicle_registration);

        Ok(session)
    }

    /// Validate, price, and relay a pickup request.
    pub async fn submit(&self, request: PickupRequest) -> Result<SubmissionReceipt, IntakeError> {
        let mut session = self.open_session(request)?;
        let eligibility = session.begin_submission(&self.engine, &self.regions)?;
        let payload = SubmissionPayload::from_session(&session, &eligibility.estimate);

        let outcome = self.relay.dispatch(payload).await;
        session.finish_submission(&outcome);

        match outcome {
            Ok(receipt) => {
                info!(
                    region = eligibility.region.label(),
                    fee_type = eligibility.estimate.fee_type().as_str(),
                    basic_total_weight = eligibility.estimate.basic_total_weight,
                    estimated_amount = eligibility.estimate.estimated_amount,
                    max_reached = eligibility.estimate.is_max_reached,
                    "pickup request dispatched"
                );
                Ok(SubmissionReceipt {
                    status: SubmissionStatus::Dispatched,
                    dispatched_at: receipt.dispatched_at,
                    estimate: eligibility.estimate,
                    region: eligibility.region,
                })
            }
            Err(err) => {
                warn!(error = %err, "pickup request relay failed");
                Err(IntakeError::Relay(err))
            }
        }
    }
}
