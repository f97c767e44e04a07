use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{
    clamp_quantity, coerce_quantity, ItemCategory, PickupType, Quantities, TimeSlot,
};
use super::pricing::{PricingEngine, SettlementEstimate};
use super::region::{RegionCatalog, RegionStatus};
use super::relay::{DispatchReceipt, RelayError};
use super::schedule::{check_pickup_date, DateRejection};
use super::error::IntakeError;

/// State of one intake form from opening until it is closed or submitted.
///
/// Totals and eligibility are never stored; they are recomputed from the
/// current fields on every call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeSession {
    quantities: Quantities,
    address: String,
    address_detail: String,
    phone: String,
    pickup_type: Option<PickupType>,
    preferred_date: Option<NaiveDate>,
    preferred_time: Option<TimeSlot>,
    entrance_password: String,
    vehicle_registration: String,
    is_submitting: bool,
}

/// Snapshot of what the form shows next to the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Eligibility {
    pub estimate: SettlementEstimate,
    pub region: RegionStatus,
    pub can_submit: bool,
}

impl IntakeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the clamped value and returns it.
    pub fn set_quantity(&mut self, category: ItemCategory, value: f64) -> f64 {
        let clamped = clamp_quantity(category, value);
        self.quantities.set(category, clamped);
        clamped
    }

    pub fn set_quantity_text(&mut self, category: ItemCategory, raw: &str) -> f64 {
        self.set_quantity(category, coerce_quantity(raw))
    }

    pub fn set_quantities(&mut self, quantities: Quantities) {
        self.quantities = quantities.clamped();
    }

    pub fn quantities(&self) -> &Quantities {
        &self.quantities
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_address_detail(&mut self, detail: impl Into<String>) {
        self.address_detail = detail.into();
    }

    pub fn address_detail(&self) -> &str {
        &self.address_detail
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn set_pickup_type(&mut self, pickup_type: Option<PickupType>) {
        self.pickup_type = pickup_type;
    }

    pub fn pickup_type(&self) -> Option<PickupType> {
        self.pickup_type
    }

    /// Commits the date unless it falls on the closed weekday, in which case
    /// the previously selected date stays in place.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<NaiveDate, DateRejection> {
        let accepted = check_pickup_date(date)?;
        self.preferred_date = Some(accepted);
        Ok(accepted)
    }

    pub fn preferred_date(&self) -> Option<NaiveDate> {
        self.preferred_date
    }

    pub fn set_preferred_time(&mut self, slot: Option<TimeSlot>) {
        self.preferred_time = slot;
    }

    pub fn preferred_time(&self) -> Option<TimeSlot> {
        self.preferred_time
    }

    pub fn set_entrance_password(&mut self, password: impl Into<String>) {
        self.entrance_password = password.into();
    }

    pub fn entrance_password(&self) -> &str {
        &self.entrance_password
    }

    pub fn set_vehicle_registration(&mut self, registration: impl Into<String>) {
        self.vehicle_registration = registration.into();
    }

    pub fn vehicle_registration(&self) -> &str {
        &self.vehicle_registration
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn estimate(&self, engine: &PricingEngine) -> SettlementEstimate {
        engine.estimate(&self.quantities)
    }

    pub fn region_status(&self, regions: &RegionCatalog) -> RegionStatus {
        regions.check(&self.address)
    }

    pub fn evaluate(&self, engine: &PricingEngine, regions: &RegionCatalog) -> Eligibility {
        let estimate = self.estimate(engine);
        let region = self.region_status(regions);
        let can_submit = estimate.is_minimum_met
            && region != RegionStatus::Unavailable
            && !self.is_submitting;

        Eligibility {
            estimate,
            region,
            can_submit,
        }
    }

    pub fn can_submit(&self, engine: &PricingEngine, regions: &RegionCatalog) -> bool {
        self.evaluate(engine, regions).can_submit
    }

    /// Marks the form as submitting once every gate passes.
    pub fn begin_submission(
        &mut self,
        engine: &PricingEngine,
        regions: &RegionCatalog,
    ) -> Result<Eligibility, IntakeError> {
        if self.is_submitting {
            return Err(IntakeError::SubmissionInProgress);
        }

        let eligibility = self.evaluate(engine, regions);
        if !eligibility.estimate.is_minimum_met {
            return Err(IntakeError::MinimumNotMet);
        }
        if eligibility.region == RegionStatus::Unavailable {
            return Err(IntakeError::RegionUnavailable);
        }

        self.is_submitting = true;
        Ok(eligibility)
    }

    /// A dispatched request clears the form; a transport failure keeps the
    /// entered data so the customer can retry.
    pub fn finish_submission(&mut self, outcome: &Result<DispatchReceipt, RelayError>) {
        match outcome {
            Ok(_) => self.reset(),
            Err(_) => self.is_submitting = false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
