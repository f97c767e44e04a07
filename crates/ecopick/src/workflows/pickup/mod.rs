//! Pickup intake: settlement estimate, service-area check, pickup date rule,
//! and the relay that forwards accepted requests.

pub mod domain;
pub mod error;
pub mod payload;
pub mod pricing;
pub mod region;
pub mod relay;
pub mod router;
pub mod schedule;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use domain::{
    clamp_quantity, coerce_quantity, CategoryGroup, ItemCategory, PickupType, Quantities,
    QuantityUnit, TimeSlot,
};
pub use error::IntakeError;
pub use payload::SubmissionPayload;
pub use pricing::{PickupFeeType, PriceTable, PricingEngine, SettlementEstimate};
pub use region::{RegionCatalog, RegionStatus};
pub use relay::{DispatchReceipt, HttpSubmissionRelay, RelayError, SubmissionRelay};
pub use router::pickup_router;
pub use schedule::{check_pickup_date, DateRejection, CLOSED_WEEKDAY};
pub use service::{PickupIntakeService, PickupRequest, SubmissionReceipt, SubmissionStatus};
pub use session::{Eligibility, IntakeSession};
