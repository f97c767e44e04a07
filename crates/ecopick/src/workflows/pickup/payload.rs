use serde::Serialize;

use super::domain::{ItemCategory, PickupType, QuantityUnit};
use super::pricing::SettlementEstimate;
use super::session::IntakeSession;

/// Row appended to the intake spreadsheet by the relay endpoint.
///
/// Quantities travel as display strings with their unit suffix so the sheet
/// can be read without the price table at hand.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub pickup_type: &'static str,
    pub address: String,
    pub address_detail: String,
    pub phone: String,
    pub clothes: String,
    pub shoes: String,
    pub bags: String,
    pub cookware: String,
    pub computers: String,
    pub monitors: String,
    pub phones: String,
    pub basic_total_weight: String,
    pub pickup_fee_type: &'static str,
    pub basic_amount: f64,
    pub additional_amount: f64,
    pub estimated_amount: f64,
    pub preferred_date: String,
    pub preferred_time: &'static str,
    pub entrance_password: String,
    pub vehicle_registration: String,
}

impl SubmissionPayload {
    pub fn from_session(session: &IntakeSession, estimate: &SettlementEstimate) -> Self {
        let quantities = session.quantities();
        let quantity = |category: ItemCategory| {
            with_suffix(quantities.get(category), category.unit())
        };

        Self {
            // An unselected type is filed as contactless.
            pickup_type: session
                .pickup_type()
                .unwrap_or(PickupType::Contactless)
                .label(),
            address: session.address().to_string(),
            address_detail: session.address_detail().to_string(),
            phone: session.phone().to_string(),
            clothes: quantity(ItemCategory::Clothing),
            shoes: quantity(ItemCategory::Shoes),
            bags: quantity(ItemCategory::Bags),
            cookware: quantity(ItemCategory::Cookware),
            computers: quantity(ItemCategory::Computer),
            monitors: quantity(ItemCategory::Monitor),
            phones: quantity(ItemCategory::Phone),
            basic_total_weight: with_suffix(estimate.basic_total_weight, QuantityUnit::Kilogram),
            pickup_fee_type: estimate.fee_type().as_str(),
            basic_amount: estimate.basic_amount,
            additional_amount: estimate.additional_amount,
            estimated_amount: estimate.estimated_amount,
            preferred_date: session
                .preferred_date()
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            preferred_time: session
                .preferred_time()
                .map(|slot| slot.label())
                .unwrap_or(""),
            entrance_password: session.entrance_password().to_string(),
            vehicle_registration: session.vehicle_registration().to_string(),
        }
    }
}

fn with_suffix(value: f64, unit: QuantityUnit) -> String {
    format!("{}{}", value, unit.suffix())
}
