mod rules;
mod table;

pub use rules::FREE_PICKUP_MAX_KG;
pub use table::{PriceEntry, PriceTable};

use super::domain::Quantities;
use serde::{Deserialize, Serialize};

/// Stateless calculator turning form quantities into a settlement estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine {
    table: PriceTable,
}

impl PricingEngine {
    pub fn new(table: PriceTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PriceTable {
        &self.table
    }

    /// Upper bounds are trusted from the entry clamp; invalid values count as zero.
    pub fn estimate(&self, quantities: &Quantities) -> SettlementEstimate {
        let totals = rules::total_by_group(quantities, &self.table);
        let is_free_pickup = rules::is_free_pickup(totals.basic_weight);

        let estimated_amount = if is_free_pickup {
            totals.additional_amount
        } else {
            totals.basic_amount + totals.additional_amount
        };

        SettlementEstimate {
            basic_total_weight: totals.basic_weight,
            basic_amount: totals.basic_amount,
            additional_amount: totals.additional_amount,
            is_free_pickup,
            estimated_amount,
            is_minimum_met: totals.basic_weight > 0.0,
            is_max_reached: totals.max_reached,
        }
    }
}

/// Advisory settlement figures; the final amount is fixed at inspection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettlementEstimate {
    pub basic_total_weight: f64,
    pub basic_amount: f64,
    pub additional_amount: f64,
    pub is_free_pickup: bool,
    pub estimated_amount: f64,
    pub is_minimum_met: bool,
    pub is_max_reached: bool,
}

impl SettlementEstimate {
    pub fn fee_type(&self) -> PickupFeeType {
        if self.is_free_pickup {
            PickupFeeType::Free
        } else {
            PickupFeeType::Paid
        }
    }

    /// Bulk loads are still accepted, but support arranges the truck.
    pub fn advisory(&self) -> Option<&'static str> {
        if self.is_max_reached {
            Some("최대 수량에 도달했습니다. 대량 수거는 고객센터로 문의해주세요.")
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickupFeeType {
    Free,
    Paid,
}

impl PickupFeeType {
    pub const fn as_str(self) -> &'static str {
        match self {
            PickupFeeType::Free => "free",
            PickupFeeType::Paid => "paid",
        }
    }
}
