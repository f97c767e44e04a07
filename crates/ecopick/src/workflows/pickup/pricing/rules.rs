use super::super::domain::{sanitize_quantity, CategoryGroup, ItemCategory, Quantities};
use super::table::PriceTable;

/// Basic-category loads at or below this weight are collected free of charge.
pub const FREE_PICKUP_MAX_KG: f64 = 20.0;

pub(crate) struct GroupTotals {
    pub basic_weight: f64,
    pub basic_amount: f64,
    pub additional_amount: f64,
    pub max_reached: bool,
}

pub(crate) fn total_by_group(quantities: &Quantities, table: &PriceTable) -> GroupTotals {
    let mut totals = GroupTotals {
        basic_weight: 0.0,
        basic_amount: 0.0,
        additional_amount: 0.0,
        max_reached: false,
    };

    for category in ItemCategory::ALL {
        let quantity = sanitize_quantity(quantities.get(category));
        let amount = quantity * f64::from(table.unit_price(category));

        match category.group() {
            CategoryGroup::Basic => {
                totals.basic_weight += quantity;
                totals.basic_amount += amount;
            }
            CategoryGroup::Additional => totals.additional_amount += amount,
        }

        if quantity >= category.max_quantity() {
            totals.max_reached = true;
        }
    }

    totals
}

pub(crate) fn is_free_pickup(basic_weight: f64) -> bool {
    basic_weight > 0.0 && basic_weight <= FREE_PICKUP_MAX_KG
}
