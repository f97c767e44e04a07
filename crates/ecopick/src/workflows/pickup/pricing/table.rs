use serde::Serialize;

use super::super::domain::{CategoryGroup, ItemCategory, QuantityUnit};

/// Unit prices in won, per kilogram or per unit depending on the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTable {
    clothing: u32,
    shoes: u32,
    bags: u32,
    cookware: u32,
    computer: u32,
    monitor: u32,
    phone: u32,
}

impl PriceTable {
    pub const fn standard() -> Self {
        Self {
            clothing: 350,
            shoes: 400,
            bags: 700,
            cookware: 200,
            computer: 3000,
            monitor: 1000,
            phone: 500,
        }
    }

    pub const fn unit_price(&self, category: ItemCategory) -> u32 {
        match category {
            ItemCategory::Clothing => self.clothing,
            ItemCategory::Shoes => self.shoes,
            ItemCategory::Bags => self.bags,
            ItemCategory::Cookware => self.cookware,
            ItemCategory::Computer => self.computer,
            ItemCategory::Monitor => self.monitor,
            ItemCategory::Phone => self.phone,
        }
    }

    pub fn entries(&self) -> Vec<PriceEntry> {
        ItemCategory::ALL
            .into_iter()
            .map(|category| PriceEntry {
                category,
                label: category.label(),
                group: category.group(),
                unit: category.unit(),
                unit_price: self.unit_price(category),
                max_quantity: category.max_quantity(),
            })
            .collect()
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Published row of the price table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceEntry {
    pub category: ItemCategory,
    pub label: &'static str,
    pub group: CategoryGroup,
    pub unit: QuantityUnit,
    pub unit_price: u32,
    pub max_quantity: f64,
}
