use serde::{Deserialize, Deserializer, Serialize};

/// Item classes accepted on a pickup request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Clothing,
    Shoes,
    Bags,
    Cookware,
    Computer,
    Monitor,
    Phone,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 7] = [
        ItemCategory::Clothing,
        ItemCategory::Shoes,
        ItemCategory::Bags,
        ItemCategory::Cookware,
        ItemCategory::Computer,
        ItemCategory::Monitor,
        ItemCategory::Phone,
    ];

    pub const fn group(self) -> CategoryGroup {
        match self {
            ItemCategory::Clothing | ItemCategory::Shoes | ItemCategory::Bags => {
                CategoryGroup::Basic
            }
            ItemCategory::Cookware
            | ItemCategory::Computer
            | ItemCategory::Monitor
            | ItemCategory::Phone => CategoryGroup::Additional,
        }
    }

    pub const fn unit(self) -> QuantityUnit {
        match self {
            ItemCategory::Computer | ItemCategory::Monitor | ItemCategory::Phone => {
                QuantityUnit::Unit
            }
            _ => QuantityUnit::Kilogram,
        }
    }

    /// Largest quantity the intake form accepts for this category.
    pub const fn max_quantity(self) -> f64 {
        match self.unit() {
            QuantityUnit::Kilogram => MAX_WEIGHT_KG,
            QuantityUnit::Unit => MAX_UNIT_COUNT,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ItemCategory::Clothing => "의류",
            ItemCategory::Shoes => "신발",
            ItemCategory::Bags => "가방",
            ItemCategory::Cookware => "냄비/프라이팬",
            ItemCategory::Computer => "컴퓨터",
            ItemCategory::Monitor => "모니터",
            ItemCategory::Phone => "휴대폰",
        }
    }
}

pub const MAX_WEIGHT_KG: f64 = 500.0;
pub const MAX_UNIT_COUNT: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryGroup {
    Basic,
    Additional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityUnit {
    Kilogram,
    Unit,
}

impl QuantityUnit {
    pub const fn suffix(self) -> &'static str {
        match self {
            QuantityUnit::Kilogram => "kg",
            QuantityUnit::Unit => "대",
        }
    }
}

/// Per-category amounts entered on the intake form.
///
/// Every field deserializes leniently: numbers and numeric strings are read
/// as-is, anything else collapses to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Quantities {
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub clothing_kg: f64,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub shoes_kg: f64,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub bags_kg: f64,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub cookware_kg: f64,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub computers: f64,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub monitors: f64,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub phones: f64,
}

impl Quantities {
    pub fn get(&self, category: ItemCategory) -> f64 {
        match category {
            ItemCategory::Clothing => self.clothing_kg,
            ItemCategory::Shoes => self.shoes_kg,
            ItemCategory::Bags => self.bags_kg,
            ItemCategory::Cookware => self.cookware_kg,
            ItemCategory::Computer => self.computers,
            ItemCategory::Monitor => self.monitors,
            ItemCategory::Phone => self.phones,
        }
    }

    pub fn set(&mut self, category: ItemCategory, value: f64) {
        let slot = match category {
            ItemCategory::Clothing => &mut self.clothing_kg,
            ItemCategory::Shoes => &mut self.shoes_kg,
            ItemCategory::Bags => &mut self.bags_kg,
            ItemCategory::Cookware => &mut self.cookware_kg,
            ItemCategory::Computer => &mut self.computers,
            ItemCategory::Monitor => &mut self.monitors,
            ItemCategory::Phone => &mut self.phones,
        };
        *slot = value;
    }

    /// Applies the entry-point clamp to every category.
    pub fn clamped(self) -> Self {
        let mut clamped = self;
        for category in ItemCategory::ALL {
            clamped.set(category, clamp_quantity(category, self.get(category)));
        }
        clamped
    }
}

/// Collapses negative, NaN and infinite values to zero.
pub fn sanitize_quantity(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parses free-form text the way the form field does: anything that is not a
/// number becomes zero.
pub fn coerce_quantity(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .map(sanitize_quantity)
        .unwrap_or(0.0)
}

pub fn clamp_quantity(category: ItemCategory, value: f64) -> f64 {
    sanitize_quantity(value).min(category.max_quantity())
}

fn lenient_quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match value {
        serde_json::Value::Number(number) => number.as_f64().map(sanitize_quantity),
        serde_json::Value::String(raw) => Some(coerce_quantity(&raw)),
        _ => None,
    };
    Ok(parsed.unwrap_or(0.0))
}

/// How the collector meets the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickupType {
    Visit,
    Contactless,
}

impl PickupType {
    pub const fn label(self) -> &'static str {
        match self {
            PickupType::Visit => "방문 수거",
            PickupType::Contactless => "비대면 수거",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    pub const fn label(self) -> &'static str {
        match self {
            TimeSlot::Morning => "오전 (9:00-12:00)",
            TimeSlot::Afternoon => "오후 (13:00-18:00)",
            TimeSlot::Evening => "저녁 (18:00-21:00)",
        }
    }
}
