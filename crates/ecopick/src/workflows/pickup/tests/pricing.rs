use super::common::*;
use crate::workflows::pickup::domain::{ItemCategory, Quantities};
use crate::workflows::pickup::pricing::{PickupFeeType, PriceTable, FREE_PICKUP_MAX_KG};

#[test]
fn basic_totals_are_exact_for_whole_kilograms() {
    let engine = engine();
    for (clothing, shoes, bags) in [(0.0, 0.0, 1.0), (37.0, 12.0, 9.0), (500.0, 500.0, 500.0)] {
        let estimate = engine.estimate(&quantities(clothing, shoes, bags));
        assert_eq!(estimate.basic_total_weight, clothing + shoes + bags);
        assert_eq!(
            estimate.basic_amount,
            350.0 * clothing + 400.0 * shoes + 700.0 * bags
        );
    }
}

#[test]
fn additional_categories_use_their_own_unit_prices() {
    let estimate = engine().estimate(&Quantities {
        cookware_kg: 4.0,
        computers: 2.0,
        monitors: 3.0,
        phones: 5.0,
        ..Quantities::default()
    });

    assert_eq!(estimate.additional_amount, 800.0 + 6000.0 + 3000.0 + 2500.0);
    assert_eq!(estimate.basic_amount, 0.0);
}

#[test]
fn free_pickup_boundary_is_inclusive_at_twenty_kilograms() {
    let engine = engine();

    assert!(!engine.estimate(&quantities(0.0, 0.0, 0.0)).is_free_pickup);
    assert!(engine.estimate(&quantities(0.5, 0.0, 0.0)).is_free_pickup);
    assert!(engine.estimate(&quantities(10.0, 5.0, 5.0)).is_free_pickup);
    assert!(!engine.estimate(&quantities(10.0, 5.0, 6.0)).is_free_pickup);
    assert_eq!(FREE_PICKUP_MAX_KG, 20.0);
}

#[test]
fn free_pickup_settles_only_additional_items() {
    let estimate = engine().estimate(&Quantities {
        clothing_kg: 12.0,
        bags_kg: 4.0,
        phones: 2.0,
        ..Quantities::default()
    });

    assert!(estimate.is_free_pickup);
    assert_eq!(estimate.basic_amount, 12.0 * 350.0 + 4.0 * 700.0);
    assert_eq!(estimate.estimated_amount, estimate.additional_amount);
    assert_eq!(estimate.estimated_amount, 1000.0);
    assert_eq!(estimate.fee_type(), PickupFeeType::Free);
}

#[test]
fn paid_pickup_sums_both_groups() {
    let estimate = engine().estimate(&Quantities {
        clothing_kg: 21.0,
        monitors: 1.0,
        ..Quantities::default()
    });

    assert!(!estimate.is_free_pickup);
    assert_eq!(estimate.estimated_amount, 21.0 * 350.0 + 1000.0);
    assert_eq!(estimate.fee_type(), PickupFeeType::Paid);
}

#[test]
fn minimum_requires_basic_weight_even_with_additional_items() {
    let estimate = engine().estimate(&Quantities {
        cookware_kg: 5.0,
        ..Quantities::default()
    });

    assert!(!estimate.is_minimum_met);
    assert_eq!(estimate.additional_amount, 1000.0);
    assert!(!estimate.is_free_pickup);
}

#[test]
fn max_reached_flags_any_capped_category() {
    let engine = engine();

    assert!(!engine.estimate(&quantities(499.0, 0.0, 0.0)).is_max_reached);
    assert!(engine.estimate(&quantities(0.0, 500.0, 0.0)).is_max_reached);

    let phones_capped = engine.estimate(&Quantities {
        clothing_kg: 3.0,
        phones: 100.0,
        ..Quantities::default()
    });
    assert!(phones_capped.is_max_reached);
    assert!(phones_capped.is_minimum_met);
    assert!(phones_capped.advisory().is_some());

    let cookware_capped = engine.estimate(&Quantities {
        cookware_kg: 500.0,
        ..Quantities::default()
    });
    assert!(cookware_capped.is_max_reached);
    assert!(engine.estimate(&quantities(1.0, 0.0, 0.0)).advisory().is_none());
}

#[test]
fn invalid_values_count_as_zero() {
    let estimate = engine().estimate(&Quantities {
        clothing_kg: -10.0,
        shoes_kg: f64::NAN,
        bags_kg: f64::INFINITY,
        computers: 1.0,
        ..Quantities::default()
    });

    assert_eq!(estimate.basic_total_weight, 0.0);
    assert_eq!(estimate.basic_amount, 0.0);
    assert_eq!(estimate.additional_amount, 3000.0);
    assert!(!estimate.is_minimum_met);
}

#[test]
fn estimate_is_idempotent() {
    let engine = engine();
    let input = Quantities {
        clothing_kg: 33.5,
        shoes_kg: 2.0,
        monitors: 1.0,
        ..Quantities::default()
    };

    let first = engine.estimate(&input);
    let second = engine.estimate(&input);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).expect("serializes"),
        serde_json::to_vec(&second).expect("serializes")
    );
}

#[test]
fn published_table_lists_every_category() {
    let entries = PriceTable::standard().entries();

    assert_eq!(entries.len(), ItemCategory::ALL.len());
    let computer = entries
        .iter()
        .find(|entry| entry.category == ItemCategory::Computer)
        .expect("computer row");
    assert_eq!(computer.unit_price, 3000);
    assert_eq!(computer.max_quantity, 100.0);
    let bags = entries
        .iter()
        .find(|entry| entry.category == ItemCategory::Bags)
        .expect("bags row");
    assert_eq!(bags.unit_price, 700);
    assert_eq!(bags.max_quantity, 500.0);
}
