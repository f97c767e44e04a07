use super::common::*;
use crate::workflows::pickup::region::{RegionCatalog, RegionStatus};
use crate::workflows::pickup::session::IntakeSession;

#[test]
fn listed_city_is_available() {
    assert_eq!(regions().check("부천시 원미구"), RegionStatus::Available);
    assert_eq!(
        regions().check("인천광역시 남동구 구월동"),
        RegionStatus::Available
    );
}

#[test]
fn exclusion_wins_over_inclusion() {
    assert_eq!(regions().check("안산시 거북섬"), RegionStatus::Unavailable);
    assert_eq!(regions().check("안산시 단원구"), RegionStatus::Available);
}

#[test]
fn empty_address_is_unknown() {
    assert_eq!(regions().check(""), RegionStatus::Unknown);
}

#[test]
fn whitespace_address_is_unavailable_and_blocks_submission() {
    assert_eq!(regions().check("   "), RegionStatus::Unavailable);

    let mut session = IntakeSession::new();
    session.set_quantities(quantities(5.0, 0.0, 0.0));
    session.set_address("   ");

    let eligibility = session.evaluate(&engine(), &regions());
    assert_eq!(eligibility.region, RegionStatus::Unavailable);
    assert!(!eligibility.can_submit);
}

#[test]
fn unlisted_address_is_unavailable() {
    let status = regions().check("서울 강남구");
    assert_eq!(status, RegionStatus::Unavailable);
    assert!(status.notice().is_some());
}

#[test]
fn matching_is_substring_based_and_case_sensitive() {
    let catalog = RegionCatalog::new(["Bucheon"], ["Island"]);

    assert_eq!(catalog.check("12 Bucheon-ro"), RegionStatus::Available);
    assert_eq!(catalog.check("12 bucheon-ro"), RegionStatus::Unavailable);
    assert_eq!(catalog.check("Bucheon Island"), RegionStatus::Unavailable);
    assert_eq!(catalog.check("Bucheon island"), RegionStatus::Available);
}
