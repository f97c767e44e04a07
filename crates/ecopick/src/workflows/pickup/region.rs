use serde::{Deserialize, Serialize};

const AVAILABLE_REGIONS: [&str; 6] = ["부천", "인천", "시흥", "안산", "광명", "김포"];

/// Islands and outlying districts inside otherwise served cities.
const EXCLUDED_REGIONS: [&str; 5] = ["거북섬", "대부도", "영흥", "강화", "옹진"];

/// Service-area verdict for an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionStatus {
    Unknown,
    Available,
    Unavailable,
}

impl RegionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            RegionStatus::Unknown => "unknown",
            RegionStatus::Available => "available",
            RegionStatus::Unavailable => "unavailable",
        }
    }

    pub const fn notice(self) -> Option<&'static str> {
        match self {
            RegionStatus::Unavailable => {
                Some("죄송합니다. 해당 지역은 현재 수거 서비스 지역이 아닙니다.")
            }
            RegionStatus::Unknown | RegionStatus::Available => None,
        }
    }
}

/// Place-name lists matched against address text.
///
/// Matching is plain, case-sensitive substring containment. Exclusions are
/// checked first so a carved-out district loses even when its city is listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCatalog {
    available: Vec<String>,
    excluded: Vec<String>,
}

impl RegionCatalog {
    pub fn new<A, E>(available: A, excluded: E) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            available: available.into_iter().map(Into::into).collect(),
            excluded: excluded.into_iter().map(Into::into).collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new(AVAILABLE_REGIONS, EXCLUDED_REGIONS)
    }

    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    pub fn check(&self, address: &str) -> RegionStatus {
        if address.is_empty() {
            return RegionStatus::Unknown;
        }

        if self
            .excluded
            .iter()
            .any(|name| address.contains(name.as_str()))
        {
            return RegionStatus::Unavailable;
        }

        if self
            .available
            .iter()
            .any(|name| address.contains(name.as_str()))
        {
            RegionStatus::Available
        } else {
            RegionStatus::Unavailable
        }
    }
}

impl Default for RegionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
