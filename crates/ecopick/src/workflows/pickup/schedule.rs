use chrono::{Datelike, NaiveDate, Weekday};

/// Collectors do not run on this weekday.
pub const CLOSED_WEEKDAY: Weekday = Weekday::Sun;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateRejection {
    #[error("pickups are not scheduled on Sundays ({date})")]
    ClosedWeekday { date: NaiveDate },
}

impl DateRejection {
    pub fn notice(&self) -> &'static str {
        match self {
            DateRejection::ClosedWeekday { .. } => {
                "일요일은 수거가 불가능합니다. 다른 날짜를 선택해주세요."
            }
        }
    }
}

pub fn check_pickup_date(date: NaiveDate) -> Result<NaiveDate, DateRejection> {
    if date.weekday() == CLOSED_WEEKDAY {
        return Err(DateRejection::ClosedWeekday { date });
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_is_rejected() {
        let sunday = NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date");
        assert_eq!(sunday.weekday(), Weekday::Sun);
        assert_eq!(
            check_pickup_date(sunday),
            Err(DateRejection::ClosedWeekday { date: sunday })
        );
    }

    #[test]
    fn saturday_and_monday_are_accepted() {
        let saturday = NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date");
        let monday = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
        assert_eq!(check_pickup_date(saturday), Ok(saturday));
        assert_eq!(check_pickup_date(monday), Ok(monday));
    }
}
