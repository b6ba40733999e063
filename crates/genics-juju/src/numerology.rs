use chrono::{Datelike, NaiveDate};

use genics_core::constants::is_master_number;
use genics_core::errors::{ScoreError, ScoreResult};
use genics_core::models::DateNumerology;

use crate::reduce::{digit_sum, reduce_master};

/// Derive the numerology of one calendar date.
///
/// Years outside 1–9999 are refused: the YYYYMMDD digit expansion is only
/// defined for four-digit years, and nothing upstream produces dates outside
/// that range.
pub fn numerology_of(date: NaiveDate) -> ScoreResult<DateNumerology> {
    let year = date.year();
    if !(1..=9999).contains(&year) {
        return Err(ScoreError::DateOutOfRange {
            field: "date".to_string(),
            value: date.to_string(),
        });
    }

    let ymd_sum = digit_sum(year as u32) + digit_sum(date.month()) + digit_sum(date.day());
    let ymd_reduced = reduce_master(ymd_sum);

    Ok(DateNumerology {
        ymd_sum,
        ymd_reduced,
        day_of_year: date.ordinal(),
        weekday_num: date.weekday().number_from_monday(),
        is_master: is_master_number(ymd_reduced),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_date() {
        // 2025-01-01: 2+0+2+5 + 0+1 + 0+1 = 11, a master number.
        let n = numerology_of(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).unwrap();
        assert_eq!(n.ymd_sum, 11);
        assert_eq!(n.ymd_reduced, 11);
        assert!(n.is_master);
        assert_eq!(n.day_of_year, 1);
        assert_eq!(n.weekday_num, 3); // A Wednesday.
    }

    #[test]
    fn reduction_and_ordinal() {
        // 2024-12-31: 2+0+2+4 + 1+2 + 3+1 = 15 → 6.
        let n = numerology_of(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()).unwrap();
        assert_eq!(n.ymd_sum, 15);
        assert_eq!(n.ymd_reduced, 6);
        assert!(!n.is_master);
        assert_eq!(n.day_of_year, 366); // 2024 is a leap year.
        assert_eq!(n.weekday_num, 2); // A Tuesday.
    }

    #[test]
    fn ancient_dates_refused() {
        let date = NaiveDate::from_ymd_opt(0, 1, 1).unwrap();
        let err = numerology_of(date).unwrap_err();
        assert!(matches!(err, ScoreError::DateOutOfRange { .. }));
    }

    #[test]
    fn deterministic() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 7).unwrap();
        assert_eq!(numerology_of(date).unwrap(), numerology_of(date).unwrap());
    }
}
