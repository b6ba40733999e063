use chrono::{Datelike, NaiveDate};

use genics_core::config::JujuConfig;
use genics_core::models::{AlignmentFeatures, BirthdayAlignment, CipherSet, DateNumerology};

/// Extract alignment features from a cipher set and a date's numerology.
///
/// `ritual_strength` falls linearly from 1.0 at proximity zero to 0.0 at the
/// configured ritual band, so it increases monotonically as proximity shrinks
/// and saturates at 1.0 on a ritual hit.
pub fn alignment_of(
    cipher: &CipherSet,
    numerology: &DateNumerology,
    config: &JujuConfig,
) -> AlignmentFeatures {
    // The zero set (letterless identity) matches nothing.
    let exact_match = cipher.values().iter().any(|&c| {
        c > 0 && (c == numerology.ymd_reduced || c % 100 == numerology.day_of_year % 100)
    });

    let ritual_proximity = cipher
        .values()
        .iter()
        .flat_map(|&c| {
            config
                .ritual_numbers
                .iter()
                .map(move |&r| c.abs_diff(r))
        })
        .min()
        .unwrap_or(u32::MAX);

    let ritual_hit = ritual_proximity == 0;
    let ritual_strength = if ritual_proximity == u32::MAX {
        0.0
    } else {
        (1.0 - ritual_proximity as f64 / config.ritual_band).clamp(0.0, 1.0)
    };

    AlignmentFeatures {
        exact_match,
        ritual_proximity,
        ritual_hit,
        ritual_strength,
    }
}

/// Day distance from the event date to the nearest birth anniversary.
///
/// Anniversaries in the event year and both neighboring years are considered,
/// so a late-December birthday sits close to an early-January event. Feb 29
/// anniversaries fall on Mar 1 in common years.
pub fn birthday_alignment(birth_date: NaiveDate, event_date: NaiveDate) -> BirthdayAlignment {
    let diff_days = (event_date.year() - 1..=event_date.year() + 1)
        .filter_map(|year| anniversary_in(birth_date, year))
        .map(|anniv| (event_date - anniv).num_days().unsigned_abs() as u32)
        .min()
        .unwrap_or(u32::MAX);

    BirthdayAlignment {
        exact: diff_days == 0,
        within_week: diff_days <= 7,
        diff_days,
    }
}

fn anniversary_in(birth_date: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}
