use serde::{Deserialize, Serialize};

/// Features from comparing a cipher set against a date's numerology.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentFeatures {
    /// Any cipher value equals `ymd_reduced`, or matches `day_of_year` mod 100.
    pub exact_match: bool,
    /// Minimum absolute distance from any cipher value to a ritual number.
    pub ritual_proximity: u32,
    /// `ritual_proximity == 0`.
    pub ritual_hit: bool,
    /// Saturating strength in [0, 1]; 1.0 at proximity zero, falling linearly
    /// to 0.0 at the configured ritual band.
    pub ritual_strength: f64,
}

/// Proximity of an event date to a subject's birth anniversary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayAlignment {
    /// Event falls on the anniversary itself.
    pub exact: bool,
    /// Event falls within seven days of the anniversary.
    pub within_week: bool,
    /// Absolute day distance to the nearest anniversary.
    pub diff_days: u32,
}

impl BirthdayAlignment {
    /// The neutral alignment used when no birth date is known.
    pub fn none() -> Self {
        Self {
            exact: false,
            within_week: false,
            diff_days: u32::MAX,
        }
    }
}
