use serde::{Deserialize, Serialize};

/// Integers derived deterministically from one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateNumerology {
    /// Digit sum of the concatenated YYYYMMDD digits.
    pub ymd_sum: u32,
    /// `ymd_sum` reduced to a single digit, master numbers (11/22) preserved.
    pub ymd_reduced: u32,
    /// Ordinal day within the year, 1–366.
    pub day_of_year: u32,
    /// Weekday index, 1 = Monday … 7 = Sunday.
    pub weekday_num: u32,
    /// True when `ymd_reduced` is a master number.
    pub is_master: bool,
}
