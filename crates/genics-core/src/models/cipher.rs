use serde::{Deserialize, Serialize};

/// Four cipher values derived deterministically from one text identity.
///
/// - `ordinal`: A=1 … Z=26, summed over letters.
/// - `reduction`: master-preserving digit-sum reduction of `ordinal`.
/// - `reverse`: A=26 … Z=1, summed over letters.
/// - `reverse_reduction`: master-preserving reduction of `reverse`.
///
/// Identical input strings always yield identical sets; case and non-letter
/// characters are ignored, so an empty or all-punctuation identity maps to
/// the zero set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherSet {
    pub ordinal: u32,
    pub reduction: u32,
    pub reverse: u32,
    pub reverse_reduction: u32,
}

impl CipherSet {
    /// The zero set, produced by identities with no letters.
    pub const ZERO: Self = Self {
        ordinal: 0,
        reduction: 0,
        reverse: 0,
        reverse_reduction: 0,
    };

    /// All four values in fixed order, for alignment comparisons.
    pub fn values(&self) -> [u32; 4] {
        [
            self.ordinal,
            self.reduction,
            self.reverse,
            self.reverse_reduction,
        ]
    }
}
