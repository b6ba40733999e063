/// Pipeline version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Master numbers preserved unreduced by digit-sum reduction.
pub const MASTER_NUMBERS: [u32; 2] = [11, 22];

/// Check whether a value is a master number.
pub fn is_master_number(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Letters in the cipher alphabet.
pub const ALPHABET_LEN: u32 = 26;
