use genics_core::constants::is_master_number;

/// Sum of decimal digits.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeated digit-sum reduction to a single digit, preserving the master
/// numbers 11 and 22 unreduced.
pub fn reduce_master(mut n: u32) -> u32 {
    while n > 9 && !is_master_number(n) {
        n = digit_sum(n);
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_sums() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(9), 9);
        assert_eq!(digit_sum(96), 15);
        assert_eq!(digit_sum(20250101), 11);
    }

    #[test]
    fn reduction_stops_at_masters() {
        assert_eq!(reduce_master(11), 11);
        assert_eq!(reduce_master(22), 22);
        // 29 → 11, caught on the way down.
        assert_eq!(reduce_master(29), 11);
        assert_eq!(reduce_master(96), 6);
        assert_eq!(reduce_master(7), 7);
        assert_eq!(reduce_master(0), 0);
    }
}
