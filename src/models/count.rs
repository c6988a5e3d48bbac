//! Exact address counts.

use serde::Serialize;

/// Decimal form of 2^128, one past `u128::MAX`.
const TWO_POW_128: &str = "340282366920938463463374607431768211456";

/// A count of addresses equal to `2^exponent`, exponent in `0..=128`.
///
/// An IPv6 `/0` holds 2^128 addresses, which does not fit in a `u128`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct AddressCount {
    exponent: u8,
}

impl AddressCount {
    pub fn power_of_two(exponent: u8) -> AddressCount {
        debug_assert!(exponent <= 128);
        AddressCount { exponent }
    }

    /// The count as a `u128`, `None` for 2^128.
    pub fn to_u128(&self) -> Option<u128> {
        1u128.checked_shl(self.exponent as u32)
    }

    /// True if the count is strictly greater than `n`.
    pub fn exceeds(&self, n: u128) -> bool {
        match self.to_u128() {
            Some(count) => count > n,
            None => true,
        }
    }

    /// `count - n`, clamped to `0..=u128::MAX`.
    pub fn saturating_sub(&self, n: u128) -> u128 {
        match self.to_u128() {
            Some(count) => count.saturating_sub(n),
            None if n == 0 => u128::MAX,
            None => u128::MAX - (n - 1),
        }
    }
}

impl std::fmt::Display for AddressCount {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.to_u128() {
            Some(count) => write!(f, "{count}"),
            None => f.write_str(TWO_POW_128),
        }
    }
}

impl Serialize for AddressCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(AddressCount::power_of_two(0).to_string(), "1");
        assert_eq!(AddressCount::power_of_two(24).to_string(), "16777216");
        assert_eq!(
            AddressCount::power_of_two(127).to_string(),
            "170141183460469231731687303715884105728"
        );
        assert_eq!(AddressCount::power_of_two(128).to_string(), TWO_POW_128);
    }

    #[test]
    fn test_arithmetic() {
        let full = AddressCount::power_of_two(128);
        assert_eq!(full.to_u128(), None);
        assert!(full.exceeds(u128::MAX));
        assert_eq!(full.saturating_sub(1), u128::MAX);
        assert_eq!(full.saturating_sub(2), u128::MAX - 1);

        let two = AddressCount::power_of_two(1);
        assert!(!two.exceeds(2));
        assert!(two.exceeds(1));
        assert_eq!(two.saturating_sub(5), 0);
    }
}
