//! Integer currency amounts.

use serde::{Deserialize, Serialize};

/// An amount in whole currency units.
///
/// Prices at the counter have no fractional part, so the amount is kept as a
/// plain integer and serialized as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a new amount.
    pub fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Returns the raw amount.
    pub fn amount(&self) -> i64 {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    pub fn checked_mul(&self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(i64::from(quantity)).map(Money)
    }

    /// Adds another amount, returning `None` on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_is_plain_integer() {
        assert_eq!(Money::new(4500).to_string(), "4500");
        assert_eq!(Money::zero().to_string(), "0");
    }

    #[test]
    fn test_money_checked_mul() {
        assert_eq!(Money::new(1000).checked_mul(3), Some(Money::new(3000)));
        assert_eq!(Money::new(i64::MAX).checked_mul(2), None);
    }

    #[test]
    fn test_money_checked_add() {
        assert_eq!(
            Money::new(1000).checked_add(Money::new(500)),
            Some(Money::new(1500))
        );
        assert_eq!(Money::new(i64::MAX).checked_add(Money::new(1)), None);
    }

    #[test]
    fn test_money_running_total_stops_at_overflow() {
        let lines = [Money::new(2000), Money::new(3000)];
        let total = lines
            .iter()
            .try_fold(Money::zero(), |acc, line| acc.checked_add(*line));
        assert_eq!(total, Some(Money::new(5000)));

        let lines = [Money::new(i64::MAX), Money::new(1)];
        let total = lines
            .iter()
            .try_fold(Money::zero(), |acc, line| acc.checked_add(*line));
        assert_eq!(total, None);
    }

    #[test]
    fn test_money_serializes_as_number() {
        let json = serde_json::to_string(&Money::new(3000)).unwrap();
        assert_eq!(json, "3000");
        let back: Money = serde_json::from_str("3000").unwrap();
        assert_eq!(back, Money::new(3000));
    }

    #[test]
    fn test_money_zero() {
        assert!(Money::zero().is_zero());
        assert!(Money::default().is_zero());
        assert!(!Money::new(-5).is_zero());
    }
}
