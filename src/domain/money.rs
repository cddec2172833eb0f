//! Lossless rupee amounts backed by rust_decimal.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount in Indian rupees.
///
/// Backed by rust_decimal so fare arithmetic never drifts.
/// Serializes to a JSON number.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Rupees(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Rupees {
    /// Whole-rupee amount.
    pub fn new(whole: i64) -> Self {
        Rupees(Decimal::from(whole))
    }

    /// Plain decimal string without trailing zeros or exponent.
    pub fn to_canonical_string(&self) -> String {
        format!("{}", self.0.normalize())
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.to_canonical_string())
    }
}

impl std::ops::Sub for Rupees {
    type Output = Rupees;

    fn sub(self, rhs: Rupees) -> Rupees {
        Rupees(self.0 - rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupees_display_has_symbol() {
        assert_eq!(Rupees::new(62).to_string(), "₹62");
        assert_eq!(Rupees(Decimal::new(550, 2)).to_string(), "₹5.5");
    }

    #[test]
    fn test_rupees_difference() {
        assert_eq!(Rupees::new(62) - Rupees::new(20), Rupees::new(42));
        assert_eq!(Rupees::new(20) - Rupees::new(62), Rupees::new(-42));
    }

    #[test]
    fn test_rupees_json_is_number() {
        let json = serde_json::to_value(Rupees(Decimal::new(555, 1))).unwrap();
        assert!(json.is_number());
        assert_eq!(json.to_string(), "55.5");
    }
}
