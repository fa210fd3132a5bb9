//! Fixed-point monetary amounts.
//!
//! Amounts are stored as integer minor units (cents), so summing a collection
//! never accumulates binary floating-point error. Conversion to display form
//! happens only at the formatting boundary.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

const MINOR_PER_MAJOR: i64 = 100;

/// A currency-agnostic monetary quantity in minor units.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn from_minor(minor: i64) -> Self {
        Amount(minor)
    }

    /// Converts a display-form quantity (user input) into minor units,
    /// rounding half away from zero. Negative or non-finite input is rejected;
    /// sign is carried by the transaction kind, never by the amount.
    pub fn from_major(value: f64) -> Result<Self, EngineError> {
        if !value.is_finite() || value < 0.0 {
            return Err(EngineError::InvalidAmount(value));
        }
        Ok(Amount((value * MINOR_PER_MAJOR as f64).round() as i64))
    }

    pub fn minor(&self) -> i64 {
        self.0
    }

    pub fn to_major(&self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR as f64
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 += rhs.0;
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        Amount(self.0 - rhs.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Amount) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(*self))
    }
}

/// Renders an amount with grouped thousands and two decimals, e.g. `1,234.56`.
pub fn format_amount(amount: Amount) -> String {
    let minor = amount.minor();
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.abs();
    let grouped = group_digits(&(abs / MINOR_PER_MAJOR).to_string(), ',');
    format!("{}{}.{:02}", sign, grouped, abs % MINOR_PER_MAJOR)
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_major_rounds_to_minor_units() {
        assert_eq!(Amount::from_major(100.0).unwrap(), Amount::from_minor(10_000));
        assert_eq!(Amount::from_major(0.015).unwrap(), Amount::from_minor(2));
        assert_eq!(Amount::from_major(0.0).unwrap(), Amount::ZERO);
    }

    #[test]
    fn from_major_rejects_negative_and_non_finite() {
        assert!(matches!(
            Amount::from_major(-1.0),
            Err(EngineError::InvalidAmount(_))
        ));
        assert!(matches!(
            Amount::from_major(f64::NAN),
            Err(EngineError::InvalidAmount(_))
        ));
        assert!(matches!(
            Amount::from_major(f64::INFINITY),
            Err(EngineError::InvalidAmount(_))
        ));
    }

    #[test]
    fn formats_with_grouping_and_two_decimals() {
        assert_eq!(format_amount(Amount::from_minor(123_456)), "1,234.56");
        assert_eq!(format_amount(Amount::from_minor(5)), "0.05");
        assert_eq!(format_amount(Amount::from_minor(-9_800)), "-98.00");
        assert_eq!(format_amount(Amount::from_minor(100_000_000)), "1,000,000.00");
    }

    #[test]
    fn arithmetic_stays_in_minor_units() {
        let a = Amount::from_minor(150);
        let b = Amount::from_minor(49);
        assert_eq!((a + b).minor(), 199);
        assert_eq!((a - b).minor(), 101);
    }
}
