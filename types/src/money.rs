use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A non-negative currency amount in integer cents.
///
/// Amounts are summed as integers so the revenue cards never pick up
/// floating-point noise; `Display` renders two decimal places.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Cents(u64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub const fn new(cents: u64) -> Self {
        Cents(cents)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Cents>>(iter: I) -> Cents {
        iter.fold(Cents::ZERO, Add::add)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_two_decimal_places() {
        assert_eq!(Cents::new(2999).to_string(), "29.99");
        assert_eq!(Cents::new(5998).to_string(), "59.98");
        assert_eq!(Cents::new(100).to_string(), "1.00");
        assert_eq!(Cents::new(5).to_string(), "0.05");
        assert_eq!(Cents::ZERO.to_string(), "0.00");
    }

    #[test]
    fn summation_is_exact() {
        let total: Cents = [2999, 2999].into_iter().map(Cents::new).sum();
        assert_eq!(total, Cents::new(5998));
        assert_eq!(total.to_string(), "59.98");

        let empty: Cents = std::iter::empty().sum();
        assert_eq!(empty, Cents::ZERO);
    }
}
