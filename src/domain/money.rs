use crate::error::{LoanError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::Sub;

/// A monetary amount.
///
/// Formulas are evaluated in `f64`; results are converted into `Money` exactly once,
/// which is where NaN and infinities produced by degenerate inputs are caught.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Converts a computed value, rejecting NaN, infinities and out-of-range magnitudes.
    pub fn from_f64(value: f64) -> Result<Self> {
        Decimal::from_f64_retain(value).map(Self).ok_or_else(|| {
            LoanError::ArithmeticDegeneracy(format!("{value} is not a representable amount"))
        })
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }

    /// Drops the fractional part.
    pub fn trunc(self) -> Self {
        Self(self.0.trunc())
    }

    /// Amount paid over `count` equal instalments.
    pub fn times(self, count: u64) -> Result<Self> {
        self.0
            .checked_mul(Decimal::from(count))
            .map(Self)
            .ok_or_else(|| overflow("repayment total"))
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or_else(|| overflow("payment sum"))
    }

    /// Whole units, ties to even.
    pub fn whole_units(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
    }
}

fn overflow(what: &str) -> LoanError {
    LoanError::ArithmeticDegeneracy(format!("{what} overflows the supported range"))
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.whole_units().normalize())
    }
}
