use super::money::Money;
use crate::error::{LoanError, Result};

/// Differentiated repayment plan: the principal is repaid in equal parts and interest is
/// charged on the remaining balance.
///
/// Payments are produced lazily so that a long plan can be written out month by month
/// without holding it in memory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifferentiatedSchedule {
    principal: f64,
    periods: u32,
    monthly_rate: f64,
    borrowed: Money,
}

impl DifferentiatedSchedule {
    /// Checks that every payment and their sum are representable.
    ///
    /// The first payment is the largest one, so bounding it bounds the whole plan.
    pub fn new(principal: f64, periods: u32, monthly_rate: f64) -> Result<Self> {
        if periods == 0 {
            return Err(LoanError::ArithmeticDegeneracy(
                "number of periods must be positive".to_string(),
            ));
        }
        let borrowed = Money::from_f64(principal)?;
        let schedule = Self {
            principal,
            periods,
            monthly_rate,
            borrowed,
        };
        schedule.payment(1)?.times(u64::from(periods))?;
        Ok(schedule)
    }

    pub fn periods(&self) -> u32 {
        self.periods
    }

    /// Payment for month `month` (1-based), rounded up to a whole unit.
    fn payment(&self, month: u32) -> Result<Money> {
        let n = f64::from(self.periods);
        let repaid = self.principal * f64::from(month - 1) / n;
        let payment = self.principal / n + self.monthly_rate * (self.principal - repaid);
        Money::from_f64(payment.ceil())
    }

    /// Payments for months `1..=periods`, in order.
    pub fn payments(&self) -> impl Iterator<Item = Result<Money>> + '_ {
        (1..=self.periods).map(|month| self.payment(month))
    }

    /// Overpayment once `total_paid` has been paid over the whole plan.
    pub fn overpayment(&self, total_paid: Money) -> Money {
        total_paid - self.borrowed
    }
}
