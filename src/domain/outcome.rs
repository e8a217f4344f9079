use super::money::Money;
use super::schedule::DifferentiatedSchedule;

/// A month count split into whole years and remaining months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepaymentTerm {
    pub years: u64,
    pub months: u64,
}

impl RepaymentTerm {
    pub fn from_months(total: u64) -> Self {
        Self {
            years: total / 12,
            months: total % 12,
        }
    }
}

/// Result of a single loan calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum LoanResult {
    /// Months needed to repay a principal with a fixed payment.
    ///
    /// The overpayment multiplies the payment truncated to whole units, whereas
    /// [`LoanResult::PeriodicPayment`] uses the ceiling. Both are kept as-is.
    NumberOfPeriods { months: u64, overpayment: Money },
    PeriodicPayment { payment: Money, overpayment: Money },
    PrincipalAmount { principal: Money },
    DifferentiatedSchedule(DifferentiatedSchedule),
}
