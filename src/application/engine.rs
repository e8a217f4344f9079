use crate::domain::loan::{LoanRequest, Unknown};
use crate::domain::money::Money;
use crate::domain::outcome::LoanResult;
use crate::domain::schedule::DifferentiatedSchedule;
use crate::domain::scheme::Scheme;
use crate::error::{LoanError, Result};
use tracing::debug;

/// Entry point for loan calculations.
///
/// The engine holds no state; a single instance can serve any number of requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct AmortizationEngine;

impl AmortizationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Validates `request` and runs the calculation it selects.
    ///
    /// Returns `Ok(None)` for an annuity request that does not populate exactly two of
    /// principal, payment and periods.
    pub fn calculate(&self, request: &LoanRequest) -> Result<Option<LoanResult>> {
        request.validate()?;
        let Some(scheme) = request.scheme else {
            return Err(LoanError::InvalidRequest("missing payment type".to_string()));
        };
        let rate = request.monthly_rate();
        debug!(%scheme, monthly_rate = rate, "dispatching loan request");

        let result = match scheme {
            Scheme::Differentiated => {
                differentiated_schedule(request.principal, periods(request)?, rate)?
            }
            Scheme::Annuity => match request.unknown() {
                Some(Unknown::Periods) => {
                    number_of_periods(request.principal, request.payment, rate)?
                }
                Some(Unknown::Payment) => {
                    annuity_payment(request.principal, periods(request)?, rate)?
                }
                Some(Unknown::Principal) => {
                    principal_amount(request.payment, periods(request)?, rate)?
                }
                None => {
                    debug!("annuity request does not leave exactly one unknown");
                    return Ok(None);
                }
            },
        };
        Ok(Some(result))
    }
}

fn periods(request: &LoanRequest) -> Result<u32> {
    u32::try_from(request.periods).map_err(|_| {
        LoanError::ArithmeticDegeneracy(format!(
            "{} periods is outside the supported range",
            request.periods
        ))
    })
}

fn degenerate(reason: impl Into<String>) -> LoanError {
    LoanError::ArithmeticDegeneracy(reason.into())
}

/// `(1 + rate)^periods`, guarding the inputs every annuity formula divides by.
fn growth(periods: u32, monthly_rate: f64) -> Result<f64> {
    if periods == 0 {
        return Err(degenerate("number of periods must be positive"));
    }
    if monthly_rate <= 0.0 {
        return Err(degenerate("interest rate must be positive"));
    }
    let growth = (1.0 + monthly_rate).powf(f64::from(periods));
    if !growth.is_finite() || growth <= 1.0 {
        return Err(degenerate(format!(
            "growth factor {growth} over {periods} periods is unusable"
        )));
    }
    Ok(growth)
}

/// Differentiated plan for `principal` over `periods` months.
///
/// Each month's payment is rounded up before it is added to the total.
pub fn differentiated_schedule(
    principal: f64,
    periods: u32,
    monthly_rate: f64,
) -> Result<LoanResult> {
    let schedule = DifferentiatedSchedule::new(principal, periods, monthly_rate)?;
    Ok(LoanResult::DifferentiatedSchedule(schedule))
}

/// Fixed monthly payment, rounded up, and the overpayment it implies.
pub fn annuity_payment(principal: f64, periods: u32, monthly_rate: f64) -> Result<LoanResult> {
    let growth = growth(periods, monthly_rate)?;
    let payment = principal * monthly_rate * growth / (growth - 1.0);
    let payment = Money::from_f64(payment.ceil())?;
    let overpayment = payment.times(u64::from(periods))? - Money::from_f64(principal)?;

    Ok(LoanResult::PeriodicPayment {
        payment,
        overpayment,
    })
}

/// Months needed to repay `principal` with a fixed `payment`.
///
/// The overpayment is computed from the payment truncated to whole units.
pub fn number_of_periods(principal: f64, payment: f64, monthly_rate: f64) -> Result<LoanResult> {
    if monthly_rate <= 0.0 {
        return Err(degenerate("interest rate must be positive"));
    }
    let interest = monthly_rate * principal;
    if payment <= interest {
        return Err(degenerate(format!(
            "monthly payment {payment} does not cover the monthly interest {interest}"
        )));
    }

    let n = (payment / (payment - interest)).ln() / (1.0 + monthly_rate).ln();
    if !n.is_finite() || n < 0.0 {
        return Err(degenerate(format!("{n} is not a usable number of periods")));
    }
    let months = n.ceil() as u64;
    debug!(exact = n, months, "solved number of periods");

    let total = Money::from_f64(payment)?.trunc().times(months)?;
    let overpayment = total - Money::from_f64(principal)?;
    Ok(LoanResult::NumberOfPeriods {
        months,
        overpayment,
    })
}

/// Principal that a fixed `payment` over `periods` months repays.
pub fn principal_amount(payment: f64, periods: u32, monthly_rate: f64) -> Result<LoanResult> {
    let growth = growth(periods, monthly_rate)?;
    let principal = payment / (monthly_rate * growth / (growth - 1.0));

    Ok(LoanResult::PrincipalAmount {
        principal: Money::from_f64(principal)?,
    })
}
