use super::scheme::{Scheme, UnknownScheme};
use crate::error::{LoanError, Result};

/// The annuity field a request asks to solve for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unknown {
    Periods,
    Payment,
    Principal,
}

/// Loan parameters as supplied on the command line.
///
/// Fields left at zero are the ones to solve for. Negative values are representable so
/// that validation can reject them instead of the argument parser.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoanRequest {
    pub principal: f64,
    pub payment: f64,
    pub periods: i64,
    pub annual_interest_percent: f64,
    /// `None` when the supplied payment type was not recognised.
    pub scheme: Option<Scheme>,
}

impl LoanRequest {
    pub fn new(scheme: Scheme) -> Self {
        Self {
            scheme: Some(scheme),
            ..Self::default()
        }
    }

    pub fn with_principal(mut self, principal: f64) -> Self {
        self.principal = principal;
        self
    }

    pub fn with_payment(mut self, payment: f64) -> Self {
        self.payment = payment;
        self
    }

    pub fn with_periods(mut self, periods: i64) -> Self {
        self.periods = periods;
        self
    }

    pub fn with_interest(mut self, annual_interest_percent: f64) -> Self {
        self.annual_interest_percent = annual_interest_percent;
        self
    }

    /// Annual percentage converted to a monthly fraction.
    pub fn monthly_rate(&self) -> f64 {
        self.annual_interest_percent / (12.0 * 100.0)
    }

    pub fn validate(&self) -> Result<()> {
        let Some(scheme) = self.scheme else {
            return Err(invalid(&UnknownScheme.to_string()));
        };

        let amounts = [self.principal, self.payment, self.annual_interest_percent];
        if amounts.iter().any(|v| *v < 0.0) || self.periods < 0 {
            return Err(invalid("loan parameters must not be negative"));
        }

        match scheme {
            Scheme::Differentiated if self.payment > 0.0 => Err(invalid(
                "payment cannot be supplied for differentiated payments",
            )),
            Scheme::Annuity if self.annual_interest_percent <= 0.0 => {
                Err(invalid("interest is required for annuity payments"))
            }
            _ => Ok(()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Which field an annuity request solves for.
    ///
    /// Exactly two of principal, payment and periods must be populated; any other
    /// combination yields `None`.
    pub fn unknown(&self) -> Option<Unknown> {
        match (self.principal > 0.0, self.payment > 0.0, self.periods > 0) {
            (true, true, false) => Some(Unknown::Periods),
            (true, false, true) => Some(Unknown::Payment),
            (false, true, true) => Some(Unknown::Principal),
            _ => None,
        }
    }
}

fn invalid(reason: &str) -> LoanError {
    LoanError::InvalidRequest(reason.to_string())
}
