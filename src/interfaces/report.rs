use crate::domain::money::Money;
use crate::domain::outcome::{LoanResult, RepaymentTerm};
use crate::domain::schedule::DifferentiatedSchedule;
use crate::error::LoanError;
use std::io::{self, Write};

/// Appends an "s" when `count` is greater than one. Zero stays singular.
pub fn period_in_plural(period: &str, count: u64) -> String {
    if count > 1 {
        format!("{period}s")
    } else {
        period.to_string()
    }
}

/// Sentence describing how long repayment takes.
pub fn describe_term(term: RepaymentTerm) -> String {
    let years = format!("{} {}", term.years, period_in_plural("year", term.years));
    let months = format!("{} {}", term.months, period_in_plural("month", term.months));
    match (term.years, term.months) {
        (0, _) => format!("It will take {months} to repay this loan!"),
        (_, 0) => format!("It will take {years} to repay this loan!"),
        _ => format!("It will take {years} and {months} to repay this loan!"),
    }
}

/// Writes human-readable reports to any output sink.
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_result(&mut self, result: &LoanResult) -> io::Result<()> {
        match result {
            LoanResult::NumberOfPeriods {
                months,
                overpayment,
            } => {
                let term = RepaymentTerm::from_months(*months);
                writeln!(self.writer, "{}", describe_term(term))?;
                self.write_overpayment(*overpayment)?;
            }
            LoanResult::PeriodicPayment {
                payment,
                overpayment,
            } => {
                writeln!(self.writer, "Your monthly payment = {payment}!")?;
                self.write_overpayment(*overpayment)?;
            }
            LoanResult::PrincipalAmount { principal } => {
                writeln!(self.writer, "Your loan principal = {principal}!")?;
            }
            LoanResult::DifferentiatedSchedule(schedule) => self.write_schedule(schedule)?,
        }
        self.writer.flush()
    }

    pub fn write_rejection(&mut self, error: &LoanError) -> io::Result<()> {
        writeln!(self.writer, "{error}")?;
        self.writer.flush()
    }

    // One line per month as it is computed; the total is summed along the way.
    fn write_schedule(&mut self, schedule: &DifferentiatedSchedule) -> io::Result<()> {
        let mut total = Money::ZERO;
        for (month, payment) in (1u64..).zip(schedule.payments()) {
            let payment = payment.map_err(io::Error::other)?;
            writeln!(self.writer, "Month {month}: payment is {payment}")?;
            total = total.checked_add(payment).map_err(io::Error::other)?;
        }
        self.write_overpayment(schedule.overpayment(total))
    }

    fn write_overpayment(&mut self, overpayment: Money) -> io::Result<()> {
        writeln!(self.writer, "Overpayment = {overpayment}")
    }
}
