use crate::domain::loan::LoanRequest;
use crate::domain::scheme::Scheme;
use clap::Parser;

/// Loan calculator for annuity and differentiated repayment schemes.
///
/// Supply three of principal, payment, periods and interest; the missing one is computed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Annual interest rate, in percent
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub interest: f64,

    /// Fixed monthly payment
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub payment: f64,

    /// Number of monthly payments
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub periods: i64,

    /// Loan principal
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub principal: f64,

    /// Payment type: "annuity" or "diff"
    #[arg(long = "type", default_value = "")]
    pub payment_type: String,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Stray positional arguments. Accepted and ignored; they never affect validation.
    #[arg(hide = true)]
    pub extra: Vec<String>,
}

impl Cli {
    /// Builds the request, resolving the payment type once.
    ///
    /// An unrecognised type leaves `scheme` empty so validation rejects the request.
    pub fn to_request(&self) -> LoanRequest {
        LoanRequest {
            principal: self.principal,
            payment: self.payment,
            periods: self.periods,
            annual_interest_percent: self.interest,
            scheme: self.payment_type.parse::<Scheme>().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_zero() {
        let cli = Cli::try_parse_from(["loan-calc"]).unwrap();
        let request = cli.to_request();
        assert_eq!(request.principal, 0.0);
        assert_eq!(request.payment, 0.0);
        assert_eq!(request.periods, 0);
        assert_eq!(request.annual_interest_percent, 0.0);
        assert_eq!(request.scheme, None);
        assert!(!request.is_valid());
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "loan-calc",
            "--type=annuity",
            "--principal=1000",
            "--periods=12",
            "--interest=12",
        ])
        .unwrap();
        let request = cli.to_request();
        assert_eq!(request.scheme, Some(Scheme::Annuity));
        assert_eq!(request.principal, 1000.0);
        assert_eq!(request.periods, 12);
        assert_eq!(request.annual_interest_percent, 12.0);
        assert!(request.is_valid());
    }

    #[test]
    fn test_type_is_case_insensitive() {
        let cli = Cli::try_parse_from(["loan-calc", "--type", "DIFF"]).unwrap();
        assert_eq!(cli.to_request().scheme, Some(Scheme::Differentiated));
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let cli = Cli::try_parse_from([
            "loan-calc",
            "--type",
            "annuity",
            "--principal",
            "-500",
            "--periods",
            "-3",
            "--interest",
            "10",
        ])
        .unwrap();
        let request = cli.to_request();
        assert_eq!(request.principal, -500.0);
        assert_eq!(request.periods, -3);
        assert!(!request.is_valid());
    }

    #[test]
    fn test_positional_arguments_are_collected() {
        let cli = Cli::try_parse_from(["loan-calc", "--type", "loan", "a", "b", "c", "d"]).unwrap();
        assert_eq!(cli.extra.len(), 4);
        assert!(!cli.to_request().is_valid());
    }
}
