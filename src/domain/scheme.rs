use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Repayment scheme selected with `--type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Principal is repaid in equal parts; the payment shrinks every month.
    Differentiated,
    /// Constant monthly payment covering interest and principal.
    Annuity,
}

/// The payment type is neither "annuity" nor "diff".
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("payment type must be \"annuity\" or \"diff\"")]
pub struct UnknownScheme;

impl FromStr for Scheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("diff") {
            Ok(Self::Differentiated)
        } else if s.eq_ignore_ascii_case("annuity") {
            Ok(Self::Annuity)
        } else {
            Err(UnknownScheme)
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Differentiated => f.write_str("diff"),
            Self::Annuity => f.write_str("annuity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("diff".parse::<Scheme>().unwrap(), Scheme::Differentiated);
        assert_eq!("DIFF".parse::<Scheme>().unwrap(), Scheme::Differentiated);
        assert_eq!("Annuity".parse::<Scheme>().unwrap(), Scheme::Annuity);
    }

    #[test]
    fn test_parse_rejects_unknown_types() {
        assert_eq!("loan".parse::<Scheme>(), Err(UnknownScheme));
        assert!("".parse::<Scheme>().is_err());
        assert!("differentiated".parse::<Scheme>().is_err());
    }

    #[test]
    fn test_display_matches_cli_spelling() {
        assert_eq!(Scheme::Differentiated.to_string(), "diff");
        assert_eq!(Scheme::Annuity.to_string(), "annuity");
    }
}
