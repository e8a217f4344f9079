use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoanError {
    /// A validation rule was broken; nothing was computed.
    #[error("Incorrect parameters")]
    InvalidRequest(String),
    /// The selected formula is undefined for the supplied values.
    #[error("Incorrect parameters: {0}")]
    ArithmeticDegeneracy(String),
}

pub type Result<T> = std::result::Result<T, LoanError>;
