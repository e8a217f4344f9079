//! Domain layer: the loan request, the money value object, the differentiated
//! repayment plan and calculation outcomes.

pub mod loan;
pub mod money;
pub mod outcome;
pub mod schedule;
pub mod scheme;
