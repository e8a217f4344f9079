//! Application layer containing the amortization logic.
//!
//! This module defines the `AmortizationEngine`, which validates a `LoanRequest`,
//! selects the calculation the populated fields call for and runs it. Every
//! calculation is a pure function over the request.

pub mod engine;
