//! Errors raised by equivalence checking.
//!
//! Building and evaluating terms cannot fail. The only failures are checks
//! that would enumerate more than the caller allowed.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// `|domain| * |codomain|` is over the configured pair budget
    #[error("check would enumerate {pairs} pairs, budget is {limit}")]
    BudgetExceeded { pairs: usize, limit: usize },

    /// A bounded carrier enumeration yielded more than `limit` items
    #[error("carrier enumeration yielded more than {limit} items")]
    CarrierTooLarge { limit: usize },
}

pub type Result<T> = std::result::Result<T, CheckError>;
