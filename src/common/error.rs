use crate::common::amount::Amount;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("invalid account number {0:?}: expected exactly 10 decimal digits")]
    InvalidAccountNumber(String),
    #[error("deposit amount must not be negative, got {0}")]
    NegativeDeposit(Amount),
}
