//! A single-account ledger: validated account numbers, an append-only
//! ledger of signed transaction amounts, balance by summation, and an
//! obfuscated account-number display form.

pub mod common;
pub mod domain;

pub use common::{amount::Amount, error::AccountError};
pub use domain::account::Account;
