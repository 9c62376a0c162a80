pub mod account;
pub mod acct_number;
pub mod ledger;
