pub mod amount;
pub mod error;
