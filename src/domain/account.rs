use crate::{
    common::{amount::Amount, error::AccountError},
    domain::{acct_number, ledger::Ledger},
};

/// A single always-open account: an immutable account number plus the
/// ledger of every balance-affecting event since it was opened.
#[derive(Debug, Clone)]
pub struct Account {
    /// The validated 10-digit number. Never exposed unmasked.
    number: String,
    ledger: Ledger,
}
impl Account {
    /// Opens an account with a zero opening balance.
    pub fn new(number: impl Into<String>) -> Result<Self, AccountError> {
        Self::with_starting_balance(number, Amount::zero())
    }

    /// Opens an account with an explicit opening balance. Any sign is
    /// accepted; the opening balance becomes the ledger's first entry.
    ///
    /// # Errors
    /// - `AccountError::InvalidAccountNumber` if `number` is not exactly
    ///   10 decimal digits. No account exists on failure.
    pub fn with_starting_balance(
        number: impl Into<String>,
        starting_balance: Amount,
    ) -> Result<Self, AccountError> {
        let number = number.into();
        if !acct_number::is_valid(&number) {
            return Err(AccountError::InvalidAccountNumber(number));
        }
        Ok(Self {
            number,
            ledger: Ledger::open(starting_balance),
        })
    }

    /// Every recorded amount in insertion order, opening balance first.
    pub fn transactions(&self) -> &[Amount] {
        self.ledger.entries()
    }

    /// Sum of all transactions, derived per call rather than stored.
    pub fn balance(&self) -> Amount {
        self.ledger.balance()
    }

    /// Obfuscated display form of the account number, e.g. `******1111`.
    pub fn acct_number(&self) -> String {
        acct_number::mask(&self.number)
    }

    /// Records a credit and returns the balance after it.
    ///
    /// Zero is a valid deposit amount.
    ///
    /// # Errors
    /// - `AccountError::NegativeDeposit` if `amount` is strictly negative;
    ///   the ledger is left unchanged.
    pub fn deposit(&mut self, amount: Amount) -> Result<Amount, AccountError> {
        if amount.is_negative() {
            return Err(AccountError::NegativeDeposit(amount));
        }
        Ok(self.ledger.append(amount))
    }

    /// Records a debit and returns the balance after it.
    ///
    /// Whatever sign the caller passes, the recorded entry is the debit
    /// form `-abs(amount)`. Unlike [`Account::deposit`], no sign is
    /// rejected; an already-negative amount is recorded as-is.
    pub fn withdraw(&mut self, amount: Amount) -> Amount {
        self.ledger.append(amount.as_debit())
    }
}
