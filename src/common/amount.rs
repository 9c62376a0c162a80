use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::num::ParseIntError;
use std::ops::{Add, AddAssign, Neg};

#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// A signed transaction amount in whole currency units.
///
/// # Why Use Amount? It is a Value Object.
/// Wrapping `i64` keeps ledger entries from being confused with other
/// numeric values (indices, counts) and gives the sign-normalization rule
/// for debits a single home. Amounts are whole signed integers; overflow
/// follows the natural `i64` range.
///
/// # Examples
/// ```
/// use account_ledger::common::amount::Amount;
///
/// let amount = Amount::new(22);
/// assert_eq!(amount.as_i64(), 22);
/// assert_eq!(amount.as_debit(), Amount::new(-22));
/// ```
pub struct Amount(i64);

impl Amount {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Amount(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Strictly negative; zero is not negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The debit form of this amount: `-abs(value)`, always non-positive.
    /// Withdrawals record this form regardless of the sign the caller passed.
    pub fn as_debit(&self) -> Self {
        Amount(-self.0.abs())
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount(value)
    }
}

impl std::str::FromStr for Amount {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Amount {}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Amount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Amount {
    type Output = Amount;
    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Neg for Amount {
    type Output = Amount;
    fn neg(self) -> Amount {
        Amount(-self.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::zero(), Add::add)
    }
}
