use crate::common::amount::Amount;

/// Append-only sequence of signed amounts, oldest first. Entries are never
/// reordered or deleted, and the ledger is never empty: it opens with the
/// opening-balance entry.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Ledger {
    entries: Vec<Amount>,
}
impl Ledger {
    pub fn open(opening: Amount) -> Self {
        Self {
            entries: vec![opening],
        }
    }

    pub fn entries(&self) -> &[Amount] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Records an entry and returns the balance right after it.
    /// This is the only mutation the ledger supports.
    pub fn append(&mut self, amount: Amount) -> Amount {
        self.entries.push(amount);
        self.balance()
    }

    /// Sum of all entries, computed fresh on each call.
    pub fn balance(&self) -> Amount {
        self.entries.iter().copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_seeds_the_opening_balance_entry() {
        let ledger = Ledger::open(Amount::new(100));
        assert_eq!(ledger.entries(), [Amount::new(100)]);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn append_keeps_insertion_order_and_returns_new_balance() {
        let mut ledger = Ledger::open(Amount::zero());
        assert_eq!(ledger.append(Amount::new(1)), Amount::new(1));
        assert_eq!(ledger.append(Amount::new(2)), Amount::new(3));
        assert_eq!(ledger.append(Amount::new(-1)), Amount::new(2));
        assert_eq!(
            ledger.entries(),
            [
                Amount::zero(),
                Amount::new(1),
                Amount::new(2),
                Amount::new(-1)
            ]
        );
    }

    #[test]
    fn balance_sums_all_entries() {
        let mut ledger = Ledger::open(Amount::new(1));
        ledger.append(Amount::new(2));
        ledger.append(Amount::new(3));
        ledger.append(Amount::new(-1));
        assert_eq!(ledger.balance(), Amount::new(5));
    }
}
