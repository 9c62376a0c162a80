//! Account-number validation and display masking. Both are pure
//! string transforms; no formatting state is kept anywhere.

pub const ACCT_NUMBER_LEN: usize = 10;
/// Digits left visible at the end of the masked form.
pub const VISIBLE_SUFFIX_LEN: usize = 4;

const MASK_CHAR: char = '*';

/// Exactly 10 ASCII decimal digits, nothing else.
pub fn is_valid(number: &str) -> bool {
    number.len() == ACCT_NUMBER_LEN && number.bytes().all(|b| b.is_ascii_digit())
}

/// Obfuscated display form: first 6 characters replaced with `*`, last 4
/// kept literal. Callers only pass numbers that passed [`is_valid`].
pub fn mask(number: &str) -> String {
    let split = ACCT_NUMBER_LEN - VISIBLE_SUFFIX_LEN;
    let mut masked = String::with_capacity(ACCT_NUMBER_LEN);
    for _ in 0..split {
        masked.push(MASK_CHAR);
    }
    masked.push_str(&number[split..]);
    masked
}
