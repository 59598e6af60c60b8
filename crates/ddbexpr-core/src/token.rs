//! Value alias tokens.
//!
//! Tokens count upwards spreadsheet-column style over `A`–`Z`:
//! `A, B, ..., Z, AA, AB, ..., AZ, BA, ..., ZZ, AAA, ...`.

/// Reserved alias for the shared empty-list base used by `list_append`.
///
/// Lowercase, so it can never collide with an allocated token.
pub const EMPTY_LIST_KEY: &str = ":zz_empty_list";

/// Returns the token following `current`.
///
/// The empty string is the base before `A`. `current` must consist of
/// uppercase ASCII letters only.
///
/// # Examples
///
/// ```
/// use ddbexpr_core::token::next_token;
///
/// assert_eq!(next_token(""), "A");
/// assert_eq!(next_token("Z"), "AA");
/// assert_eq!(next_token("AZ"), "BA");
/// assert_eq!(next_token("ZZ"), "AAA");
/// ```
#[must_use]
pub fn next_token(current: &str) -> String {
    let mut letters = current.as_bytes().to_vec();
    let mut carry = true;
    for letter in letters.iter_mut().rev() {
        if *letter == b'Z' {
            *letter = b'A';
        } else {
            *letter += 1;
            carry = false;
            break;
        }
    }
    if carry {
        letters.insert(0, b'A');
    }
    letters.into_iter().map(char::from).collect()
}

/// Builder-owned counter handing out `:A`, `:B`, ... in order.
#[derive(Debug, Clone, Default)]
pub struct ValueKeyAllocator {
    last: String,
}

impl ValueKeyAllocator {
    /// Advance the counter and return the new `:`-prefixed token.
    pub fn next_key(&mut self) -> String {
        self.last = next_token(&self.last);
        format!(":{}", self.last)
    }

    /// The most recently allocated token base, without the `:` prefix.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        (!self.last.is_empty()).then_some(self.last.as_str())
    }
}
