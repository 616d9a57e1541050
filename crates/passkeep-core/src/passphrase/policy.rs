//! Passphrase complexity rules.
//!
//! Rules run over `&[char]` so checking a candidate never materialises an
//! unshreddable `String` copy of it.

use crate::error::Rejection;
use crate::secret::SecretBuffer;

/// Minimum passphrase length in characters.
pub const MIN_PASSPHRASE_LENGTH: usize = 8;

/// Decides whether a candidate passphrase is acceptable.
///
/// Any `Fn(&[char]) -> bool` is a policy; `false` maps to
/// [`Rejection::InsufficientComplexity`].
pub trait ComplexityPolicy {
    fn check(&self, candidate: &[char]) -> Result<(), Rejection>;
}

impl<F> ComplexityPolicy for F
where
    F: Fn(&[char]) -> bool,
{
    fn check(&self, candidate: &[char]) -> Result<(), Rejection> {
        if self(candidate) {
            Ok(())
        } else {
            Err(Rejection::InsufficientComplexity)
        }
    }
}

/// The built-in rules.
///
/// # Requirements
///
/// - At least 8 characters long
/// - Either lower case, upper case and a digit (ASCII), or "international":
///   no ASCII letters, digits, underscores or whitespace at all
///
/// The international rule is a rough stand-in for non-Latin scripts. A
/// passphrase such as `"你好 你好 你好"` fails it because of the spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPolicy;

impl ComplexityPolicy for DefaultPolicy {
    fn check(&self, candidate: &[char]) -> Result<(), Rejection> {
        if candidate.len() < MIN_PASSPHRASE_LENGTH {
            return Err(Rejection::TooShort);
        }
        if is_multicase_alpha_and_numeric(candidate) || is_international(candidate) {
            Ok(())
        } else {
            Err(Rejection::InsufficientComplexity)
        }
    }
}

fn is_multicase_alpha_and_numeric(candidate: &[char]) -> bool {
    candidate.iter().any(char::is_ascii_lowercase)
        && candidate.iter().any(char::is_ascii_uppercase)
        && candidate.iter().any(char::is_ascii_digit)
}

fn is_international(candidate: &[char]) -> bool {
    !candidate.is_empty() && !candidate.iter().any(|&c| is_word_or_space(c))
}

/// ASCII word characters plus the ASCII whitespace set, vertical tab included.
fn is_word_or_space(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Case-insensitive substring test for a user name inside a passphrase.
///
/// An empty user name is a substring of everything and always matches.
pub(crate) fn contains_user_name(candidate: &SecretBuffer, user_name: &str) -> bool {
    let needle: Vec<char> = user_name.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return true;
    }
    let haystack = candidate.to_lowercase();
    haystack
        .as_chars()
        .windows(needle.len())
        .any(|window| window == needle.as_slice())
}
