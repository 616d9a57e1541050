//! Owned secret character storage.

use std::mem;

use zeroize::Zeroize;

use super::shred::Shred;
use super::view::SecretView;
use crate::error::{PasskeepError, Result};

/// An owned, fixed-length buffer of secret characters.
///
/// Ownership moves with the value. Whoever holds a `SecretBuffer` when it is
/// dropped shreds it, so success paths, `?` returns and unwinding all leave
/// the storage overwritten.
#[derive(Default)]
pub struct SecretBuffer {
    chars: Vec<char>,
}

impl SecretBuffer {
    /// Take ownership of already-decoded characters.
    ///
    /// A vector with spare capacity is copied into an exact-size allocation
    /// and the original is wiped, spare capacity included, so the buffer
    /// never has to grow or shrink in place.
    pub fn new(mut chars: Vec<char>) -> Self {
        if chars.capacity() == chars.len() {
            return Self { chars };
        }
        let mut exact = Vec::with_capacity(chars.len());
        exact.extend_from_slice(&chars);
        chars.shred();
        chars.zeroize();
        Self { chars: exact }
    }

    /// Collect `chars` into an allocation sized by a counting pass first.
    ///
    /// Pushing into a growing `Vec` frees each outgrown block unwiped; with
    /// the exact capacity up front there is only ever one block to shred.
    fn collect_exact<I>(chars: I) -> Self
    where
        I: Iterator<Item = char> + Clone,
    {
        let mut exact = Vec::with_capacity(chars.clone().count());
        for c in chars {
            exact.push(c);
        }
        Self { chars: exact }
    }

    /// Decode UTF-8 bytes into a buffer, zeroizing the input either way.
    pub fn from_utf8(mut bytes: Vec<u8>) -> Result<Self> {
        let decoded = match std::str::from_utf8(&bytes) {
            Ok(text) => Ok(Self::from(text)),
            Err(e) => Err(PasskeepError::InvalidArgument(format!(
                "secret is not valid UTF-8 (error at byte {})",
                e.valid_up_to()
            ))),
        };
        bytes.zeroize();
        decoded
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    pub fn view(&self) -> SecretView<'_> {
        SecretView::new(&self.chars)
    }

    /// Lower-case copy, itself shredded on drop.
    pub(crate) fn to_lowercase(&self) -> SecretBuffer {
        Self::lowercase_of(&self.chars)
    }

    /// Lower-case copy of borrowed secret characters.
    pub(crate) fn lowercase_of(chars: &[char]) -> SecretBuffer {
        Self::collect_exact(chars.iter().flat_map(|c| c.to_lowercase()))
    }

    /// Shred now instead of waiting for drop.
    pub fn shred(mut self) {
        // The emptied buffer left behind makes the drop-time shred a no-op.
        let mut chars = mem::take(&mut self.chars);
        chars.shred();
    }
}

impl From<&str> for SecretBuffer {
    fn from(text: &str) -> Self {
        Self::collect_exact(text.chars())
    }
}

impl From<String> for SecretBuffer {
    fn from(mut text: String) -> Self {
        let buffer = Self::from(text.as_str());
        text.zeroize();
        buffer
    }
}

impl Clone for SecretBuffer {
    fn clone(&self) -> Self {
        Self::new(self.chars.clone())
    }
}

impl Drop for SecretBuffer {
    fn drop(&mut self) {
        self.chars.shred();
    }
}

impl std::fmt::Debug for SecretBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretBuffer")
            .field("len", &self.chars.len())
            .field("chars", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_counts_chars() {
        let buffer = SecretBuffer::from("你好abc");
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.as_chars()[1], '好');
    }

    #[test]
    fn test_from_utf8_valid() {
        let buffer = SecretBuffer::from_utf8(b"pass-word".to_vec()).unwrap();
        assert_eq!(buffer.len(), 9);
    }

    #[test]
    fn test_from_utf8_invalid_is_argument_error() {
        let result = SecretBuffer::from_utf8(vec![b'a', 0xFF, b'b']);
        assert!(matches!(result, Err(PasskeepError::InvalidArgument(_))));
    }

    #[test]
    fn test_lowercase_copy() {
        let buffer = SecretBuffer::from("AbC");
        let lowered = buffer.to_lowercase();
        assert_eq!(lowered.as_chars(), &['a', 'b', 'c']);
        assert_eq!(buffer.as_chars(), &['A', 'b', 'C']);
    }

    #[test]
    fn test_buffers_are_allocated_exactly() {
        let buffer = SecretBuffer::from("你好abc");
        assert_eq!(buffer.chars.capacity(), 5);

        // 'İ' lowers to two chars; the copy is still sized in one go.
        let lowered = SecretBuffer::from("İAb").to_lowercase();
        assert_eq!(lowered.len(), 4);
        assert_eq!(lowered.chars.capacity(), 4);

        let mut roomy = Vec::with_capacity(32);
        roomy.extend(['a', 'b']);
        let buffer = SecretBuffer::new(roomy);
        assert_eq!(buffer.as_chars(), &['a', 'b']);
        assert_eq!(buffer.chars.capacity(), 2);
    }

    #[test]
    fn test_view_spans_buffer() {
        let buffer = SecretBuffer::from("window");
        let view = buffer.view();
        assert_eq!(view.len(), 6);
        assert_eq!(view.char_at(3).unwrap(), 'd');
    }

    #[test]
    fn test_debug_redacts() {
        let buffer = SecretBuffer::from("hunter2hunter2");
        let debug_output = format!("{:?}", buffer);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("hunter2"));
    }
}
