//! Read-only windows over secret characters.

use crate::error::{PasskeepError, Result};

/// A borrowed, possibly narrowed view over secret characters.
///
/// Neither construction nor sub-viewing copies the underlying storage, so
/// comparison code can walk a secret without leaving an unshredded copy
/// behind. Offsets passed to [`SecretView::subview`] are relative to this
/// view's own window.
#[derive(Clone, Copy)]
pub struct SecretView<'a> {
    chars: &'a [char],
    start: usize,
    end: usize,
}

impl<'a> SecretView<'a> {
    /// View the whole of `chars`.
    pub fn new(chars: &'a [char]) -> Self {
        Self {
            chars,
            start: 0,
            end: chars.len(),
        }
    }

    /// View `chars[start..end]`.
    pub fn with_range(chars: &'a [char], start: usize, end: usize) -> Result<Self> {
        if end < start || end > chars.len() {
            return Err(PasskeepError::InvalidRange {
                start,
                end,
                len: chars.len(),
            });
        }
        Ok(Self { chars, start, end })
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Character at `index` within this window.
    pub fn char_at(&self, index: usize) -> Result<char> {
        if index >= self.len() {
            return Err(PasskeepError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(self.chars[self.start + index])
    }

    /// A narrower view sharing the same storage.
    pub fn subview(&self, start: usize, end: usize) -> Result<SecretView<'a>> {
        if end < start || end > self.len() {
            return Err(PasskeepError::InvalidRange {
                start,
                end,
                len: self.len(),
            });
        }
        Ok(SecretView {
            chars: self.chars,
            start: self.start + start,
            end: self.start + end,
        })
    }

    /// The window as a plain slice, still borrowing the same storage.
    pub fn as_slice(&self) -> &'a [char] {
        &self.chars[self.start..self.end]
    }
}

impl std::fmt::Debug for SecretView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretView")
            .field("len", &self.len())
            .field("chars", &"[REDACTED]")
            .finish()
    }
}
