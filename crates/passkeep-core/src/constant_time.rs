//! Timing-independent operations over secrets.
//!
//! Ordinary `==` on slices returns at the first differing element, which lets
//! an attacker who can time the comparison recover a secret one position at a
//! time. The comparisons here always walk
//! `max(len(xs), len(ys), min_element_checks, 1)` positions, touch both inputs
//! at every position and never branch on element values.

use std::cmp::max;

use subtle::ConstantTimeEq;

use crate::secret::{SecretBuffer, SecretView};

/// Value standing in for positions past the end of a sequence. No element
/// widens to a negative number, so it never equals a real element.
const OUT_OF_RANGE: i64 = -1;

/// A sequence whose elements can be read by index for comparison.
pub trait ElementSource {
    fn element_count(&self) -> usize;

    /// Element at `index`, widened. Only called with `index < element_count()`.
    fn element(&self, index: usize) -> u32;

    /// Element at `index`, or the out-of-range sentinel past the end.
    fn padded_element(&self, index: usize) -> i64 {
        if index < self.element_count() {
            i64::from(self.element(index))
        } else {
            OUT_OF_RANGE
        }
    }
}

impl ElementSource for [u8] {
    fn element_count(&self) -> usize {
        self.len()
    }

    fn element(&self, index: usize) -> u32 {
        u32::from(self[index])
    }
}

impl ElementSource for [char] {
    fn element_count(&self) -> usize {
        self.len()
    }

    fn element(&self, index: usize) -> u32 {
        u32::from(self[index])
    }
}

impl ElementSource for SecretView<'_> {
    fn element_count(&self) -> usize {
        self.len()
    }

    fn element(&self, index: usize) -> u32 {
        u32::from(self.as_slice()[index])
    }
}

impl ElementSource for SecretBuffer {
    fn element_count(&self) -> usize {
        self.len()
    }

    fn element(&self, index: usize) -> u32 {
        u32::from(self.as_chars()[index])
    }
}

/// Compare two sequences in time that depends only on their lengths and
/// `min_element_checks`.
///
/// `min_element_checks` sets a floor on the number of positions visited, so a
/// short secret does not reveal its length through a fast comparison.
pub fn equals<X, Y>(xs: &X, ys: &Y, min_element_checks: usize) -> bool
where
    X: ElementSource + ?Sized,
    Y: ElementSource + ?Sized,
{
    let xs_len = xs.element_count();
    let ys_len = ys.element_count();
    let checks = max(xs_len, max(ys_len, max(min_element_checks, 1)));

    let mut result: i64 = 0;
    for n in (0..checks).rev() {
        result |= xs.padded_element(n) ^ ys.padded_element(n);
    }
    result.ct_eq(&0).into()
}

/// [`equals`] over byte slices.
pub fn equals_bytes(xs: &[u8], ys: &[u8], min_element_checks: usize) -> bool {
    equals(xs, ys, min_element_checks)
}

/// [`equals`] over character slices.
pub fn equals_chars(xs: &[char], ys: &[char], min_element_checks: usize) -> bool {
    equals(xs, ys, min_element_checks)
}

/// Case-insensitive [`equals`].
///
/// Both inputs are lowered into fresh buffers that are shredded before this
/// returns, so case folding leaves no readable copy behind.
pub fn case_insensitive_equals(xs: SecretView<'_>, ys: SecretView<'_>, min_element_checks: usize) -> bool {
    let lower_xs = lowered(xs);
    let lower_ys = lowered(ys);
    equals(&lower_xs, &lower_ys, min_element_checks)
}

fn lowered(view: SecretView<'_>) -> SecretBuffer {
    SecretBuffer::lowercase_of(view.as_slice())
}

/// Spin for `iterations` rounds doing throwaway arithmetic; always returns 0.
///
/// The result carries a false dependency on every round so the loop is not
/// optimised out. Useful for padding other operations to a fixed cost.
pub fn nop(iterations: u64) -> u8 {
    let mut n = std::hint::black_box(iterations);
    let mut x = (n & 1) as u8;
    while n != 0 {
        x = ((n % 2) as u8) ^ x;
        n -= 1;
    }
    x = std::hint::black_box(x);
    if x == 1 {
        x -= 1;
    }
    x
}
