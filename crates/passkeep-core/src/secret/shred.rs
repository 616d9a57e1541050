//! In-place destruction of secret buffers.
//!
//! Shredding overwrites every element with zero and then with filler drawn
//! from the OS CSPRNG. The zero pass uses `zeroize`, so it survives dead-store
//! elimination even when the buffer is freed right afterwards.
//!
//! This only covers the process-visible copy. Swap, core dumps and copies made
//! by the allocator on reallocation are out of reach.

use zeroize::{Zeroize, Zeroizing};

/// Number of random bytes fetched per refill when generating char filler.
const POOL_CHUNK: usize = 256;

/// Largest value representable in 21 bits; every Unicode scalar fits below it.
const SCALAR_MASK: u32 = 0x1F_FFFF;

/// A buffer that can be shredded in place.
///
/// Length and identity are preserved; only contents change. Shredding never
/// fails: if the random source is unavailable the buffer is left zeroed and a
/// warning is logged.
pub trait Shred {
    fn shred(&mut self);
}

/// Shred any supported buffer.
///
/// # Examples
///
/// ```
/// use passkeep_core::secret::shred;
///
/// let mut key = *b"hunter2-hunter2-hunter2";
/// shred(&mut key[..]);
/// assert_eq!(key.len(), 23);
/// ```
pub fn shred<T: Shred + ?Sized>(buffer: &mut T) {
    buffer.shred();
}

impl Shred for [u8] {
    fn shred(&mut self) {
        self.zeroize();
        if self.is_empty() {
            return;
        }
        // Bytes straight from the CSPRNG are already uniform over 0..=255.
        if let Err(err) = getrandom::getrandom(self) {
            self.zeroize();
            tracing::warn!(error = %err, len = self.len(), "Random filler unavailable; buffer left zeroed");
        }
        std::hint::black_box(&*self);
    }
}

impl Shred for [char] {
    fn shred(&mut self) {
        self.zeroize();
        if self.is_empty() {
            return;
        }
        let mut pool = EntropyPool::new();
        let filled = self
            .iter_mut()
            .try_for_each(|slot| pool.next_scalar().map(|value| *slot = value));
        if let Err(err) = filled {
            self.zeroize();
            tracing::warn!(error = %err, len = self.len(), "Random filler unavailable; buffer left zeroed");
        }
        std::hint::black_box(&*self);
    }
}

impl Shred for Vec<u8> {
    fn shred(&mut self) {
        self.as_mut_slice().shred();
    }
}

impl Shred for Vec<char> {
    fn shred(&mut self) {
        self.as_mut_slice().shred();
    }
}

/// Buffered CSPRNG output, itself zeroized on drop.
struct EntropyPool {
    bytes: Zeroizing<Vec<u8>>,
    cursor: usize,
}

impl EntropyPool {
    fn new() -> Self {
        Self {
            bytes: Zeroizing::new(Vec::new()),
            cursor: 0,
        }
    }

    fn next_u32(&mut self) -> Result<u32, getrandom::Error> {
        if self.cursor + 4 > self.bytes.len() {
            self.bytes.zeroize();
            self.bytes.resize(POOL_CHUNK, 0);
            getrandom::getrandom(&mut self.bytes)?;
            self.cursor = 0;
        }
        let mut word = [0u8; 4];
        word.copy_from_slice(&self.bytes[self.cursor..self.cursor + 4]);
        self.cursor += 4;
        Ok(u32::from_le_bytes(word))
    }

    /// Uniform over every Unicode scalar value.
    ///
    /// Draws 21 bits and resamples when the draw lands on a surrogate or past
    /// U+10FFFF, so no value is favoured the way a modulo reduction would.
    fn next_scalar(&mut self) -> Result<char, getrandom::Error> {
        loop {
            let draw = self.next_u32()? & SCALAR_MASK;
            if let Some(value) = char::from_u32(draw) {
                return Ok(value);
            }
        }
    }
}
