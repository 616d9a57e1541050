//! Confirmed passphrases.
//!
//! A [`Passphrase`] owns a [`SecretBuffer`] and can only compare itself with
//! other passphrases, derive a hash, or be closed. Every factory takes
//! ownership of the buffers it is given and shreds them on every failure
//! path; dropping or closing a passphrase shreds its own buffer.
//!
//! ## Lifecycle
//!
//! ```text
//! create / confirm / attempt ──► Live ──close()──► Shredded
//! ```
//!
//! `Shredded` is terminal: everything except `close()` then fails with
//! [`PasskeepError::PassphraseShredded`].

pub mod hash;
pub mod policy;

use std::cmp::max;
use std::mem;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use secrecy::SecretString;
use zeroize::Zeroizing;

use crate::config::ScryptCost;
use crate::constant_time;
use crate::error::{PasskeepError, Rejection, Result};
use crate::secret::SecretBuffer;

pub use hash::MIN_PEPPER_LENGTH;
pub use policy::{ComplexityPolicy, DefaultPolicy, MIN_PASSPHRASE_LENGTH};

/// Attempts `generate_random` makes before giving up.
const RANDOM_ATTEMPTS: usize = 30;

/// Random bytes behind each generated candidate (88 base64 characters).
const RANDOM_CANDIDATE_BYTES: usize = 64;

enum State {
    Live(SecretBuffer),
    Shredded,
}

/// A passphrase held in a shreddable buffer.
pub struct Passphrase {
    state: State,
}

impl Passphrase {
    fn live(buffer: SecretBuffer) -> Self {
        Self {
            state: State::Live(buffer),
        }
    }

    /// Store a new passphrase that meets the default complexity rules.
    ///
    /// Takes ownership of `buffer`; it is shredded if validation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use passkeep_core::{Passphrase, SecretBuffer};
    ///
    /// assert!(Passphrase::create(SecretBuffer::from("aBCdef123")).is_ok());
    /// assert!(Passphrase::create(SecretBuffer::from("abcdef")).is_err());
    /// ```
    pub fn create(buffer: SecretBuffer) -> Result<Self> {
        Self::create_with_policy(buffer, &DefaultPolicy)
    }

    /// [`Passphrase::create`], additionally rejecting passphrases that contain
    /// `user_name` in any case.
    pub fn create_for_user(buffer: SecretBuffer, user_name: &str) -> Result<Self> {
        Self::validate(buffer, Some(user_name), &DefaultPolicy)
    }

    /// [`Passphrase::create`] with caller-supplied complexity rules.
    pub fn create_with_policy<P>(buffer: SecretBuffer, policy: &P) -> Result<Self>
    where
        P: ComplexityPolicy + ?Sized,
    {
        Self::validate(buffer, None, policy)
    }

    fn validate<P>(buffer: SecretBuffer, user_name: Option<&str>, policy: &P) -> Result<Self>
    where
        P: ComplexityPolicy + ?Sized,
    {
        if let Some(name) = user_name {
            if policy::contains_user_name(&buffer, name) {
                return Err(reject(Rejection::ContainsUserName));
            }
        }
        policy.check(buffer.as_chars()).map_err(reject)?;
        Ok(Self::live(buffer))
    }

    /// Store a new passphrase after checking it against its confirmation.
    ///
    /// The comparison visits at least `min_element_checks` positions. The
    /// confirmation is always shredded; the passphrase is shredded too unless
    /// it ends up inside the returned value.
    pub fn confirm(
        buffer: SecretBuffer,
        confirmation: SecretBuffer,
        min_element_checks: usize,
    ) -> Result<Self> {
        Self::confirm_inner(buffer, confirmation, min_element_checks, None, &DefaultPolicy)
    }

    /// [`Passphrase::confirm`] that also rejects passphrases containing
    /// `user_name`.
    pub fn confirm_for_user(
        buffer: SecretBuffer,
        confirmation: SecretBuffer,
        min_element_checks: usize,
        user_name: &str,
    ) -> Result<Self> {
        Self::confirm_inner(
            buffer,
            confirmation,
            min_element_checks,
            Some(user_name),
            &DefaultPolicy,
        )
    }

    fn confirm_inner<P>(
        buffer: SecretBuffer,
        confirmation: SecretBuffer,
        min_element_checks: usize,
        user_name: Option<&str>,
        policy: &P,
    ) -> Result<Self>
    where
        P: ComplexityPolicy + ?Sized,
    {
        let matches = constant_time::equals(&buffer, &confirmation, min_element_checks);
        confirmation.shred();
        if !matches {
            tracing::debug!("Passphrase confirmation did not match");
            return Err(PasskeepError::ConfirmationMismatch);
        }
        Self::validate(buffer, user_name, policy)
    }

    /// Wrap a login attempt without validating it.
    ///
    /// Attempts exist only to be compared against stored passphrases.
    pub fn attempt(buffer: SecretBuffer) -> Self {
        Self::live(buffer)
    }

    /// Generate a random passphrase that passes the default rules.
    pub fn generate_random(min_element_checks: usize) -> Result<Self> {
        Self::generate_random_with_policy(min_element_checks, &DefaultPolicy)
    }

    /// Generate a random passphrase accepted by `policy`.
    ///
    /// Candidates are base64 text of fresh random bytes. Running out of
    /// attempts means the policy or the entropy source is broken, not bad
    /// luck, and is reported as [`PasskeepError::RetryExhausted`].
    pub fn generate_random_with_policy<P>(min_element_checks: usize, policy: &P) -> Result<Self>
    where
        P: ComplexityPolicy + ?Sized,
    {
        for attempt in 1..=RANDOM_ATTEMPTS {
            let candidate = random_candidate()?;
            let confirmation = candidate.clone();
            match Self::confirm_inner(candidate, confirmation, min_element_checks, None, policy) {
                Ok(passphrase) => return Ok(passphrase),
                Err(err) if err.is_user_facing() => {
                    tracing::debug!(attempt, "Random passphrase candidate rejected");
                }
                Err(err) => return Err(err),
            }
        }
        Err(PasskeepError::RetryExhausted {
            attempts: RANDOM_ATTEMPTS,
        })
    }

    fn secret(&self) -> Result<&SecretBuffer> {
        match &self.state {
            State::Live(buffer) => Ok(buffer),
            State::Shredded => Err(PasskeepError::PassphraseShredded),
        }
    }

    pub fn is_shredded(&self) -> bool {
        matches!(self.state, State::Shredded)
    }

    /// Compare with another passphrase in constant time.
    ///
    /// Visits as many positions as the longer of the two. Use
    /// [`Passphrase::equals_with_min_checks`] to also hide that length.
    pub fn equals(&self, other: &Passphrase) -> Result<bool> {
        let ours = self.secret()?;
        let theirs = other.secret()?;
        Ok(constant_time::equals(ours, theirs, max(ours.len(), theirs.len())))
    }

    /// Compare with another passphrase, visiting at least
    /// `min_element_checks` positions.
    pub fn equals_with_min_checks(&self, other: &Passphrase, min_element_checks: usize) -> Result<bool> {
        let ours = self.secret()?;
        let theirs = other.secret()?;
        Ok(constant_time::equals(ours, theirs, min_element_checks))
    }

    /// Hash the passphrase with scrypt; the digest is returned as padded
    /// standard base64 to keep storage and transport simple.
    ///
    /// # Errors
    ///
    /// - `SaltTooShort` if `salt` has fewer bytes than the passphrase has characters
    /// - `PepperTooShort` if `pepper` is under 32 bytes
    /// - `InvalidParameter` if any cost field is below 1 or N is not a power of two
    ///
    /// Salt and pepper are left untouched; wiping them is the caller's job.
    pub fn hash(&self, salt: &[u8], pepper: &[u8], cost: &ScryptCost) -> Result<String> {
        let secret = self.secret()?;
        if salt.len() < secret.len() {
            return Err(PasskeepError::SaltTooShort {
                required: secret.len(),
                actual: salt.len(),
            });
        }
        if pepper.len() < MIN_PEPPER_LENGTH {
            return Err(PasskeepError::PepperTooShort {
                required: MIN_PEPPER_LENGTH,
                actual: pepper.len(),
            });
        }
        tracing::debug!(
            cpu_cost = cost.cpu_cost,
            memory_cost = cost.memory_cost,
            parallelism = cost.parallelism,
            key_length = cost.key_length,
            "Hashing passphrase"
        );
        hash::derive(secret, salt, pepper, cost)
    }

    /// Whether a live passphrase meets the default complexity rules.
    pub fn meets_complexity_requirements(&self) -> bool {
        self.secret()
            .map(|buffer| DefaultPolicy.check(buffer.as_chars()).is_ok())
            .unwrap_or(false)
    }

    /// The passphrase as a string, for APIs that insist on one.
    ///
    /// # Security
    ///
    /// The returned value is zeroized on drop, but anything the caller copies
    /// out of it is beyond shredding.
    pub fn expose_for_legacy(&self) -> Result<SecretString> {
        let secret = self.secret()?;
        let size = secret.as_chars().iter().map(|c| c.len_utf8()).sum();
        let mut text = String::with_capacity(size);
        text.extend(secret.as_chars());
        Ok(SecretString::from(text))
    }

    /// Shred the passphrase. Later calls are no-ops.
    pub fn close(&mut self) {
        if let State::Live(buffer) = mem::replace(&mut self.state, State::Shredded) {
            buffer.shred();
        }
    }
}

impl std::fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.state {
            State::Live(_) => "[REDACTED]",
            State::Shredded => "[SHREDDED]",
        };
        f.debug_struct("Passphrase").field("state", &state).finish()
    }
}

fn reject(reason: Rejection) -> PasskeepError {
    tracing::debug!(reason = %reason, "Passphrase rejected");
    PasskeepError::InvalidPassphrase(reason)
}

fn random_candidate() -> Result<SecretBuffer> {
    let mut bytes = Zeroizing::new([0u8; RANDOM_CANDIDATE_BYTES]);
    getrandom::getrandom(&mut *bytes)?;
    let encoded = Zeroizing::new(STANDARD.encode(&*bytes));
    Ok(SecretBuffer::from(encoded.as_str()))
}

/// Fill a fresh salt of `len` bytes from the OS CSPRNG.
pub fn generate_salt(len: usize) -> Result<Vec<u8>> {
    let mut salt = vec![0u8; len];
    getrandom::getrandom(&mut salt)?;
    Ok(salt)
}
