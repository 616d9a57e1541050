//! # Passkeep Core
//!
//! Building blocks for handling passphrases in memory: constant-time
//! comparison, best-effort shredding of secret buffers, and a [`Passphrase`]
//! type that enforces confirm, validate, then hash, wiping the secret on
//! every exit path.
//!
//! ## Architecture
//!
//! - **secret**: shreddable buffers, non-copying views and the shredder
//! - **constant_time**: timing-independent comparisons
//! - **passphrase**: lifecycle, complexity policy and scrypt hashing
//! - **config**: serde-backed cost and policy parameters
//!
//! ## Threat Model
//!
//! We defend against:
//! - Timing side channels in passphrase comparison
//! - Secrets lingering in process memory after use
//! - Offline brute force of stored hashes (scrypt plus salt and pepper)
//!
//! We do NOT defend against:
//! - Swap, core dumps or hardware caches retaining secrets
//! - Compromised OS / keylogger

pub mod config;
pub mod constant_time;
pub mod error;
pub mod passphrase;
pub mod secret;

pub use config::{PolicyConfig, ScryptCost};
pub use error::{PasskeepError, Rejection, Result};
pub use passphrase::{generate_salt, ComplexityPolicy, DefaultPolicy, Passphrase};
pub use secret::{shred, SecretBuffer, SecretView, Shred};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
