//! Tunable parameters.
//!
//! Both structs deserialize with `#[serde(default)]`, so a config file only
//! needs the fields it overrides.

use serde::{Deserialize, Serialize};

/// scrypt cost parameters.
///
/// `cpu_cost` is N and must be a power of two, `memory_cost` is r,
/// `parallelism` is p and `key_length` is the derived key size in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScryptCost {
    pub cpu_cost: u64,
    pub memory_cost: u32,
    pub parallelism: u32,
    pub key_length: usize,
}

impl ScryptCost {
    pub fn new(cpu_cost: u64, memory_cost: u32, parallelism: u32, key_length: usize) -> Self {
        Self {
            cpu_cost,
            memory_cost,
            parallelism,
            key_length,
        }
    }
}

impl Default for ScryptCost {
    fn default() -> Self {
        Self::new(16_384, 8, 1, 32)
    }
}

/// Settings for comparisons and salt generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Floor on element checks for confirmation and verification
    pub min_element_checks: usize,
    /// Salt size in bytes; raised to the passphrase length when shorter
    pub salt_length: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_element_checks: 256,
            salt_length: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cost = ScryptCost::default();
        assert_eq!(cost.cpu_cost, 16_384);
        assert_eq!(cost.memory_cost, 8);
        assert_eq!(cost.parallelism, 1);
        assert_eq!(cost.key_length, 32);

        let policy = PolicyConfig::default();
        assert_eq!(policy.min_element_checks, 256);
        assert_eq!(policy.salt_length, 64);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let cost: ScryptCost = toml::from_str("cpu_cost = 1024\n").unwrap();
        assert_eq!(cost.cpu_cost, 1024);
        assert_eq!(cost.memory_cost, 8);

        let policy: PolicyConfig = toml::from_str("").unwrap();
        assert_eq!(policy, PolicyConfig::default());
    }
}
