//! Output formatting for hash records.

use serde::Serialize;

use passkeep_core::ScryptCost;

/// A stored passphrase hash with everything needed to verify it later,
/// except the pepper.
#[derive(Debug, Serialize)]
pub struct HashRecord {
    pub algorithm: &'static str,
    pub cpu_cost: u64,
    pub memory_cost: u32,
    pub parallelism: u32,
    pub key_length: usize,
    pub salt: String,
    pub hash: String,
}

impl HashRecord {
    pub fn new(cost: &ScryptCost, salt: String, hash: String) -> Self {
        Self {
            algorithm: "scrypt",
            cpu_cost: cost.cpu_cost,
            memory_cost: cost.memory_cost,
            parallelism: cost.parallelism,
            key_length: cost.key_length,
            salt,
            hash,
        }
    }

    pub fn to_text(&self) -> String {
        format!(
            "algorithm: {}\nparams: N={} r={} p={} len={}\nsalt: {}\nhash: {}",
            self.algorithm,
            self.cpu_cost,
            self.memory_cost,
            self.parallelism,
            self.key_length,
            self.salt,
            self.hash
        )
    }
}
