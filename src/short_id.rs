//! Short id derivation.
//!
//! A short id is a fixed-length prefix of the lowercase hex digest of the long
//! URL. The truncated space is small, so distinct URLs can share an id; the
//! store keeps whichever mapping was written last.

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::ShortIdConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// Matches the ids issued by existing deployments
    #[default]
    Md5,
    Sha256,
}

#[derive(Debug, Error)]
#[error("unknown digest algorithm '{0}', supported values: md5, sha256")]
pub struct UnknownDigest(String);

impl DigestAlgorithm {
    /// Number of hex characters in a full digest.
    pub const fn hex_len(self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 32,
            DigestAlgorithm::Sha256 => 64,
        }
    }

    fn hex_digest(self, input: &[u8]) -> String {
        match self {
            DigestAlgorithm::Md5 => format!("{:x}", Md5::digest(input)),
            DigestAlgorithm::Sha256 => format!("{:x}", Sha256::digest(input)),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestAlgorithm::Md5 => f.write_str("md5"),
            DigestAlgorithm::Sha256 => f.write_str("sha256"),
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = UnknownDigest;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(DigestAlgorithm::Md5),
            "sha256" | "sha-256" => Ok(DigestAlgorithm::Sha256),
            _ => Err(UnknownDigest(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("short id length {length} is outside 1..={max} for {algorithm}")]
pub struct InvalidLength {
    pub length: usize,
    pub max: usize,
    pub algorithm: DigestAlgorithm,
}

#[derive(Debug, Clone, Copy)]
pub struct ShortIdGenerator {
    algorithm: DigestAlgorithm,
    length: usize,
}

impl ShortIdGenerator {
    /// Fails unless `1 <= length <= algorithm.hex_len()`.
    pub fn new(algorithm: DigestAlgorithm, length: usize) -> Result<Self, InvalidLength> {
        let max = algorithm.hex_len();
        if length == 0 || length > max {
            return Err(InvalidLength {
                length,
                max,
                algorithm,
            });
        }

        Ok(Self { algorithm, length })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Derive the short id for a long URL. Same input, same output.
    pub fn derive(&self, long_url: &str) -> String {
        let mut hex = self.algorithm.hex_digest(long_url.as_bytes());
        hex.truncate(self.length);
        hex
    }
}

impl Default for ShortIdGenerator {
    fn default() -> Self {
        Self {
            algorithm: DigestAlgorithm::Md5,
            length: ShortIdConfig::DEFAULT_LENGTH,
        }
    }
}

impl TryFrom<ShortIdConfig> for ShortIdGenerator {
    type Error = InvalidLength;

    fn try_from(config: ShortIdConfig) -> Result<Self, Self::Error> {
        Self::new(config.algorithm, config.length)
    }
}

/// Join a base URL and a short id with exactly one slash.
pub fn build_short_url(base_url: &str, short_id: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), short_id)
}
