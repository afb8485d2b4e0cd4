//! Human-facing nomination reference ids.
//!
//! # Responsibility
//! - Generate `AWD-<year>-<suffix>` ids at nomination creation.
//! - Parse and validate ids received from callers or serialized snapshots.
//!
//! # Invariants
//! - Format is `AWD-YYYY-XXXXXX`: four-digit year, six chars from `[A-Z0-9]`.
//! - A `ReferenceId` value always satisfies the format (checked on parse and
//!   on deserialize).

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed prefix of every reference id.
pub const REFERENCE_ID_PREFIX: &str = "AWD";
/// Length of the random suffix.
pub const REFERENCE_ID_SUFFIX_LEN: usize = 6;

const SUFFIX_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const MAX_YEAR: i32 = 9999;

static REFERENCE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^AWD-([0-9]{4})-([A-Z0-9]{6})$").expect("valid reference id regex"));

/// Stable, user-facing nomination identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferenceId(String);

impl ReferenceId {
    /// Parses a reference id string.
    ///
    /// # Errors
    /// - `InvalidFormat` when the value is not `AWD-YYYY-XXXXXX`.
    pub fn parse(value: &str) -> Result<Self, ReferenceIdError> {
        if REFERENCE_ID_RE.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ReferenceIdError::InvalidFormat(value.to_string()))
        }
    }

    /// Builds a fresh id for `year` with a random suffix.
    ///
    /// Years outside `0..=9999` are clamped so the format stays four digits.
    pub fn generate<R: Rng>(year: i32, rng: &mut R) -> Self {
        let suffix: String = (0..REFERENCE_ID_SUFFIX_LEN)
            .map(|_| char::from(SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())]))
            .collect();
        Self(format!(
            "{REFERENCE_ID_PREFIX}-{:04}-{suffix}",
            year.clamp(0, MAX_YEAR)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creation year encoded in the id.
    pub fn year(&self) -> i32 {
        // Format is validated on construction: `AWD-` is 4 bytes, year is 4.
        self.0[4..8].parse().unwrap_or_default()
    }

    /// Random six-character suffix.
    pub fn suffix(&self) -> &str {
        &self.0[9..]
    }
}

impl Display for ReferenceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ReferenceId {
    type Error = ReferenceIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ReferenceId> for String {
    fn from(value: ReferenceId) -> Self {
        value.0
    }
}

/// Reference id parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceIdError {
    InvalidFormat(String),
}

impl Display for ReferenceIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(value) => {
                write!(f, "reference id must match AWD-YYYY-XXXXXX, got `{value}`")
            }
        }
    }
}

impl Error for ReferenceIdError {}

#[cfg(test)]
mod tests {
    use super::{ReferenceId, ReferenceIdError};

    #[test]
    fn generate_encodes_year_and_uppercase_suffix() {
        let mut rng = rand::thread_rng();
        for _ in 0..64 {
            let id = ReferenceId::generate(2026, &mut rng);
            assert!(id.as_str().starts_with("AWD-2026-"));
            assert_eq!(id.year(), 2026);
            assert_eq!(id.suffix().len(), 6);
            assert!(id
                .suffix()
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
            assert_eq!(ReferenceId::parse(id.as_str()).expect("generated id parses"), id);
        }
    }

    #[test]
    fn generate_clamps_out_of_range_years() {
        let mut rng = rand::thread_rng();
        assert_eq!(ReferenceId::generate(12_345, &mut rng).year(), 9999);
        assert!(ReferenceId::generate(-3, &mut rng)
            .as_str()
            .starts_with("AWD-0000-"));
    }

    #[test]
    fn parse_rejects_lowercase_and_wrong_lengths() {
        for value in [
            "AWD-2024-abc123",
            "AWD-2024-ABC12",
            "AWD-2024-ABC1234",
            "AWD-24-ABC123",
            "XYZ-2024-ABC123",
            "",
        ] {
            let err = ReferenceId::parse(value).expect_err("invalid id must fail");
            assert_eq!(err, ReferenceIdError::InvalidFormat(value.to_string()));
        }
    }

    #[test]
    fn parse_accepts_seed_reference() {
        let id = ReferenceId::parse("AWD-2024-ABC123").expect("valid id");
        assert_eq!(id.year(), 2024);
        assert_eq!(id.suffix(), "ABC123");
    }
}
