//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for one scoring run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(Uuid);

impl RunId {
    /// Creates a new random RunId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RunId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Identifier of an alternative, `U1..UN` in input row order.
///
/// The wrapped value is the 1-based position, so ordering by id is
/// ordering by input row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct AlternativeId(usize);

impl AlternativeId {
    /// Creates the identifier for the zero-based row index.
    pub fn from_row_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// Returns the 1-based position.
    pub fn position(&self) -> usize {
        self.0
    }

    /// Returns the zero-based row index.
    pub fn row_index(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for AlternativeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U{}", self.0)
    }
}

impl FromStr for AlternativeId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('U')
            .ok_or_else(|| ValidationError::invalid_format("alternative_id", "must start with 'U'"))?;
        let position: usize = digits
            .parse()
            .map_err(|_| ValidationError::invalid_format("alternative_id", "expected U<number>"))?;
        if position == 0 {
            return Err(ValidationError::invalid_format(
                "alternative_id",
                "positions are 1-based",
            ));
        }
        Ok(Self(position))
    }
}

impl From<AlternativeId> for String {
    fn from(id: AlternativeId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for AlternativeId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
