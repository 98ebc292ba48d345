//! Item Position
//!
//! Zero-based position of an item in its list, parsed from the raw form
//! value submitted by the client.

use std::fmt;
use std::str::FromStr;

use super::entity::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemIndex(usize);

impl ItemIndex {
    pub fn new(position: usize) -> Self {
        Self(position)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decimal integer with an optional sign and no surrounding whitespace.
/// Negative values parse as integers but are never a valid position.
impl FromStr for ItemIndex {
    type Err = DomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value: i64 = raw
            .parse()
            .map_err(|_| DomainError::InvalidInput(format!("index {:?} is not an integer", raw)))?;

        usize::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::InvalidInput(format!("index {} is negative", value)))
    }
}
