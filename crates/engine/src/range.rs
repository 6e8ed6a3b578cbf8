use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Inclusive span of IDs `low..=high`.
///
/// `low <= high` is not enforced; an inverted range simply contains no IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdRange {
    pub low: u32,
    pub high: u32,
}

impl IdRange {
    #[inline]
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    #[inline]
    pub const fn is_inverted(self) -> bool {
        self.low > self.high
    }

    /// Number of IDs in the range. `0-4294967295` holds 2^32 IDs, hence `u64`.
    #[inline]
    pub const fn len(self) -> u64 {
        if self.is_inverted() {
            0
        } else {
            self.high as u64 - self.low as u64 + 1
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.is_inverted()
    }

    /// Iterates the IDs in ascending order. Yields nothing when inverted.
    #[inline]
    pub fn ids(self) -> RangeInclusive<u32> {
        self.low..=self.high
    }
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl FromStr for IdRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_range(s)
    }
}

/// Parses one `"<low>-<high>"` token.
///
/// Both halves must be plain base-10 digit strings that fit in a `u32`; the
/// first `-` is the separator.
pub fn parse_range(token: &str) -> Result<IdRange, ParseError> {
    let (low, high) = token
        .split_once('-')
        .ok_or_else(|| ParseError::malformed(token, "missing '-' separator"))?;

    let low = parse_bound(token, low, "low")?;
    let high = parse_bound(token, high, "high")?;
    Ok(IdRange::new(low, high))
}

fn parse_bound(token: &str, literal: &str, which: &str) -> Result<u32, ParseError> {
    if literal.is_empty() {
        return Err(ParseError::malformed(token, format!("{which} bound is empty")));
    }
    // `u32::from_str` would also accept a leading '+'.
    if !literal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::malformed(
            token,
            format!("{which} bound '{literal}' is not a decimal integer"),
        ));
    }
    literal.parse().map_err(|_| ParseError::IntegerOverflow {
        token: token.to_string(),
        literal: literal.to_string(),
    })
}
