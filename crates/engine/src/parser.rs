use crate::error::ParseError;
use crate::range::{IdRange, parse_range};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Default upper bound on the number of ranges accepted from one input.
pub const DEFAULT_MAX_RANGES: usize = 1024;

/// Ranges in the order they appeared in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeList(Vec<IdRange>);

impl Deref for RangeList {
    type Target = [IdRange];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a RangeList {
    type Item = &'a IdRange;
    type IntoIter = std::slice::Iter<'a, IdRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<IdRange> for RangeList {
    fn from_iter<I: IntoIterator<Item = IdRange>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for RangeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{range}")?;
        }
        Ok(())
    }
}

/// Parses a comma-separated list of `"<low>-<high>"` tokens.
///
/// Surrounding whitespace of the whole input (such as a trailing newline) is
/// ignored. The first bad token aborts the parse. More than `max_ranges`
/// tokens is an error rather than a truncation.
pub fn parse_input(max_ranges: usize, input: &str) -> Result<RangeList, ParseError> {
    let mut ranges = Vec::new();

    for token in input.trim().split(',') {
        if ranges.len() == max_ranges {
            return Err(ParseError::TooManyRanges { limit: max_ranges });
        }
        ranges.push(parse_range(token)?);
    }

    Ok(RangeList(ranges))
}
