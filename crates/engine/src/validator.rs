use serde::{Deserialize, Serialize};

/// Which self-similarity rule marks an ID as invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    /// Invalid when the ID is one block of digits written exactly twice.
    #[default]
    Halves,
    /// Invalid when the ID is one block of digits written two or more times.
    Repeated,
}

impl Rule {
    #[inline]
    pub fn is_valid(self, id: &str) -> bool {
        match self {
            Self::Halves => is_id_valid(id),
            Self::Repeated => is_id_valid_repeated(id),
        }
    }
}

/// Returns `false` when the left half of `id` equals its right half.
///
/// Odd-length IDs cannot be split evenly and are always valid, as is the
/// empty string.
pub fn is_id_valid(id: &str) -> bool {
    if id.is_empty() || id.len() % 2 != 0 {
        return true;
    }
    let (left, right) = id.as_bytes().split_at(id.len() / 2);
    left != right
}

/// Returns `false` when `id` is some block repeated at least twice.
pub fn is_id_valid_repeated(id: &str) -> bool {
    let bytes = id.as_bytes();
    let n = bytes.len();

    for block in 1..=n / 2 {
        if n % block != 0 {
            continue;
        }
        let mut chunks = bytes.chunks(block);
        let Some(first) = chunks.next() else {
            continue;
        };
        if chunks.all(|chunk| chunk == first) {
            return false;
        }
    }
    true
}
