use serde::{Deserialize, Serialize};

pub use crate::validator::Rule;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// `INV <id>` lines and a final `invalids = <total>` on stderr
    #[default]
    Text,
    Json,
}

/// What to do with a range whose low bound exceeds its high bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvertedPolicy {
    /// Scan nothing and contribute zero to the total
    #[default]
    Empty,
    /// Fail the run before scanning
    Reject,
}
