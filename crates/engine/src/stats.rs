use crate::range::IdRange;
use serde::{Deserialize, Serialize};

/// Invalid IDs found in one range, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeReport {
    pub range: IdRange,
    pub invalid: Vec<u32>,
    pub sum: u64,
}

impl RangeReport {
    pub const fn new(range: IdRange) -> Self {
        Self {
            range,
            invalid: Vec::new(),
            sum: 0,
        }
    }

    pub fn record(&mut self, id: u32) {
        self.invalid.push(id);
        self.sum += u64::from(id);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// One report per input range, in input order.
    pub reports: Vec<RangeReport>,
    pub total: u64,
}

impl RunResult {
    pub fn from_reports(reports: Vec<RangeReport>) -> Self {
        let total = reports.iter().map(|r| r.sum).sum();
        Self { reports, total }
    }

    pub fn invalid_count(&self) -> usize {
        self.reports.iter().map(|r| r.invalid.len()).sum()
    }

    /// Every invalid ID across all ranges, in report order.
    pub fn invalid_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.reports.iter().flat_map(|r| r.invalid.iter().copied())
    }
}
