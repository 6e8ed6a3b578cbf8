use rayon::prelude::*;

pub mod config;
pub mod error;
pub mod options;
pub mod parser;
pub mod range;
pub mod scanner;
pub mod stats;
pub mod validator;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::options::InvertedPolicy;
use crate::parser::RangeList;
use crate::stats::{RangeReport, RunResult};

pub use crate::parser::parse_input;
pub use crate::range::{IdRange, parse_range};
pub use crate::scanner::invalids_in_range;
pub use crate::validator::{Rule, is_id_valid};

/// Parse the configured input and sum every invalid ID in it.
///
/// The whole input is parsed and checked before any range is scanned, so a
/// bad token never produces a partial result.
///
/// # Errors
///
/// Returns an error for invalid configuration, malformed input, inverted
/// ranges under `InvertedPolicy::Reject`, or a thread pool that cannot be
/// created.
pub fn run(config: &Config) -> Result<RunResult> {
    config.validate()?;

    let ranges = parse_input(config.max_ranges, &config.input)?;
    check_inverted(&ranges, config.inverted)?;

    log::info!(
        "scanning {} ranges ({} IDs) with rule {:?} on {} thread(s)",
        ranges.len(),
        ranges.iter().map(|r| r.len()).sum::<u64>(),
        config.rule,
        config.jobs
    );

    let reports = if config.jobs > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.jobs)
            .build()?;
        pool.install(|| {
            ranges
                .par_iter()
                .map(|&range| scan_range(range, config))
                .collect::<Vec<_>>()
        })
    } else {
        ranges
            .iter()
            .map(|&range| scan_range(range, config))
            .collect()
    };

    let result = RunResult::from_reports(reports);
    log::info!(
        "found {} invalid IDs, total {}",
        result.invalid_count(),
        result.total
    );
    Ok(result)
}

fn check_inverted(ranges: &RangeList, policy: InvertedPolicy) -> Result<()> {
    for &range in ranges {
        if !range.is_inverted() {
            continue;
        }
        match policy {
            InvertedPolicy::Reject => return Err(EngineError::InvertedRange { range }),
            InvertedPolicy::Empty => log::warn!("range {range} is inverted; treating it as empty"),
        }
    }
    Ok(())
}

fn scan_range(range: IdRange, config: &Config) -> RangeReport {
    let report = invalids_in_range(range, config.rule);
    log::debug!(
        "range {range}: {} invalid, sum {}",
        report.invalid.len(),
        report.sum
    );
    report
}
