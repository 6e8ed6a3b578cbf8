use crate::range::IdRange;
use crate::stats::RangeReport;
use crate::validator::Rule;
use std::fmt::Write;

/// Checks every ID in `range` against `rule` and collects the invalid ones.
///
/// An inverted range yields an empty report without calling the validator.
pub fn invalids_in_range(range: IdRange, rule: Rule) -> RangeReport {
    scan_with(range, |id| rule.is_valid(id))
}

/// Same as [`invalids_in_range`] with an arbitrary validity predicate.
pub fn scan_with<F>(range: IdRange, mut is_valid: F) -> RangeReport
where
    F: FnMut(&str) -> bool,
{
    let mut report = RangeReport::new(range);
    // u32::MAX has 10 digits
    let mut buf = String::with_capacity(10);

    for id in range.ids() {
        buf.clear();
        // Writing into a String cannot fail.
        let _ = write!(buf, "{id}");
        if !is_valid(&buf) {
            log::trace!("invalid id {id} in {range}");
            report.record(id);
        }
    }

    report
}
