use crate::options::{OutputFormat, Rule};
use crate::parsers::{parse_jobs, parse_positive_usize};
use clap::{ArgAction, Parser};
use invalid_ids_engine::parser::DEFAULT_MAX_RANGES;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "invalid_ids",
    version = crate::VERSION,
    about = "Sum the invalid IDs found in a list of ID ranges"
)]
pub struct Args {
    /// Comma-separated ranges such as `11-22,95-115`. Defaults to a built-in sample.
    pub input: Option<String>,

    /// Rule deciding which IDs are invalid
    #[arg(long, value_enum, default_value_t = Rule::Halves)]
    pub rule: Rule,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Maximum number of ranges accepted from the input
    #[arg(long, default_value_t = DEFAULT_MAX_RANGES, value_parser = parse_positive_usize)]
    pub max_ranges: usize,

    /// Number of threads used to scan ranges (defaults to the number of CPUs)
    #[arg(short, long, value_parser = parse_jobs)]
    pub jobs: Option<usize>,

    /// Fail when a range has its low bound above its high bound instead of skipping it
    #[arg(long)]
    pub reject_inverted: bool,

    /// Do not print an `INV` line for each invalid ID
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
