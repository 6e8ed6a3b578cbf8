use crate::error::{EngineError, Result};
use crate::options::{InvertedPolicy, OutputFormat, Rule};
use crate::parser::DEFAULT_MAX_RANGES;
use derive_builder::Builder;

/// Range list scanned when no input is supplied.
pub const SAMPLE_INPUT: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
1698522-1698528,446443-446449,38593856-38593862,565653-565659,\
824824821-824824827,2121212118-2121212124";

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default = "SAMPLE_INPUT.to_string()")]
    pub input: String,
    #[builder(default = "DEFAULT_MAX_RANGES")]
    pub max_ranges: usize,
    #[builder(default)]
    pub rule: Rule,
    #[builder(default = "1")]
    pub jobs: usize,
    #[builder(default)]
    pub inverted: InvertedPolicy,

    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: SAMPLE_INPUT.to_string(),
            max_ranges: DEFAULT_MAX_RANGES,
            rule: Rule::default(),
            jobs: 1,
            inverted: InvertedPolicy::default(),
            format: OutputFormat::default(),
            quiet: false,
        }
    }
}

impl Config {
    /// Rejects values that would make a run meaningless.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Config` when `jobs` or `max_ranges` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.jobs == 0 {
            return Err(EngineError::Config("jobs must be at least 1".to_string()));
        }
        if self.max_ranges == 0 {
            return Err(EngineError::Config(
                "max_ranges must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
