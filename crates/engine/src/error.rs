use crate::range::IdRange;
use thiserror::Error;

/// Errors raised while turning input text into a `RangeList`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Malformed range '{token}': {reason}")]
    MalformedRange { token: String, reason: String },

    #[error("Too many ranges: at most {limit} allowed")]
    TooManyRanges { limit: usize },

    #[error("Integer overflow in range '{token}': {literal} does not fit in 32 bits")]
    IntegerOverflow { token: String, literal: String },
}

impl ParseError {
    pub(crate) fn malformed(token: &str, reason: impl Into<String>) -> Self {
        Self::MalformedRange {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Inverted range '{range}': low bound is greater than high bound")]
    InvertedRange { range: IdRange },

    #[error("Thread pool creation failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// True when the error was caused by the range list itself rather than
    /// by the environment or configuration.
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::InvertedRange { .. })
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
