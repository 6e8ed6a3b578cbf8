use crate::args::Args;
use crate::options;
pub use invalid_ids_engine::config::{Config, ConfigBuilder, SAMPLE_INPUT};
use invalid_ids_engine::options::{self as engine_options, InvertedPolicy};

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let inverted = if args.reject_inverted {
            InvertedPolicy::Reject
        } else {
            InvertedPolicy::Empty
        };

        Self {
            input: args.input.unwrap_or_else(|| SAMPLE_INPUT.to_string()),
            max_ranges: args.max_ranges,
            rule: args.rule.into(),
            jobs: args.jobs.unwrap_or_else(num_cpus::get),
            inverted,
            format: args.format.into(),
            quiet: args.quiet,
        }
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(options::OutputFormat, engine_options::OutputFormat, Text, Json);
map_enum!(options::Rule, engine_options::Rule, Halves, Repeated);
