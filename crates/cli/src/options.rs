use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `INV <id>` lines and `invalids = <total>` on stderr
    #[default]
    Text,
    /// Per-range report as JSON on stdout
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Rule {
    /// A block of digits written exactly twice (e.g. 6464)
    #[default]
    Halves,
    /// A block of digits written two or more times (e.g. 646464)
    Repeated,
}
