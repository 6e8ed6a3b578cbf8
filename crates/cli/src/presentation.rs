use crate::config::Config;
use crate::error::Result;
use invalid_ids_engine::options::OutputFormat;
use invalid_ids_engine::stats::RunResult;
use std::io::{self, Write};

pub fn print_results(result: &RunResult, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Text => {
            let stderr = io::stderr();
            let mut out = stderr.lock();
            write_text(&mut out, result, config.quiet)?;
        }
        OutputFormat::Json => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_json(&mut out, result)?;
        }
    }
    Ok(())
}

/// Diagnostic form: one `INV <id>` line per invalid ID, then the total.
pub fn write_text<W: Write>(out: &mut W, result: &RunResult, quiet: bool) -> io::Result<()> {
    if !quiet {
        for id in result.invalid_ids() {
            writeln!(out, "INV {id}")?;
        }
    }
    writeln!(out, "invalids = {}", result.total)?;
    out.flush()
}

pub fn write_json<W: Write>(out: &mut W, result: &RunResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)?;
    Ok(())
}
