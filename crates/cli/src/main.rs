use clap::Parser;
use invalid_ids_cli::args::Args;
use invalid_ids_cli::config::Config;
use invalid_ids_cli::error::AppError;
use invalid_ids_cli::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);
    let config = Config::from(args);

    let outcome = invalid_ids_engine::run(&config)
        .map_err(AppError::from)
        .and_then(|result| presentation::print_results(&result, &config));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
