//! Contains the [run] function that is the entry point for serbench
use crate::bench::run_benchmarks;
use crate::config::init_config;
use crate::error::{BenchError, BenchResult};
use crate::report::Report;
use crate::store::FileStore;
use crate::util::lib::{exit, init_error_logger};
use crate::util::*;

/// Entry point for serbench
pub fn run() -> ExitCode {
    human_panic::setup_panic!();

    if let Err(e) = init_config() {
        eprintln!("{e}");
        return ExitCode::from(1);
    };

    init_error_logger(Cfg::global());

    if let Some(shell) = Cfg::global().generate_completions {
        Cfg::generate_completion_script(shell);
        log::warn!("Completions generated for {shell:?}. Exiting...");
        return ExitCode::from(0);
    }

    let exit_code: u8 = match benchmark(Cfg::global()) {
        Ok(report) => {
            let written = report
                .print()
                .map_err(|e| BenchError::store_failed("report", e))
                .and_then(|()| write_stats(Cfg::global(), &report));
            match written {
                Ok(()) => 0,
                Err(e) => {
                    crate::display_error(&e.to_string());
                    1
                }
            }
        }
        Err(e) => {
            crate::display_error(&e.to_string());
            1
        }
    };

    exit(exit_code)
}

fn benchmark(config: &impl Config) -> BenchResult<Report> {
    let mut store = FileStore::from_config(config);
    run_benchmarks(config, &mut store)
}

fn write_stats(config: &impl Config, report: &Report) -> BenchResult<()> {
    match config.stats_output_format() {
        Some(format) => report.write_stats(&config.stats_output_mode(), format),
        None => Ok(()),
    }
}
