//! Miscellaneous utility functions

use super::*;

/// Start the [stderrlog] instance, and immediately use it to log the configured artifact directory and [DataOutputMode].
pub fn init_error_logger(cfg: &(impl UtilOpt + TrialOpt + InputOutputOpt + std::fmt::Debug)) {
    stderrlog::new()
        .module("serbench")
        .verbosity(cfg.verbosity() as usize)
        .init()
        .expect("Failed to initialize logger");
    log::trace!("Artifacts written to {}", cfg.out_dir().display());
    match cfg.stats_output_mode() {
        DataOutputMode::File(path) => log::trace!("Stats output set to {}", path.display()),
        DataOutputMode::Stdout => log::trace!("Stats output set to stdout"),
        DataOutputMode::None => log::trace!("Stats output set to suppressed"),
    }
    log::trace!("Starting serbench with args: {cfg:#?}");
    log::trace!("Codecs selected: {:?}", cfg.codecs());
}

/// Exits the program with the appropriate exit code
pub fn exit(exit_code: u8) -> ExitCode {
    if exit_code == 0 {
        log::debug!("Exit successful");
        ExitCode::SUCCESS
    } else {
        ExitCode::from(exit_code)
    }
}
