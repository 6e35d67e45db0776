//! Contains the [Cfg] struct that parses and stores the command line arguments
//!
//! [Cfg] uses procedural macros from the `clap` library to implement most of the argument parsing and validation logic.
//! Every option has a default, so running without arguments benchmarks all codecs with the canonical fixture and trial count.

use crate::codec::CodecKind;
use crate::fixture::FixtureSize;
use clap::Parser;
use clap_complete::Shell;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub mod inputoutput;
pub mod lib;
pub mod prelude;
pub mod test_util;
pub mod trial;
pub mod util;

use prelude::*;

/// The [CONFIG] static variable is used to store the [Cfg] created from the parsed command line arguments
pub static CONFIG: OnceLock<Cfg> = OnceLock::new();

/// Trial count used for every codec unless overridden
pub const DEFAULT_TRIALS: u32 = 1000;

/// The [Cfg] struct uses procedural macros and implements the [Config] trait, to provide convenient access to the command line arguments.
#[derive(Parser, Debug)]
#[command(name = "serbench - serialization codec benchmark")]
#[command(bin_name = "serbench", version)]
#[command(about = "serbench compares encoded size and encode/decode speed of serialization codecs.")]
#[command(
    long_about = "\nserbench compares encoded size and encode/decode speed of serialization codecs.\n\
Every codec encodes the same fixture a fixed number of times, stores the last\n\
artifact, then repeatedly reads the artifact back and decodes it.\n\
The mean latency of each phase and the encoded size are reported per codec."
)]
#[command(propagate_version = true)]
#[command(styles = lib::styles())]
pub struct Cfg {
    /// Verbosity level 0-4 (Errors, Warnings, Info, Debug, Trace)
    #[arg(short = 'v', long = "verbosity", default_value_t = 1)]
    verbosity: u8,

    /// Number of timed encode trials and decode trials per codec
    #[arg(short = 'n', long = "trials", visible_alias = "trial-count", default_value_t = DEFAULT_TRIALS)]
    trials: u32,

    /// Codecs to benchmark (default: all). Always run in canonical order.
    #[arg(
        short = 'c',
        long = "codecs",
        visible_alias = "codec",
        value_enum,
        value_delimiter = ',',
        num_args = 1..
    )]
    codecs: Vec<CodecKind>,

    /// Length of the fixture's service ID array
    #[arg(long, default_value_t = FixtureSize::SERVICE_IDS)]
    service_ids: u32,

    /// Number of nested records in the fixture
    #[arg(long, default_value_t = FixtureSize::ADDITIONAL_ITEMS)]
    additional_items: u32,

    /// Number of entries in the fixture's dictionary
    #[arg(long, default_value_t = FixtureSize::DICTIONARY_ENTRIES)]
    dictionary_entries: u32,

    /// Directory the encoded artifacts are written to, one file per codec
    #[arg(
        short = 'o',
        long = "out-dir",
        visible_alias = "out",
        default_value = "out",
        value_hint = clap::ValueHint::DirPath
    )]
    out_dir: PathBuf,

    /// Output the results in a machine readable format (default: none), requires setting a data format option (JSON, TOML)
    #[arg(
        name = "OUTPUT STATS",
        short = 'S',
        long = "output-stats",
        default_value_t = DataOutputMode::None,
        visible_alias = "output-stats-report",
        requires = "STATS FORMAT",
    )]
    stats_output: DataOutputMode,

    /// Output stats format (JSON/TOML), requires setting a stats output option
    #[arg(
        name = "STATS FORMAT",
        short = 'D',
        long = "stats-format",
        visible_alias = "stats-data-format",
        requires = "OUTPUT STATS"
    )]
    stats_output_format: Option<DataOutputFormat>,

    /// The report table is styled by default, set this flag to disable styling
    #[arg(short = 'd', long, default_value_t = false)]
    disable_styled_views: bool,

    /// Generate completion scripts for the specified shell.
    /// Note: The completion script is printed to stdout
    #[arg(
        long = "generate-completions",
        value_hint = clap::ValueHint::Other,
        value_name = "SHELL"
    )]
    pub generate_completions: Option<Shell>,
}

impl Cfg {
    /// Get a reference to the global config
    pub fn global() -> &'static Cfg {
        CONFIG.get().expect("Config is not initialized")
    }

    /// Generate completion scripts for the specified shell.
    pub fn generate_completion_script(shell: Shell) {
        clap_complete::generate(
            shell,
            &mut <Cfg as clap::CommandFactory>::command(),
            "serbench",
            &mut io::stdout(),
        );
    }
}

/// Implementing the config super trait requires implementing all the sub traits
impl Config for Cfg {}

impl TrialOpt for Cfg {
    #[inline]
    fn trials(&self) -> u32 {
        self.trials
    }

    fn codecs(&self) -> Vec<CodecKind> {
        trial::canonical_codec_order(&self.codecs)
    }

    fn fixture_size(&self) -> FixtureSize {
        FixtureSize {
            service_ids: self.service_ids,
            additional_items: self.additional_items,
            dictionary_entries: self.dictionary_entries,
        }
    }
}

impl InputOutputOpt for Cfg {
    #[inline]
    fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    fn stats_output_mode(&self) -> DataOutputMode {
        self.stats_output.clone()
    }

    fn stats_output_format(&self) -> Option<DataOutputFormat> {
        self.stats_output_format
    }
}

impl UtilOpt for Cfg {
    #[inline]
    fn verbosity(&self) -> u8 {
        self.verbosity
    }

    #[inline]
    fn disable_styled_views(&self) -> bool {
        self.disable_styled_views
    }
}

/// Parse the command line arguments, validate them, and store the resulting [Cfg] in [CONFIG]
pub fn init_config() -> Result<(), String> {
    let cfg = <Cfg as clap::Parser>::parse();
    cfg.validate_args()?;
    CONFIG
        .set(cfg)
        .map_err(|_| "Config already initialized".to_string())?;
    Ok(())
}
