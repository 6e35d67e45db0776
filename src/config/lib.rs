//! Contains the [Config] super trait, and all the sub traits required by it
//!
//! Implementing the [Config] super trait is required by configs passed to the benchmark driver.

use super::{inputoutput::InputOutputOpt, trial::TrialOpt, util::UtilOpt};
use clap::builder::styling::{AnsiColor, Effects, Styles};

/// Super trait for all the traits that needed to be implemented by the config struct
pub trait Config: Send + Sync + std::marker::Sized
where
    // Subtraits that group together related configuration options
    Self: UtilOpt + TrialOpt + InputOutputOpt,
{
    /// Validate the arguments of the config
    fn validate_args(&self) -> Result<(), String> {
        if self.codecs().is_empty() {
            return Err("Invalid config: No codecs selected".to_string());
        }
        if self.stats_output_mode() != super::inputoutput::DataOutputMode::None
            && self.stats_output_format().is_none()
        {
            return Err(
                "Invalid config: Stats output requires a stats format (JSON or TOML)".to_string(),
            );
        }
        if self.out_dir().is_file() {
            return Err(format!(
                "Invalid config: Artifact directory is an existing file (got: {})",
                self.out_dir().to_string_lossy()
            ));
        }
        if self.verbosity() > 4 {
            return Err(format!(
                "Invalid config: Verbosity must be in the range 0-4 (got: {})",
                self.verbosity()
            ));
        }
        Ok(())
    }
}

impl<T> Config for &T
where
    T: Config,
{
    fn validate_args(&self) -> Result<(), String> {
        (*self).validate_args()
    }
}

impl<T> Config for Box<T>
where
    T: Config,
{
    fn validate_args(&self) -> Result<(), String> {
        (**self).validate_args()
    }
}

impl<T> Config for std::sync::Arc<T>
where
    T: Config,
{
    fn validate_args(&self) -> Result<(), String> {
        (**self).validate_args()
    }
}

/// Styling of the `--help` output
pub fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Cyan.on_default())
}
