//! Miscellaneous utility functions
pub mod lib;

pub(crate) use {
    crate::config::{prelude::*, Cfg},
    std::process::ExitCode,
};
