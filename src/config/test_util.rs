#![allow(missing_docs)]

use super::prelude::*;
use crate::codec::CodecKind;
use crate::fixture::FixtureSize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
/// Complete configurable Mock config for testing
pub struct MockConfig {
    pub verbosity: u8,
    pub disable_styled_views: bool,
    pub trials: u32,
    pub codecs: Vec<CodecKind>,
    pub fixture_size: FixtureSize,
    pub out_dir: PathBuf,
    pub stats_output_mode: DataOutputMode,
    pub stats_output_format: Option<DataOutputFormat>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConfig {
    pub fn new() -> Self {
        Self {
            verbosity: 0,
            disable_styled_views: true,
            trials: 1,
            codecs: CodecKind::ALL.to_vec(),
            fixture_size: FixtureSize::default(),
            out_dir: PathBuf::from("out"),
            stats_output_mode: DataOutputMode::None,
            stats_output_format: None,
        }
    }

    /// A mock config with a small fixture, for fast tests
    pub fn new_small(trials: u32, out_dir: &Path) -> Self {
        Self {
            trials,
            fixture_size: FixtureSize {
                service_ids: 10,
                additional_items: 5,
                dictionary_entries: 10,
            },
            out_dir: out_dir.to_owned(),
            ..Default::default()
        }
    }
}

impl Config for MockConfig {}

impl TrialOpt for MockConfig {
    fn trials(&self) -> u32 {
        self.trials
    }
    fn codecs(&self) -> Vec<CodecKind> {
        self.codecs.clone()
    }
    fn fixture_size(&self) -> FixtureSize {
        self.fixture_size
    }
}

impl InputOutputOpt for MockConfig {
    fn out_dir(&self) -> &Path {
        &self.out_dir
    }
    fn stats_output_mode(&self) -> DataOutputMode {
        self.stats_output_mode.clone()
    }
    fn stats_output_format(&self) -> Option<DataOutputFormat> {
        self.stats_output_format
    }
}

impl UtilOpt for MockConfig {
    fn verbosity(&self) -> u8 {
        self.verbosity
    }
    fn disable_styled_views(&self) -> bool {
        self.disable_styled_views
    }
}
