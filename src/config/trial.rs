//! Contains the [TrialOpt] Trait for the options that decide what is benchmarked and how many times

use crate::codec::CodecKind;
use crate::fixture::FixtureSize;

/// Options controlling the benchmark itself
pub trait TrialOpt {
    /// Number of encode trials and decode trials per codec
    fn trials(&self) -> u32;
    /// Codecs to benchmark, in the order they should run
    fn codecs(&self) -> Vec<CodecKind>;
    /// Size of the generated fixture
    fn fixture_size(&self) -> FixtureSize;
}

impl<T> TrialOpt for &T
where
    T: TrialOpt,
{
    fn trials(&self) -> u32 {
        (*self).trials()
    }
    fn codecs(&self) -> Vec<CodecKind> {
        (*self).codecs()
    }
    fn fixture_size(&self) -> FixtureSize {
        (*self).fixture_size()
    }
}

impl<T> TrialOpt for Box<T>
where
    T: TrialOpt,
{
    fn trials(&self) -> u32 {
        (**self).trials()
    }
    fn codecs(&self) -> Vec<CodecKind> {
        (**self).codecs()
    }
    fn fixture_size(&self) -> FixtureSize {
        (**self).fixture_size()
    }
}

impl<T> TrialOpt for std::sync::Arc<T>
where
    T: TrialOpt,
{
    fn trials(&self) -> u32 {
        (**self).trials()
    }
    fn codecs(&self) -> Vec<CodecKind> {
        (**self).codecs()
    }
    fn fixture_size(&self) -> FixtureSize {
        (**self).fixture_size()
    }
}

/// Sorts and deduplicates a codec selection. An empty selection means every codec.
pub fn canonical_codec_order(selected: &[CodecKind]) -> Vec<CodecKind> {
    if selected.is_empty() {
        return CodecKind::ALL.to_vec();
    }
    let mut codecs = selected.to_vec();
    codecs.sort_unstable();
    codecs.dedup();
    codecs
}
