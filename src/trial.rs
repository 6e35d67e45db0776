//! Contains the timed trial loops: [run_encode_trials] and [run_decode_trials]
//!
//! Both loops time all iterations together, from just before the first operation to just after the last,
//! and report the mean latency of one operation. Any error ends the loop immediately.

use crate::codec::CodecAdapter;
use crate::error::{BenchError, BenchResult};
use crate::fixture::Fixture;
use crate::store::ArtifactStore;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Result of the encode phase of one codec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOutcome {
    /// Mean latency of one encode
    pub mean_latency: Duration,
    /// Output of the last timed encode
    pub artifact: Vec<u8>,
}

impl EncodeOutcome {
    /// Size of the encoded artifact in bytes
    #[inline]
    pub fn encoded_size(&self) -> usize {
        self.artifact.len()
    }
}

fn check_count(count: u32) -> BenchResult<()> {
    if count == 0 {
        return Err(BenchError::Config(
            "Trial count must be at least 1, mean latency is undefined for zero trials".to_string(),
        ));
    }
    Ok(())
}

/// Encode `fixture` `count` times back to back, and return the mean latency and the last encoded artifact.
///
/// The artifact comes from the last timed iteration, no extra encode is performed.
pub fn run_encode_trials<A>(adapter: &A, fixture: &Fixture, count: u32) -> BenchResult<EncodeOutcome>
where
    A: CodecAdapter + ?Sized,
{
    check_count(count)?;

    let start = Instant::now();
    let mut artifact = adapter.encode(black_box(fixture))?;
    for _ in 1..count {
        artifact = adapter.encode(black_box(fixture))?;
    }
    let elapsed = start.elapsed();

    Ok(EncodeOutcome {
        mean_latency: elapsed / count,
        artifact,
    })
}

/// Fetch the artifact stored under `key` and decode it, `count` times, and return the mean latency of one fetch+decode cycle.
///
/// The artifact is read back from the store on every cycle, so the returned latency includes the fetch.
/// Every decode builds a fresh [Fixture] that is dropped right after.
pub fn run_decode_trials<A, S>(adapter: &A, store: &S, key: &str, count: u32) -> BenchResult<Duration>
where
    A: CodecAdapter + ?Sized,
    S: ArtifactStore + ?Sized,
{
    check_count(count)?;

    let start = Instant::now();
    for _ in 0..count {
        let bytes = store.fetch(key)?;
        let decoded = adapter.decode(&bytes)?;
        drop(black_box(decoded));
    }
    let elapsed = start.elapsed();

    Ok(elapsed / count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::native::NativeBinary;
    use crate::codec::CodecKind;
    use crate::error::IoFailure;
    use crate::fixture::{generate, FixtureSize};
    use crate::store::MemStore;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::io;

    /// Adapter that counts calls and delegates to bincode
    #[derive(Default)]
    struct CountingAdapter {
        encodes: Cell<u32>,
        decodes: Cell<u32>,
    }

    impl CodecAdapter for CountingAdapter {
        fn kind(&self) -> CodecKind {
            CodecKind::NativeBinary
        }
        fn encode(&self, fixture: &Fixture) -> BenchResult<Vec<u8>> {
            self.encodes.set(self.encodes.get() + 1);
            // Tag the output with the call number to tell the artifacts apart
            let mut bytes = NativeBinary.encode(fixture)?;
            bytes.push(self.encodes.get() as u8);
            Ok(bytes)
        }
        fn decode(&self, bytes: &[u8]) -> BenchResult<Fixture> {
            self.decodes.set(self.decodes.get() + 1);
            NativeBinary.decode(bytes)
        }
    }

    /// Store whose fetch always fails with not found, and counts fetches
    #[derive(Default)]
    struct MissingStore {
        fetches: Cell<u32>,
    }

    impl ArtifactStore for MissingStore {
        fn store(&mut self, _key: &str, _bytes: &[u8]) -> BenchResult<()> {
            Ok(())
        }
        fn fetch(&self, key: &str) -> BenchResult<Vec<u8>> {
            self.fetches.set(self.fetches.get() + 1);
            Err(BenchError::fetch_failed(
                key,
                io::Error::new(io::ErrorKind::NotFound, "gone"),
            ))
        }
    }

    fn small_fixture() -> Fixture {
        generate(FixtureSize {
            service_ids: 10,
            additional_items: 3,
            dictionary_entries: 10,
        })
    }

    #[test]
    fn encode_zero_trials_is_config_error() {
        let adapter = CountingAdapter::default();
        let res = run_encode_trials(&adapter, &small_fixture(), 0);
        assert!(matches!(res, Err(BenchError::Config(_))));
        assert_eq!(adapter.encodes.get(), 0);
    }

    #[test]
    fn decode_zero_trials_is_config_error() {
        let adapter = CountingAdapter::default();
        let store = MemStore::new();
        let res = run_decode_trials(&adapter, &store, "native", 0);
        assert!(matches!(res, Err(BenchError::Config(_))));
        assert_eq!(adapter.decodes.get(), 0);
    }

    #[test]
    fn encode_runs_exactly_count_times_and_keeps_last_artifact() {
        let adapter = CountingAdapter::default();
        let outcome = run_encode_trials(&adapter, &small_fixture(), 7).unwrap();
        assert_eq!(adapter.encodes.get(), 7);
        assert_eq!(outcome.artifact.last(), Some(&7));
        assert_eq!(outcome.encoded_size(), outcome.artifact.len());
    }

    #[test]
    fn single_trial_performs_one_operation() {
        let adapter = CountingAdapter::default();
        let fixture = small_fixture();
        let outcome = run_encode_trials(&adapter, &fixture, 1).unwrap();
        assert_eq!(adapter.encodes.get(), 1);
        assert!(outcome.mean_latency.as_secs_f64().is_finite());

        let mut store = MemStore::new();
        store.store("native", &outcome.artifact).unwrap();
        let mean = run_decode_trials(&adapter, &store, "native", 1).unwrap();
        assert_eq!(adapter.decodes.get(), 1);
        assert!(mean.as_secs_f64().is_finite());
    }

    #[test]
    fn decode_fetches_and_decodes_every_cycle() {
        let adapter = CountingAdapter::default();
        let fixture = small_fixture();
        let outcome = run_encode_trials(&adapter, &fixture, 1).unwrap();
        let mut store = MemStore::new();
        store.store("native", &outcome.artifact).unwrap();

        let _ = run_decode_trials(&adapter, &store, "native", 25).unwrap();
        assert_eq!(adapter.decodes.get(), 25);
    }

    #[test]
    fn decode_fails_fast_when_fetch_fails() {
        let adapter = CountingAdapter::default();
        let store = MissingStore::default();
        let err = run_decode_trials(&adapter, &store, "native", 1000).unwrap_err();
        assert_eq!(err.io_failure(), Some(IoFailure::NotFound));
        assert_eq!(store.fetches.get(), 1);
        assert_eq!(adapter.decodes.get(), 0);
    }

    #[test]
    fn decode_error_stops_the_loop() {
        let adapter = CountingAdapter::default();
        let mut store = MemStore::new();
        store.store("native", &[0xFF; 3]).unwrap();
        let err = run_decode_trials(&adapter, &store, "native", 10).unwrap_err();
        assert!(matches!(err, BenchError::Decode { .. }));
        assert_eq!(adapter.decodes.get(), 1);
    }

    #[test]
    fn native_end_to_end() {
        let fixture = generate(FixtureSize::default());
        let outcome = run_encode_trials(&NativeBinary, &fixture, 3).unwrap();
        let mut store = MemStore::new();
        store.store("native", &outcome.artifact).unwrap();
        let bytes = store.fetch("native").unwrap();
        let decoded = NativeBinary.decode(&bytes).unwrap();
        assert_eq!(decoded.id, 12345);
        assert_eq!(decoded.name, "some_name");
        assert_eq!(decoded, fixture);
    }
}
