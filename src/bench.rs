//! Runs the benchmark for every selected codec and collects the results in a [Report]
use crate::codec::CodecAdapter;
use crate::config::prelude::*;
use crate::error::BenchResult;
use crate::fixture::{generate, Fixture};
use crate::report::Report;
use crate::store::ArtifactStore;
use crate::trial::{run_decode_trials, run_encode_trials};

/// Generate the fixture, then for each codec in [TrialOpt::codecs]: time the encodes, store the last artifact
/// under the codec's key, time the fetch+decode cycles, and record the result.
///
/// Stops at the first error, the codecs after it are not run.
pub fn run_benchmarks<C, S>(config: &C, store: &mut S) -> BenchResult<Report>
where
    C: Config,
    S: ArtifactStore + ?Sized,
{
    let mut report = Report::new().with_styling(!config.disable_styled_views());
    let fixture = generate(config.fixture_size());
    log::debug!(
        "Fixture generated: {} service IDs, {} additional items, {} dictionary entries",
        fixture.service_ids.len(),
        fixture.additional_items.len(),
        fixture.dictionary.len()
    );

    for kind in config.codecs() {
        let adapter = kind.adapter();
        benchmark_codec(&*adapter, &fixture, store, config.trials(), &mut report)?;
    }
    report.finish();
    Ok(report)
}

fn benchmark_codec<A, S>(
    adapter: &A,
    fixture: &Fixture,
    store: &mut S,
    trials: u32,
    report: &mut Report,
) -> BenchResult<()>
where
    A: CodecAdapter + ?Sized,
    S: ArtifactStore + ?Sized,
{
    let name = adapter.name();
    let key = adapter.kind().key();
    log::info!("Benchmarking {name} with {trials} trials");

    let encoded = run_encode_trials(adapter, fixture, trials)?;
    log::debug!(
        "{name}: mean encode {:.02?}, {} bytes",
        encoded.mean_latency,
        encoded.encoded_size()
    );
    store.store(key, &encoded.artifact)?;

    let decode_latency = run_decode_trials(adapter, &*store, key, trials)?;
    log::debug!("{name}: mean fetch+decode {decode_latency:.02?}");

    report.record(
        name,
        encoded.encoded_size(),
        encoded.mean_latency,
        decode_latency,
    );
    Ok(())
}
