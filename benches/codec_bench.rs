use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use serbench::codec::{CodecAdapter, CodecKind};
use serbench::fixture::{generate, FixtureSize};

pub fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let fixture = generate(FixtureSize::default());

    for kind in CodecKind::ALL {
        let adapter = kind.adapter();
        let encoded_len = adapter.encode(&fixture).expect("encode failed").len();
        group.throughput(Throughput::Bytes(encoded_len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(kind), &fixture, |b, f| {
            b.iter(|| adapter.encode(black_box(f)).unwrap())
        });
    }
    group.finish();
}

pub fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let fixture = generate(FixtureSize::default());

    for kind in CodecKind::ALL {
        let adapter = kind.adapter();
        let artifact = adapter.encode(&fixture).expect("encode failed");
        group.throughput(Throughput::Bytes(artifact.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(kind),
            artifact.as_slice(),
            |b, bytes| b.iter(|| adapter.decode(black_box(bytes)).unwrap()),
        );
    }
    group.finish();
}

pub fn bench_fixture_generation(c: &mut Criterion) {
    let _ = c.bench_function("generate default fixture", |b| {
        b.iter(|| generate(black_box(FixtureSize::default())))
    });
}
