use criterion::*;
use rand::prelude::*;

use musals::{Aligner, MultipleAlign, PairwiseAlign, Progressive};

fn random_strings(cardinality: usize, len: usize, alphabet: &[u8], seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..cardinality)
        .map(|_| (0..len).map(|_| alphabet[rng.gen_range(0..alphabet.len())]).collect())
        .collect()
}

fn bench_pairwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("NW-pairwise");

    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);

    group.sampling_mode(SamplingMode::Flat);

    let seed = 42;
    let cardinality = 10;
    let aligner = Aligner::default();

    group.throughput(Throughput::Elements((cardinality * cardinality) as u64));

    for len in [10, 25, 50, 100, 250, 500] {
        let sequences = random_strings(cardinality, len, b"ACGT", seed);

        let id = BenchmarkId::new("score-len", len);
        group.bench_with_input(id, &len, |b, _| {
            b.iter_with_large_drop(|| {
                black_box({
                    sequences
                        .iter()
                        .map(|x| sequences.iter().map(|y| aligner.score(x, y)).collect::<Vec<_>>())
                        .collect::<Vec<_>>()
                })
            })
        });

        let id = BenchmarkId::new("align-len", len);
        group.bench_with_input(id, &len, |b, _| {
            b.iter_with_large_drop(|| {
                black_box({
                    sequences
                        .iter()
                        .map(|x| sequences.iter().map(|y| aligner.align(x, y)).collect::<Vec<_>>())
                        .collect::<Vec<_>>()
                })
            })
        });
    }

    group.finish();
}

fn bench_progressive(c: &mut Criterion) {
    let mut group = c.benchmark_group("NW-progressive");
    group.sampling_mode(SamplingMode::Flat);

    let seed = 42;
    let len = 100;
    let aligner = Aligner::default();
    let progressive = Progressive::new(&aligner);

    for cardinality in [4, 8, 16, 32] {
        let sequences = random_strings(cardinality, len, b"ACGT", seed);

        group.throughput(Throughput::Elements(cardinality as u64));

        let id = BenchmarkId::new("msa-cardinality", cardinality);
        group.bench_with_input(id, &cardinality, |b, _| {
            b.iter_with_large_drop(|| black_box(progressive.align_multiple(&sequences)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pairwise, bench_progressive);
criterion_main!(benches);
