use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use matmul_tiling::driver::{Workload, flops_per_call};
use matmul_tiling::{CANONICAL_SIZES, DEFAULT_TILE_SIZE, Initializer, Variant};
use std::time::Duration;

const SEED: u64 = 0x5EED_CAFE;

fn bench_variant(c: &mut Criterion, variant: Variant) {
    let mut group = c.benchmark_group(variant.name());
    // The large sizes take seconds per call with the naive order.
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(20));

    for n in CANONICAL_SIZES {
        let mut init = Initializer::from_seed(SEED ^ n as u64);
        let mut work = match Workload::allocate(n, &mut init) {
            Ok(work) => work,
            Err(err) => {
                eprintln!("skipping {} n={}: {}", variant.name(), n, err);
                continue;
            }
        };

        group.throughput(Throughput::Elements(flops_per_call(n)));
        group.bench_function(BenchmarkId::from_parameter(n), |bench| {
            bench.iter(|| {
                work.step(variant, DEFAULT_TILE_SIZE);
                black_box(work.c.as_slice());
            });
        });
    }
    group.finish();
}

fn matmul_benchmarks(c: &mut Criterion) {
    for variant in Variant::ALL {
        bench_variant(c, variant);
    }
}

criterion_group!(benches, matmul_benchmarks);
criterion_main!(benches);
