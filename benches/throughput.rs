use std::time::Duration;

use criterion::measurement::WallTime;
use criterion::{
    criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use pzip::zip::{self, ZipOptions};

const SIZES_ALL: &[usize] = &[8192, 65536, 4_194_304];

fn cap(group: &mut BenchmarkGroup<'_, WallTime>) {
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);
}

/// Lowercase test data with a mix of short and long runs.
fn get_test_data(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut letter = 0u8;
    let mut run_len = 1usize;
    while data.len() < size {
        let take = run_len.min(size - data.len());
        data.extend(std::iter::repeat(b'a' + letter).take(take));
        letter = (letter + 1) % 26;
        run_len = run_len % 9 + 1;
    }
    data
}

fn bench_zip(c: &mut Criterion) {
    let mut group = c.benchmark_group("zip");
    cap(&mut group);
    for &size in SIZES_ALL {
        let data = get_test_data(size);
        group.throughput(Throughput::Bytes(size as u64));

        for threads in [1usize, 4] {
            let options = ZipOptions { threads };
            group.bench_with_input(
                BenchmarkId::new(format!("encode-t{threads}"), size),
                &data,
                |b, data| {
                    b.iter(|| zip::encode_with_options(data, &options).unwrap());
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_zip);
criterion_main!(benches);
