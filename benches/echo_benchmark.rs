use calc_echo::{echo_input, EchoConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// 多バイト文字を含む入力を生成
fn create_input(len: usize) -> String {
    ['a', 'ß', '語', '🦀'].iter().cycle().take(len).collect()
}

/// ポリシー別のエコーのベンチマーク
fn benchmark_echo_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("echo_input");

    for size in [16, 1_000, 10_000].iter() {
        let input = create_input(*size);

        group.bench_with_input(BenchmarkId::new("truncate", size), &input, |b, input| {
            let config = EchoConfig::default();
            b.iter(|| black_box(echo_input(black_box(input), &config)))
        });

        group.bench_with_input(BenchmarkId::new("full", size), &input, |b, input| {
            let config = EchoConfig::full();
            b.iter(|| black_box(echo_input(black_box(input), &config)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_echo_policies);
criterion_main!(benches);
