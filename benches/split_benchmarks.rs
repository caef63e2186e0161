use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stringkit::low_mem_split;

fn build_input(segments: usize) -> String {
    let mut s = String::with_capacity(segments * 16);
    for i in 0..segments {
        s.push_str("segment-");
        s.push_str(&i.to_string());
        s.push_str("\r\n");
        // Sprinkle in runs the splitter has to collapse.
        if i % 7 == 0 {
            s.push_str("\r\n\r\n");
        }
    }
    s
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    for &segments in &[1_000usize, 100_000, 1_000_000] {
        let input = build_input(segments);
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("low_mem_split", segments),
            &input,
            |b, input| b.iter(|| low_mem_split(black_box(input), "\r\n")),
        );

        group.bench_with_input(
            BenchmarkId::new("std_split_filter", segments),
            &input,
            |b, input| {
                b.iter(|| {
                    black_box(input)
                        .split("\r\n")
                        .filter(|part| !part.trim().is_empty())
                        .collect::<Vec<_>>()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_split);
criterion_main!(benches);
