use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tagcloud_graphics::Size;
use tagcloud_layout::FlowLayout;

const CONTAINER_WIDTH: f32 = 480.0;
const TAG_COUNT_SAMPLES: &[usize] = &[10, 50, 250];

fn tag_sizes(count: usize) -> Vec<Size> {
    (0..count)
        .map(|i| Size::new(30.0 + (i * 37 % 140) as f32, 18.0 + (i * 11 % 40) as f32))
        .collect()
}

fn bench_flow_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("flow_layout");
    let layout = FlowLayout::default();
    for &count in TAG_COUNT_SAMPLES {
        let sizes = tag_sizes(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &sizes, |b, sizes| {
            b.iter(|| black_box(layout.layout(black_box(sizes), CONTAINER_WIDTH)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_flow_layout);
criterion_main!(benches);
