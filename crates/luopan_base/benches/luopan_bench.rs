use criterion::{Criterion, black_box, criterion_group, criterion_main};
use luopan_base::{
    ZodiacSign, affected_birth_years, annual_chart, center_star, flying_star_grid,
    resolve_mountain, tai_sui,
};

fn compass_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("compass");
    group.bench_function("resolve_mountain", |b| {
        b.iter(|| resolve_mountain(black_box(217.3)))
    });
    group.bench_function("resolve_mountain_wrap", |b| {
        b.iter(|| resolve_mountain(black_box(-1083.0)))
    });
    group.finish();
}

fn flying_star_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("flying_star");
    group.bench_function("center_star", |b| b.iter(|| center_star(black_box(2024))));
    group.bench_function("flying_star_grid", |b| {
        b.iter(|| flying_star_grid(black_box(3)))
    });
    group.bench_function("annual_chart", |b| b.iter(|| annual_chart(black_box(2024))));
    group.finish();
}

fn tai_sui_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tai_sui");
    group.bench_function("tai_sui", |b| b.iter(|| tai_sui(black_box(2024))));
    group.bench_function("affected_birth_years", |b| {
        b.iter(|| affected_birth_years(ZodiacSign::Dragon, black_box(2024)))
    });
    group.finish();
}

criterion_group!(benches, compass_bench, flying_star_bench, tai_sui_bench);
criterion_main!(benches);
