use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndsparse_core::prelude::*;

criterion_group!(fill, fill_benchmark, iter_benchmark);
criterion_main!(fill);

fn checkerboard(size: usize) -> Matrix2D<u32> {
    let mut m = Matrix2D::new(0);
    for i in (0..size).step_by(2) {
        for j in (0..size).step_by(2) {
            m.at(i + 1).at(j).write(8);
            m.at(i).at(j + 1).write(8);
        }
    }
    m
}

fn fill_benchmark(c: &mut Criterion) {
    for &size in &[16, 256] {
        c.bench_function(&format!("checkerboard_{}", size), |b| {
            b.iter(|| checkerboard(black_box(size)))
        });
    }
}

fn iter_benchmark(c: &mut Criterion) {
    let m = checkerboard(256);
    c.bench_function("iter_checkerboard_256", |b| {
        b.iter(|| m.iter().map(|(_, _, &v)| v as u64).sum::<u64>())
    });
}
