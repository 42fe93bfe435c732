use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gauss::{Gauss, LinearSolver};
use nalgebra::{DMatrix, DVector};

fn bench_dense(gauss: &Gauss<f64>, cols: usize) {
    // Small entries plus a dominant anti-diagonal, so the solver needs to do row-swapping
    let mat_a = DMatrix::from_fn(cols, cols, |i, j| {
        if i + j == cols - 1 {
            cols as f64
        } else {
            ((i * 7 + j * 3) % 11) as f64 / (11.0 * cols as f64)
        }
    });
    let x = DVector::from_fn(cols, |i, _| (i % 5) as f64 + 0.5);
    let b = &mat_a * &x;

    let row_major = mat_a.transpose();
    let x_comp = gauss
        .solve(cols, row_major.as_slice(), b.as_slice())
        .unwrap();

    let norm = (x - x_comp).norm() / (cols as f64).sqrt();
    assert!(norm < 1e-9);
}

fn criterion_benchmark(c: &mut Criterion) {
    let gauss = Gauss::default();
    c.bench_function("Dense solver 5", |b| {
        b.iter(|| bench_dense(&gauss, black_box(5)))
    });
    c.bench_function("Dense solver 10", |b| {
        b.iter(|| bench_dense(&gauss, black_box(10)))
    });
    c.bench_function("Dense solver 50", |b| {
        b.iter(|| bench_dense(&gauss, black_box(50)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
