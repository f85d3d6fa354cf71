use criterion::{criterion_group, criterion_main, Criterion};
use prism_math::{color, quaternion, vec3, vec4, Matrix, Vector};
use std::hint::black_box;

fn sample_transform() -> Matrix {
    Matrix::scaling(2.0, 0.5, 3.0)
        * Matrix::rotation_roll_pitch_yaw(0.4, -1.0, 0.25)
        * Matrix::translation(-1.0, 4.0, 2.5)
}

fn bench_matrix(c: &mut Criterion) {
    let a = sample_transform();
    let b = Matrix::perspective_fov_lh(1.0, 16.0 / 9.0, 0.1, 100.0);

    let mut group = c.benchmark_group("Matrix");

    group.bench_function("Multiply", |bench| {
        bench.iter(|| black_box(Matrix::multiply(black_box(&a), black_box(&b))));
    });

    group.bench_function("Inverse", |bench| {
        bench.iter(|| black_box(black_box(&a).inverse()));
    });

    group.bench_function("Decompose", |bench| {
        bench.iter(|| black_box(black_box(&a).decompose()));
    });

    group.finish();
}

fn bench_vectors(c: &mut Criterion) {
    let m = sample_transform();
    let points: Vec<Vector> = (0..1_000)
        .map(|i| {
            let f = i as f32;
            Vector::new(f, f * 0.5, -f, 1.0)
        })
        .collect();

    let mut group = c.benchmark_group("Vector Streams");

    group.bench_function("vec3 transform_coord (1000 points)", |bench| {
        bench.iter(|| {
            for p in &points {
                black_box(vec3::transform_coord(*p, &m));
            }
        });
    });

    group.bench_function("vec4 transform (1000 points)", |bench| {
        bench.iter(|| {
            for p in &points {
                black_box(vec4::transform(*p, &m));
            }
        });
    });

    group.finish();
}

fn bench_quaternions(c: &mut Criterion) {
    let q0 = quaternion::rotation_roll_pitch_yaw(0.9, -0.3, 2.0);
    let q1 = quaternion::rotation_axis(Vector::new(1.0, 1.0, 0.0, 0.0), -2.5);

    let mut group = c.benchmark_group("Quaternion");

    group.bench_function("Slerp", |bench| {
        bench.iter(|| black_box(quaternion::slerp(black_box(q0), black_box(q1), 0.3)));
    });

    group.bench_function("Rotate vec3", |bench| {
        let v = Vector::new(0.3, -1.5, 2.0, 0.0);
        bench.iter(|| black_box(vec3::rotate(black_box(v), black_box(q0))));
    });

    group.finish();
}

fn bench_colors(c: &mut Criterion) {
    let rgb = Vector::new(0.8, 0.3, 0.55, 1.0);

    let mut group = c.benchmark_group("Color");

    group.bench_function("RGB -> HSL -> RGB", |bench| {
        bench.iter(|| black_box(color::hsl_to_rgb(color::rgb_to_hsl(black_box(rgb)))));
    });

    group.bench_function("RGB -> sRGB", |bench| {
        bench.iter(|| black_box(color::rgb_to_srgb(black_box(rgb))));
    });

    group.finish();
}

criterion_group!(benches, bench_matrix, bench_vectors, bench_quaternions, bench_colors);
criterion_main!(benches);
