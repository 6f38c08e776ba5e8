//! Benchmark: multivector construction with and without repeated blades.

use kore_clifford::{BladeMask, Multivector, CGA3D};
use std::time::Instant;

fn bench_build(terms: &[(BladeMask, i64)], iters: usize) -> f64 {
    let start = Instant::now();
    for _ in 0..iters {
        let mv = Multivector::from_terms(terms.iter().copied());
        std::hint::black_box(&mv);
    }
    start.elapsed().as_secs_f64() / iters as f64
}

fn bench_grades(mv: &Multivector<i64>, iters: usize) -> f64 {
    let start = Instant::now();
    for _ in 0..iters {
        std::hint::black_box(mv.grades());
    }
    start.elapsed().as_secs_f64() / iters as f64
}

fn bench_render(mv: &Multivector<i64>, iters: usize) -> f64 {
    let start = Instant::now();
    for _ in 0..iters {
        std::hint::black_box(mv.to_string());
    }
    start.elapsed().as_secs_f64() / iters as f64
}

fn main() {
    let blades = 1u64 << CGA3D.dimension();
    println!("=== Kore Multivector Benchmark ===");
    println!("Algebra: CGA3D ({} basis vectors, {} blades)\n", CGA3D.dimension(), blades);

    let sizes: &[usize] = &[32, 256, 2048, 16384];

    println!("{:<10} {:>14} {:>14} {:>12} {:>12}",
        "Terms", "Distinct (us)", "Merged (us)", "Grades (us)", "Render (us)");
    println!("{}", "-".repeat(66));

    for &n in sizes {
        // Distinct masks up to the blade count, then wrap so larger inputs merge.
        let distinct: Vec<(BladeMask, i64)> = (0..n)
            .map(|i| (BladeMask::new(i as u64 % blades), (i % 7) as i64 - 3))
            .collect();
        // Every term lands on one of four blades.
        let merged: Vec<(BladeMask, i64)> = (0..n)
            .map(|i| (BladeMask::new([1, 6, 24, 31][i % 4]), (i % 5) as i64))
            .collect();

        let iters = if n <= 256 { 10_000 } else if n <= 2048 { 1_000 } else { 100 };

        let distinct_s = bench_build(&distinct, iters);
        let merged_s = bench_build(&merged, iters);

        let mv = Multivector::from_terms(distinct.iter().copied());
        let grades_s = bench_grades(&mv, iters);
        let render_s = bench_render(&mv, iters);

        println!("{:<10} {:>12.3}us {:>12.3}us {:>10.3}us {:>10.3}us",
            n,
            distinct_s * 1e6,
            merged_s * 1e6,
            grades_s * 1e6,
            render_s * 1e6,
        );
    }
}
