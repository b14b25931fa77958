//! Rule engine benchmark comparing serial and parallel updates

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use life_canvas::domain::{BufferSet, ComputeMode, populate_random};

fn benchmark(mode: ComputeMode, size: usize, iterations: u32) -> f64 {
    let mut buffers = BufferSet::new(size, size, 2).unwrap_or_else(|e| panic!("{}", e));
    let mut rng = StdRng::seed_from_u64(size as u64);
    populate_random(buffers.current_mut(), &mut rng);

    let start = Instant::now();
    for _ in 0..iterations {
        let (current, next) = buffers.split();
        mode.apply(current, next);
        buffers.advance();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Update Benchmark ===\n");

    let sizes = [25, 100, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(ComputeMode::Serial, size, iterations);
        let parallel_ms = benchmark(ComputeMode::Parallel, size, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 2000;
    let cells = size * size;
    let ms = benchmark(ComputeMode::Parallel, size, iterations);
    println!(
        "\nParallel at {}x{}: {:.2} ms/gen, {:.1}M cells/sec",
        size, size, ms, (cells as f64) / (ms / 1000.0) / 1_000_000.0
    );
}
