//! Times one generation of the transition engine at several grid sizes

use std::time::Instant;

use life_board::{Grid, GridError, domain::step};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark_step(width: usize, height: usize, iterations: u32) -> Result<f64, GridError> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut current = Grid::new(width, height)?;
    current.randomize(&mut rng, 0.3);
    let mut next = Grid::new(width, height)?;

    let start = Instant::now();
    for _ in 0..iterations {
        step(&current, &mut next)?;
        std::mem::swap(&mut current, &mut next);
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<(), GridError> {
    println!("=== Game of Life step benchmark ===\n");
    println!("{:>12} {:>12} {:>16}", "Size", "ms/gen", "Mcells/s");
    println!("{:-<42}", "");

    let sizes = [(80, 60), (200, 200), (500, 500), (1000, 1000)];
    let iterations = 20;

    for (w, h) in sizes {
        let ms = benchmark_step(w, h, iterations)?;
        let throughput = (w * h) as f64 / (ms / 1000.0) / 1_000_000.0;
        println!("{:>12} {:>12.3} {:>16.1}", format!("{w}x{h}"), ms, throughput);
    }
    Ok(())
}
