use std::time::Instant;

use crate::simulation::params::Parameters;
use crate::simulation::simulator::Simulator;
use crate::simulation::states::{Body, NVec2, Rgb};

/// Helper to build `n` bodies spread over the plane, deterministic so runs compare
fn make_bodies(n: usize, bounds: NVec2) -> Vec<Body> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            // no rand needed: a spread of points well inside the walls
            let x = NVec2::new(
                bounds.x * (0.5 + 0.4 * (i_f * 0.37).sin()),
                bounds.y * (0.5 + 0.4 * (i_f * 0.13).cos()),
            );
            Body::new(x, NVec2::zeros(), 1.0, Rgb::from_mass(1.0))
        })
        .collect()
}

/// Time `Simulator::tick` for a range of body counts
/// Paste output directly into a spreadsheet to graph
pub fn bench_tick() {
    let ns = [50, 100, 200, 400, 800];
    let params = Parameters::default();

    println!("N,tick_ms");

    for n in ns {
        // Small n: average over more ticks to smooth noise
        let steps = if n <= 200 { 50 } else { 5 };

        let mut sim = Simulator::new(make_bodies(n, params.bounds), params.clone());

        // Warm-up
        sim.tick();

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.tick();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
