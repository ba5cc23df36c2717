use std::f64::consts::TAU;
use std::time::Instant;

use anyhow::Result;

use crate::simulation::engine::{tick, Engine};
use crate::simulation::params::{TimeStep, G};
use crate::simulation::states::{Body, NVec2, System};

/// Time one tick of the direct O(n^2) accumulator for growing body counts
pub fn bench_tick() -> Result<()> {
    let ns = [2, 4, 8, 16, 32, 64, 128, 256];
    let steps = 200;
    let dt = TimeStep::new(60.0)?;

    println!("N,tick_us");
    for n in ns {
        let mut bodies = make_ring(n)?;

        // Warm-up, also gets every body past the bootstrap step
        tick(&mut bodies, dt);

        let t0 = Instant::now();
        for _ in 0..steps {
            tick(&mut bodies, dt);
        }
        let us_per_tick = t0.elapsed().as_secs_f64() * 1.0e6 / steps as f64;

        println!("{},{:.3}", n, us_per_tick);
    }
    Ok(())
}

/// Relative energy drift of a circular two-body orbit after ten periods,
/// for a range of step sizes. Paste output directly into a spreadsheet.
pub fn bench_energy_drift() -> Result<()> {
    println!("steps_per_period,dt_s,rel_energy_drift");

    for steps_per_period in [100, 250, 500, 1000, 2500, 5000] {
        let (mut sys, period) = circular_pair(5.0e24, 1.0e9)?;
        let dt = TimeStep::new(period / steps_per_period as f64)?;
        let mut engine = Engine::new(dt, 0);

        let e0 = sys.total_energy();
        engine.run(&mut sys, steps_per_period * 10);
        let drift = energy_drift(e0, sys.total_energy());

        println!("{},{:.3},{:.3e}", steps_per_period, dt.seconds(), drift);
    }
    Ok(())
}

/// Relative change from `e0` to `e1`, or the absolute change when `e0` is
/// zero (e.g. a lone body at rest).
pub fn energy_drift(e0: f64, e1: f64) -> f64 {
    if e0 == 0.0 {
        (e1 - e0).abs()
    } else {
        ((e1 - e0) / e0).abs()
    }
}

/// `n` equal masses spread on a ring, 1e9 m apart from the center
fn make_ring(n: usize) -> Result<Vec<Body>> {
    let mut bodies = Vec::with_capacity(n);
    for i in 0..n {
        let phase = TAU * i as f64 / n as f64;
        let x = NVec2::new(phase.cos(), phase.sin()) * 1.0e9;
        let v = NVec2::new(-phase.sin(), phase.cos()) * 100.0;
        bodies.push(Body::new(format!("b{i}"), 1.0e24, x, v, 1.0, "white")?);
    }
    Ok(bodies)
}

/// Two equal masses `separation` apart on a circular orbit about the origin.
/// Returns the system and the orbital period.
pub fn circular_pair(mass: f64, separation: f64) -> Result<(System, f64)> {
    let r = separation / 2.0;
    // each body circles the barycenter at radius r under a pull of G m^2 / (2r)^2
    let speed = (G * mass / (4.0 * r)).sqrt();
    let period = TAU * r / speed;

    let a = Body::new("A", mass, NVec2::new(-r, 0.0), NVec2::new(0.0, -speed), 1.0, "red")?;
    let b = Body::new("B", mass, NVec2::new(r, 0.0), NVec2::new(0.0, speed), 1.0, "blue")?;
    Ok((System::new(vec![a, b]), period))
}
