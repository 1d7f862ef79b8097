//! Advect a tracer blob one explicit step and report its budget.
//!
//! ```text
//! FATHOM_ARCH=threaded RUST_LOG=fathom_exec=debug cargo run --example quickstart
//! ```

use fathom::prelude::*;
use std::error::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let architecture: Architecture = std::env::var("FATHOM_ARCH")
        .unwrap_or_else(|_| "serial".to_string())
        .parse()?;
    let exec = ExecutionConfig::for_architecture(architecture).build()?;

    // 200 km periodic channel, 1 km deep, 10 layers.
    let grid = Grid::doubly_periodic([40, 20, 10], [200e3, 100e3, 1e3])?;
    let ops = Operators::new(&grid, exec.as_ref());

    let mut u = Field::zeros(&grid, Location::FaceX);
    let v = Field::zeros(&grid, Location::FaceY);
    let w = Field::zeros(&grid, Location::FaceZ);
    u.fill(0.5);

    let mut q = Field::zeros(&grid, Location::Cell);
    q.set(|ix| {
        let (di, dj) = (ix.i as f64 - 10.0, ix.j as f64 - 10.0);
        (-(di * di + dj * dj) / 8.0).exp()
    });

    let mut tmp = TemporaryFields::new(&grid);
    let mut tendency = Field::zeros(&grid, Location::Cell);
    ops.flux_divergence(&u, &v, &w, &q, &mut tmp, &mut tendency)?;

    let dt = 600.0;
    let before = q.integral(&grid);
    let t = tendency.view();
    let step: Vec<f64> = grid
        .extent()
        .indices()
        .map(|ix| q.get(ix) - dt * t.at(ix))
        .collect();
    let q_next = Field::from_vec(&grid, Location::Cell, step)?;

    info!(
        arch = %exec.architecture(),
        before,
        after = q_next.integral(&grid),
        peak = q_next.max_abs(),
        "advected tracer one step"
    );
    Ok(())
}
