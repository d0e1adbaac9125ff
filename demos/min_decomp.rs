//! Decomposes a few sample polygons and prints what the engine does.
//!
//! Run with: cargo run --example min_decomp

use convexcut::polygon::{Decomposer, EventKind, Polygon};

fn decompose_and_report(name: &str, polygon: &Polygon<f64>) {
    println!("== {} ({} vertices)", name, polygon.len());

    let mut hook = |kind, i, j| match kind {
        EventKind::VisibilityEdge => println!("   sees      {} - {}", i, j),
        EventKind::Diagonal => println!("   diagonal  {} - {}", i, j),
    };

    match Decomposer::new(polygon).map(|d| d.with_observer(&mut hook)) {
        Ok(decomposer) => match decomposer.run() {
            Ok(result) => {
                println!(
                    "   => {} diagonals, {} convex pieces",
                    result.weight,
                    result.weight + 1
                );
                println!(
                    "   => {} orientation tests, {} comparisons",
                    result.metrics.orientation_tests, result.metrics.comparisons
                );
            }
            Err(e) => println!("   => failed: {}", e),
        },
        Err(e) => println!("   => rejected: {}", e),
    }
    println!();
}

fn main() {
    let square = Polygon::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    decompose_and_report("square", &square);

    let dart = Polygon::from_coords(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (5.0, 2.0),
        (10.0, 10.0),
        (0.0, 10.0),
    ]);
    decompose_and_report("dart", &dart);

    let u_shape = Polygon::from_coords(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (8.0, 10.0),
        (8.0, 3.0),
        (2.0, 3.0),
        (2.0, 10.0),
        (0.0, 10.0),
    ]);
    decompose_and_report("u-shape", &u_shape);
}
