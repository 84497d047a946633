#![cfg(not(target_arch = "wasm32"))]

use glam::DVec2;
use webgl_viz::gauss_seidel::{mat2_from_rows, plot_points, solve, trace};

fn system() -> (glam::DMat2, DVec2, DVec2) {
    (
        mat2_from_rows([[2.0, 1.0], [1.0, 3.0]]),
        DVec2::new(1.0, 2.0),
        DVec2::new(0.5, 0.5),
    )
}

#[test]
fn plot_points_are_solution_guess_and_iterates() {
    let (a, b, x0) = system();
    let points = plot_points(a, b, x0, 10);
    assert_eq!(points.len(), 12);
    assert!((points[0] - DVec2::new(0.2, 0.6)).length() < 1e-12);
    assert_eq!(points[1], x0);
}

#[test]
fn steps_alternate_coordinates() {
    let (a, b, x0) = system();
    let xs = trace(a, b, x0, 10);
    assert_eq!(xs.len(), 11);

    // First step: x0 = (b0 - A01·x1) / A00, second unchanged.
    assert_eq!(xs[1], DVec2::new((1.0 - 0.5) / 2.0, 0.5));
    // Second step: x1 = (b1 - A10·x0) / A11, first unchanged.
    assert_eq!(xs[2], DVec2::new(0.25, (2.0 - 0.25) / 3.0));

    for (i, pair) in xs.windows(2).enumerate() {
        let changed = if i % 2 == 0 { 0 } else { 1 };
        assert_eq!(pair[0][1 - changed], pair[1][1 - changed], "step {i}");
    }
}

#[test]
fn iterates_approach_the_solution() {
    let (a, b, x0) = system();
    let solution = solve(a, b).unwrap();
    let distances: Vec<f64> = trace(a, b, x0, 10)
        .iter()
        .map(|x| x.distance(solution))
        .collect();
    for pair in distances.windows(2) {
        assert!(pair[1] < pair[0], "{distances:?}");
    }
    assert!(distances[10] < 1e-4);
}
