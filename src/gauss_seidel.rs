//! Gauss-Seidel iteration on a 2×2 system, one coordinate per step.

use glam::{DMat2, DVec2};

/// Builds a matrix from row-major entries.
pub fn mat2_from_rows(rows: [[f64; 2]; 2]) -> DMat2 {
    DMat2::from_cols_array_2d(&rows).transpose()
}

fn entry(a: &DMat2, row: usize, col: usize) -> f64 {
    a.col(col)[row]
}

/// Initial guess followed by one estimate per iteration.
///
/// Even iterations update `x[0]` from the latest `x[1]`, odd iterations
/// update `x[1]` from the latest `x[0]`.
pub fn trace(a: DMat2, b: DVec2, x0: DVec2, iterations: usize) -> Vec<DVec2> {
    let mut x = x0;
    let mut out = Vec::with_capacity(iterations + 1);
    out.push(x);
    for iter in 0..iterations {
        if iter % 2 == 0 {
            x.x = (b.x - entry(&a, 0, 1) * x.y) / entry(&a, 0, 0);
        } else {
            x.y = (b.y - entry(&a, 1, 0) * x.x) / entry(&a, 1, 1);
        }
        out.push(x);
    }
    out
}

/// Exact solution, `None` for a singular matrix.
pub fn solve(a: DMat2, b: DVec2) -> Option<DVec2> {
    let det = a.determinant();
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    Some(a.inverse() * b)
}

/// Points plotted by the iteration demo: the exact solution (when there is
/// one) followed by [`trace`].
pub fn plot_points(a: DMat2, b: DVec2, x0: DVec2, iterations: usize) -> Vec<DVec2> {
    solve(a, b)
        .into_iter()
        .chain(trace(a, b, x0, iterations))
        .collect()
}
