//! Data-space to clip-space mapping for the plotting demos.

use crate::geometry::Vec2;

/// Linear map taking `lim.0` to -1 and `lim.1` to 1.
pub fn lmap(v: f64, lim: (f64, f64)) -> f64 {
    let (a, b) = lim;
    (-2.0 / (a - b)) * v + a / (a - b) + b / (a - b)
}

/// `n` evenly spaced samples over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Axis limits of a plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Limits {
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Self { x, y }
    }

    /// Tight bounds of `points`, or `None` for an empty set.
    pub fn enclosing(points: &[Vec2]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Some(Self::new((min.x, max.x), (min.y, max.y)))
    }

    /// Widen each side by a fraction of the span along that axis.
    pub fn padded(self, fx: f64, fy: f64) -> Self {
        let dx = (self.x.1 - self.x.0) * fx;
        let dy = (self.y.1 - self.y.0) * fy;
        Self::new((self.x.0 - dx, self.x.1 + dx), (self.y.0 - dy, self.y.1 + dy))
    }

    pub fn to_clip(&self, p: Vec2) -> Vec2 {
        Vec2::new(lmap(p.x, self.x), lmap(p.y, self.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lmap_hits_both_ends() {
        let lim = (-0.5, 1.0);
        assert!((lmap(-0.5, lim) + 1.0).abs() < 1e-12);
        assert!((lmap(1.0, lim) - 1.0).abs() < 1e-12);
        assert!(lmap(0.25, lim).abs() < 1e-12);
    }

    #[test]
    fn linspace_includes_endpoints() {
        let xs = linspace(-2.0, 2.0, 5);
        assert_eq!(xs, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn padded_limits_widen_each_side() {
        let pts = [Vec2::new(0.0, 1.0), Vec2::new(2.0, -1.0), Vec2::new(1.0, 0.0)];
        let lim = Limits::enclosing(&pts).unwrap();
        assert_eq!(lim, Limits::new((0.0, 2.0), (-1.0, 1.0)));
        let padded = lim.padded(0.1, 0.5);
        assert!((padded.x.0 + 0.2).abs() < 1e-12 && (padded.x.1 - 2.2).abs() < 1e-12);
        assert_eq!(padded.y, (-2.0, 2.0));
        assert!(Limits::enclosing(&[]).is_none());
    }
}
