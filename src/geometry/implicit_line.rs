use crate::math::Point2;

/// An infinite line in implicit form `a*x + b*y + c = 0`.
///
/// The coefficients are not normalized; only the sign of [`Self::value`] is
/// meaningful to callers.
#[derive(Debug, Clone, Copy)]
pub struct ImplicitLine {
    a: f64,
    b: f64,
    c: f64,
}

impl ImplicitLine {
    /// Builds the implicit line through two points.
    ///
    /// Coincident points yield the degenerate line `0 = 0`, which evaluates
    /// to zero everywhere.
    #[must_use]
    pub fn through(p1: &Point2, p2: &Point2) -> Self {
        Self {
            a: p2.y - p1.y,
            b: p1.x - p2.x,
            c: p1.x * (p1.y - p2.y) + p1.y * (p2.x - p1.x),
        }
    }

    /// Evaluates the implicit form at `p`.
    ///
    /// Positive on one side of the line, negative on the other, zero on the
    /// line itself. Which side is positive depends on the order of the two
    /// defining points.
    #[must_use]
    pub fn value(&self, p: &Point2) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn value_zero_on_the_line() {
        let line = ImplicitLine::through(&p(0.0, 0.0), &p(10.0, 0.0));
        assert!(line.value(&p(7.0, 0.0)).abs() < TOLERANCE);
        assert!(line.value(&p(-3.0, 0.0)).abs() < TOLERANCE);
    }

    #[test]
    fn value_sign_splits_the_plane() {
        let line = ImplicitLine::through(&p(0.0, 0.0), &p(10.0, 0.0));
        let above = line.value(&p(5.0, 5.0));
        let below = line.value(&p(5.0, -5.0));
        assert!(above < 0.0);
        assert!(below > 0.0);
    }

    #[test]
    fn reversing_the_points_flips_the_sign() {
        let fwd = ImplicitLine::through(&p(0.0, 0.0), &p(10.0, 0.0));
        let rev = ImplicitLine::through(&p(10.0, 0.0), &p(0.0, 0.0));
        let sample = p(5.0, 5.0);
        assert!((fwd.value(&sample) + rev.value(&sample)).abs() < TOLERANCE);
    }

    #[test]
    fn diagonal_line_signs() {
        let line = ImplicitLine::through(&p(0.0, 0.0), &p(1.0, 1.0));
        assert!(line.value(&p(2.0, 0.0)) > 0.0);
        assert!(line.value(&p(0.0, 2.0)) < 0.0);
        assert!(line.value(&p(3.0, 3.0)).abs() < TOLERANCE);
    }

    #[test]
    fn coincident_points_evaluate_to_zero_everywhere() {
        let line = ImplicitLine::through(&p(3.0, 4.0), &p(3.0, 4.0));
        assert!(line.value(&p(0.0, 0.0)).abs() < TOLERANCE);
        assert!(line.value(&p(100.0, -50.0)).abs() < TOLERANCE);
    }
}
