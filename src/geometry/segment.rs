use crate::math::Point2;

/// A straight segment between two endpoints.
///
/// The endpoints are unordered: `Segment::new(a, b)` and `Segment::new(b, a)`
/// compare equal.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    /// First endpoint.
    pub a: Point2,
    /// Second endpoint.
    pub b: Point2,
}

impl Segment {
    /// Creates a segment between two points.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
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
    fn length_is_euclidean() {
        let seg = Segment::new(p(0.0, 0.0), p(3.0, 4.0));
        assert!((seg.length() - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn coincident_endpoints_have_zero_length() {
        let seg = Segment::new(p(2.0, 2.0), p(2.0, 2.0));
        assert!(seg.length().abs() < TOLERANCE);
    }

    #[test]
    fn equality_ignores_endpoint_order() {
        let fwd = Segment::new(p(1.0, 2.0), p(3.0, 4.0));
        let rev = Segment::new(p(3.0, 4.0), p(1.0, 2.0));
        assert_eq!(fwd, rev);
    }

    #[test]
    fn different_segments_are_unequal() {
        let one = Segment::new(p(1.0, 2.0), p(3.0, 4.0));
        let other = Segment::new(p(1.0, 2.0), p(3.0, 5.0));
        assert_ne!(one, other);
    }
}
