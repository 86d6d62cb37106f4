use crate::error::{GeometryError, Result};
use crate::math::Point2;

use super::{ImplicitLine, Segment};

/// Sign consensus accumulated while scanning implicit-line evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Unknown,
    Negative,
    Positive,
}

/// A simple polygon given as an ordered vertex loop.
///
/// Consecutive vertices are joined by edges, with an implicit closing edge
/// from the last vertex back to the first. One implicit line per edge is
/// cached at construction. Either winding is accepted; self-intersecting
/// input is accepted as-is and not validated.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Point2>,
    edge_lines: Vec<ImplicitLine>,
}

impl Polygon {
    /// Creates a polygon from an ordered vertex loop.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegeneratePolygon` for fewer than 3 vertices
    /// and `GeometryError::NonFiniteCoordinate` when any coordinate is NaN
    /// or infinite.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::DegeneratePolygon(vertices.len()).into());
        }
        for v in &vertices {
            if !v.x.is_finite() || !v.y.is_finite() {
                return Err(GeometryError::NonFiniteCoordinate { x: v.x, y: v.y }.into());
            }
        }
        let n = vertices.len();
        let mut edge_lines = Vec::with_capacity(n);
        for i in 0..n {
            let j = (i + 1) % n;
            edge_lines.push(ImplicitLine::through(&vertices[i], &vertices[j]));
        }
        Ok(Self {
            vertices,
            edge_lines,
        })
    }

    /// The vertex loop in declaration order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Whether the infinite `line` separates the polygon's vertices.
    ///
    /// Tracks the sign of the implicit evaluation across the vertex loop;
    /// vertices exactly on the line never change the consensus. Returns true
    /// as soon as two vertices land strictly on opposite sides.
    #[must_use]
    pub fn intersects_line(&self, line: &ImplicitLine) -> bool {
        let mut sign = Sign::Unknown;
        for v in &self.vertices {
            let value = line.value(v);
            if value < 0.0 {
                if sign == Sign::Positive {
                    return true;
                }
                sign = Sign::Negative;
            } else if value > 0.0 {
                if sign == Sign::Negative {
                    return true;
                }
                sign = Sign::Positive;
            }
        }
        false
    }

    /// Whether `segment` is considered blocked by this polygon.
    ///
    /// Each cached edge line evaluates both segment endpoints. An edge whose
    /// two evaluations have strictly opposite signs is skipped. The first
    /// remaining edge fixes the consensus side; every later edge only checks
    /// whether its evaluations sit entirely on the other side (zeros
    /// included), which clears the segment. The scan reaching the end means
    /// blocked.
    ///
    /// Known limits, kept as-is: an endpoint coinciding with a vertex or a
    /// segment collinear with an edge evaluates to zero on that edge line
    /// and satisfies both side tests, so the verdict for grazing contact
    /// depends on where the zero edge falls in the vertex order.
    #[must_use]
    pub fn intersects_segment(&self, segment: &Segment) -> bool {
        let mut sign = Sign::Unknown;
        for line in &self.edge_lines {
            let v1 = line.value(&segment.a);
            let v2 = line.value(&segment.b);
            if (v1 > 0.0 && v2 < 0.0) || (v1 < 0.0 && v2 > 0.0) {
                continue;
            }
            match sign {
                Sign::Unknown => {
                    if v1 <= 0.0 && v2 <= 0.0 {
                        sign = Sign::Negative;
                    } else if v1 >= 0.0 && v2 >= 0.0 {
                        sign = Sign::Positive;
                    }
                }
                Sign::Negative => {
                    if v1 >= 0.0 && v2 >= 0.0 {
                        return false;
                    }
                }
                Sign::Positive => {
                    if v1 <= 0.0 && v2 <= 0.0 {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Whether this polygon blocks the sight line between the endpoints of
    /// `segment`, where `carrier` is the infinite line through them.
    ///
    /// The carrier test runs first and short-circuits: a polygon entirely on
    /// one side of the carrier can never block the segment.
    #[must_use]
    pub fn blocks(&self, segment: &Segment, carrier: &ImplicitLine) -> bool {
        self.intersects_line(carrier) && self.intersects_segment(segment)
    }
}
