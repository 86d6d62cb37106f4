use tracing::debug;

use crate::geometry::{ImplicitLine, Polygon, Segment};
use crate::math::{DMatrix, Point2};

/// Index of the route source in every visibility graph.
pub const SOURCE: usize = 0;

/// Index of the route sink in every visibility graph.
pub const SINK: usize = 1;

/// All-pairs visibility over the route endpoints and obstacle vertices.
///
/// Vertex order is fixed: source at index [`SOURCE`], sink at index
/// [`SINK`], then each polygon's vertices in declaration order. The weight
/// matrix is symmetric and stores the Euclidean distance for every
/// admissible pair; a zero entry means "no edge".
#[derive(Debug, Clone)]
pub struct VisibilityGraph {
    vertices: Vec<Point2>,
    weights: DMatrix,
    degrees: Vec<usize>,
    edges: Vec<Segment>,
}

impl VisibilityGraph {
    /// Builds the graph for one query.
    ///
    /// Every unordered vertex pair is tested against every polygon,
    /// including the polygon owning either endpoint; the pair survives only
    /// if no polygon blocks it.
    ///
    /// A zero-length admissible pair (coincident vertices) is counted in
    /// the degrees and recorded in the edge list, but its zero weight is
    /// indistinguishable from "no edge" in the matrix.
    #[must_use]
    pub fn build(source: Point2, sink: Point2, polygons: &[&Polygon]) -> Self {
        let mut vertices = vec![source, sink];
        for polygon in polygons {
            vertices.extend_from_slice(polygon.vertices());
        }
        let n = vertices.len();

        let mut weights = DMatrix::zeros(n, n);
        let mut degrees = vec![0_usize; n];
        let mut edges = Vec::new();

        for i in 0..n {
            for j in (i + 1)..n {
                let segment = Segment::new(vertices[i], vertices[j]);
                let carrier = ImplicitLine::through(&vertices[i], &vertices[j]);
                if polygons.iter().any(|p| p.blocks(&segment, &carrier)) {
                    continue;
                }
                let w = segment.length();
                weights[(i, j)] = w;
                weights[(j, i)] = w;
                degrees[i] += 1;
                degrees[j] += 1;
                edges.push(segment);
            }
        }

        debug!(
            "visibility graph: {} vertices, {} admissible pairs",
            n,
            edges.len()
        );

        Self {
            vertices,
            weights,
            degrees,
            edges,
        }
    }

    /// Number of graph vertices (the two route endpoints plus every
    /// obstacle vertex).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The vertex position at `index`.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Point2 {
        self.vertices[index]
    }

    /// The symmetric weight matrix; zero means "no edge".
    #[must_use]
    pub fn weights(&self) -> &DMatrix {
        &self.weights
    }

    /// Number of admissible pairs involving `index`.
    #[must_use]
    pub fn degree(&self, index: usize) -> usize {
        self.degrees[index]
    }

    /// The admissible sight lines, in discovery order.
    #[must_use]
    pub fn edges(&self) -> &[Segment] {
        &self.edges
    }

    /// Consumes the graph, returning the admissible sight lines.
    #[must_use]
    pub fn into_edges(self) -> Vec<Segment> {
        self.edges
    }
}
