use tracing::debug;

use crate::error::Result;
use crate::geometry::{Polygon, Segment};
use crate::graph::{shortest_path, VisibilityGraph, SINK, SOURCE};
use crate::math::Point2;
use crate::scene::Scene;

/// A resolved route from source to sink.
#[derive(Debug, Clone)]
pub struct Route {
    points: Vec<Point2>,
    length: f64,
}

impl Route {
    /// Waypoints from source to sink inclusive.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Total Euclidean length of the route.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }
}

/// Outcome of one route query.
#[derive(Debug, Clone)]
pub enum RouteOutcome {
    /// A shortest route was found.
    Found(Route),
    /// Source or sink has no admissible sight line at all; no route exists.
    Unreachable,
}

/// Everything computed by one solve: the admissible sight lines and the
/// route outcome.
#[derive(Debug, Clone)]
pub struct Solution {
    edges: Vec<Segment>,
    outcome: RouteOutcome,
}

impl Solution {
    /// The admissible sight lines of the query, in discovery order.
    #[must_use]
    pub fn edges(&self) -> &[Segment] {
        &self.edges
    }

    /// The resolved route, or the unreachable marker.
    #[must_use]
    pub fn outcome(&self) -> &RouteOutcome {
        &self.outcome
    }
}

/// Orchestrates route queries over a scene.
///
/// Each solve rebuilds the visibility graph from scratch and replaces the
/// stored solution; nothing is carried over between queries.
#[derive(Debug)]
pub struct Router {
    scene: Scene,
    latest: Option<Solution>,
}

impl Router {
    /// Creates a router over the given scene.
    #[must_use]
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            latest: None,
        }
    }

    /// The scene under query.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the scene for edits between queries.
    ///
    /// The stored solution is not invalidated by edits; it describes the
    /// scene as it was at the previous solve.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Computes the shortest route for the current scene.
    ///
    /// # Errors
    ///
    /// Returns `SolveError::PathNotFound` when both endpoints have
    /// admissible sight lines but no positive-weight path connects them
    /// (coincident endpoints in an otherwise empty scene are the one
    /// regular way to get here). A blocked route is not an error; it is
    /// reported as [`RouteOutcome::Unreachable`].
    pub fn solve(&mut self) -> Result<&Solution> {
        // Step 1: snapshot the obstacles in declaration order
        let polygons: Vec<&Polygon> = self.scene.obstacles().collect();

        // Step 2: all-pairs visibility over endpoints and obstacle vertices
        let graph = VisibilityGraph::build(self.scene.source(), self.scene.sink(), &polygons);

        // Step 3: an endpoint nobody sees can never be connected
        let outcome = if graph.degree(SOURCE) == 0 || graph.degree(SINK) == 0 {
            debug!("route endpoint has no admissible sight line");
            RouteOutcome::Unreachable
        } else {
            // Step 4: dense Dijkstra over the weight matrix
            let path = shortest_path(graph.weights(), SOURCE, SINK)?;
            debug!(
                "route found: {} waypoints, length {}",
                path.indices.len(),
                path.weight
            );
            let points = path.indices.iter().map(|&i| graph.vertex(i)).collect();
            RouteOutcome::Found(Route {
                points,
                length: path.weight,
            })
        };

        let solution = Solution {
            edges: graph.into_edges(),
            outcome,
        };
        Ok(self.latest.insert(solution))
    }

    /// The solution of the most recent solve, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&Solution> {
        self.latest.as_ref()
    }
}
