use slotmap::SlotMap;

use crate::error::{GeometryError, Result, SceneError};
use crate::geometry::Polygon;
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for an obstacle in the scene.
    pub struct ObstacleId;
}

/// Mutable input store for route queries.
///
/// Owns the route endpoints and the obstacle polygons. Obstacles live in an
/// arena and are referenced by stable IDs (generational indices); the
/// declaration order is kept separately and drives every iteration.
#[derive(Debug, Clone)]
pub struct Scene {
    source: Point2,
    sink: Point2,
    obstacles: SlotMap<ObstacleId, Polygon>,
    order: Vec<ObstacleId>,
}

impl Scene {
    /// Creates a scene with the given route endpoints and no obstacles.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFiniteCoordinate` if either endpoint has
    /// a NaN or infinite coordinate.
    pub fn new(source: Point2, sink: Point2) -> Result<Self> {
        check_finite(&source)?;
        check_finite(&sink)?;
        Ok(Self {
            source,
            sink,
            obstacles: SlotMap::with_key(),
            order: Vec::new(),
        })
    }

    /// The route start point.
    #[must_use]
    pub fn source(&self) -> Point2 {
        self.source
    }

    /// The route end point.
    #[must_use]
    pub fn sink(&self) -> Point2 {
        self.sink
    }

    /// Moves the route start point.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFiniteCoordinate` for a NaN or infinite
    /// coordinate.
    pub fn set_source(&mut self, point: Point2) -> Result<()> {
        check_finite(&point)?;
        self.source = point;
        Ok(())
    }

    /// Moves the route end point.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFiniteCoordinate` for a NaN or infinite
    /// coordinate.
    pub fn set_sink(&mut self, point: Point2) -> Result<()> {
        check_finite(&point)?;
        self.sink = point;
        Ok(())
    }

    /// Inserts an obstacle at the end of the declaration order and returns
    /// its ID.
    pub fn add_obstacle(&mut self, polygon: Polygon) -> ObstacleId {
        let id = self.obstacles.insert(polygon);
        self.order.push(id);
        id
    }

    /// Removes an obstacle, returning it.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is stale.
    pub fn remove_obstacle(&mut self, id: ObstacleId) -> Result<Polygon> {
        let polygon = self
            .obstacles
            .remove(id)
            .ok_or(SceneError::ObstacleNotFound)?;
        self.order.retain(|&kept| kept != id);
        Ok(polygon)
    }

    /// Swaps an obstacle for a new polygon, returning the old one.
    ///
    /// The obstacle keeps its ID and its place in the declaration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is stale.
    pub fn replace_obstacle(&mut self, id: ObstacleId, polygon: Polygon) -> Result<Polygon> {
        let slot = self
            .obstacles
            .get_mut(id)
            .ok_or(SceneError::ObstacleNotFound)?;
        Ok(std::mem::replace(slot, polygon))
    }

    /// Returns a reference to an obstacle.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is stale.
    pub fn obstacle(&self, id: ObstacleId) -> Result<&Polygon> {
        self.obstacles
            .get(id)
            .ok_or_else(|| SceneError::ObstacleNotFound.into())
    }

    /// Number of obstacles in the scene.
    #[must_use]
    pub fn obstacle_count(&self) -> usize {
        self.order.len()
    }

    /// Obstacle IDs in declaration order.
    pub fn obstacle_ids(&self) -> impl Iterator<Item = ObstacleId> + '_ {
        self.order.iter().copied()
    }

    /// Obstacles in declaration order.
    pub fn obstacles(&self) -> impl Iterator<Item = &Polygon> {
        self.order.iter().map(move |&id| &self.obstacles[id])
    }
}

fn check_finite(point: &Point2) -> Result<()> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFiniteCoordinate {
            x: point.x,
            y: point.y,
        }
        .into())
    }
}
