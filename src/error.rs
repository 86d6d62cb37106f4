use thiserror::Error;

/// Top-level error type for the Routis planning kernel.
#[derive(Debug, Error)]
pub enum RoutisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Errors related to geometric input validation.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("polygon needs at least 3 vertices, got {0}")]
    DegeneratePolygon(usize),

    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
}

/// Errors related to the obstacle scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("obstacle not found")]
    ObstacleNotFound,
}

/// Errors related to the shortest-path search.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("no predecessor chain from sink back to source")]
    PathNotFound,
}

/// Convenience type alias for results using [`RoutisError`].
pub type Result<T> = std::result::Result<T, RoutisError>;
