pub mod error;
pub mod geometry;
pub mod graph;
pub mod math;
pub mod router;
pub mod scene;

pub use error::{Result, RoutisError};
