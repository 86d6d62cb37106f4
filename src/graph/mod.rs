pub mod dijkstra;
pub mod visibility;

pub use dijkstra::{shortest_path, IndexPath};
pub use visibility::{VisibilityGraph, SINK, SOURCE};
