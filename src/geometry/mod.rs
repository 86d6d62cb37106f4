pub mod implicit_line;
pub mod polygon;
pub mod segment;

pub use implicit_line::ImplicitLine;
pub use polygon::Polygon;
pub use segment::Segment;
