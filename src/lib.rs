//! A planar polygon kernel: points and vectors, directed segments, and polygons that can be
//! split at their self-intersections, offset orthogonally and filled with hatch lines.
//!
//! Usage:
//! ```
//! use planar_polygon::{point, polygon};
//!
//! // a bowtie crossing itself at the origin
//! let bowtie = polygon(&[
//!     point(1.0, 1.0),
//!     point(1.0, -1.0),
//!     point(-1.0, 1.0),
//!     point(-1.0, -1.0),
//! ]);
//! let triangles = bowtie.overlap_split().unwrap();
//! assert_eq!(triangles.len(), 2);
//!
//! // growing a square bevels its corners
//! let square = polygon(&[
//!     point(1.0, 1.0),
//!     point(1.0, -1.0),
//!     point(-1.0, -1.0),
//!     point(-1.0, 1.0),
//! ]);
//! let grown = square.offset(1.0).unwrap();
//! assert_eq!(grown[0].vertices().len(), 8);
//! ```
//!
//! Coordinates are compared with a fixed tolerance, [`EPSILON`]: two points closer than that on
//! both axes are the same point everywhere in the crate.

mod error;
pub use error::GeometryError;
mod intersect;
mod vector;
pub use vector::Vector;
mod point;
pub use point::{Point, EPSILON};
mod segment;
pub use segment::Segment;
mod polygon;
pub use polygon::{area_centroid, signed_area, Polygon};
mod split;
pub use split::SplitConfig;
mod offset;
mod hatch;
pub use hatch::{no_jitter, uniform_jitter};

pub fn vector(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

pub fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

pub fn segment(start: Point, end: Point) -> Segment {
    Segment::new(start, end)
}

/// Shorthand for [`Polygon::new`].
pub fn polygon(points: &[Point]) -> Polygon {
    Polygon::new(points)
}
