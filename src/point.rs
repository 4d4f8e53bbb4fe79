use std::f64::consts::{PI, TAU};
use std::fmt;

use geo_types::Coord;

use crate::vector::Vector;

/// Two points closer than this on both axes are the same point.
///
/// Vertex deduplication, intersection endpoint filtering and split termination all
/// depend on this one threshold.
pub const EPSILON: f64 = 1e-9;

/// An absolute location in the plane.
///
/// `PartialEq` compares the raw coordinates; geometric code goes through
/// [`Point::is_equivalent_to`] instead. Transforms that take a `control` point keep that
/// point fixed; pass [`Point::ORIGIN`] for the plain linear map.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_vector(self) -> Vector {
        Vector::new(self.x, self.y)
    }

    /// Displacement from `self` to `end`.
    pub fn vector_to(self, end: Point) -> Vector {
        Vector::new(end.x - self.x, end.y - self.y)
    }

    pub fn translate(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn displace(self, displacement: Vector) -> Point {
        self.translate(displacement.x, displacement.y)
    }

    pub fn scale(self, factor: f64, control: Point) -> Point {
        control.displace(control.vector_to(self).scale(factor))
    }

    pub fn rotate(self, angle: f64, control: Point) -> Point {
        control.displace(control.vector_to(self).rotate(angle))
    }

    /// Mirrors the point across the line through `control` along `axis`.
    /// A zero-length axis leaves the point where it is.
    pub fn reflect(self, axis: Vector, control: Point) -> Point {
        if axis.magnitude() > 0.0 {
            control.displace(control.vector_to(self).reflect(axis))
        } else {
            self
        }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        Point::distance_between(self, other)
    }

    pub fn distance_between(a: Point, b: Point) -> f64 {
        a.vector_to(b).magnitude()
    }

    /// Counter-clockwise turn from `heading` to the direction of `other`, folded into
    /// `(-π, π]` so that right turns are negative.
    pub fn angle_to(self, other: Point, heading: f64) -> f64 {
        let full = Vector::unit(heading).angle_between(self.vector_to(other));
        if full > PI {
            full - TAU
        } else {
            full
        }
    }

    pub fn is_equivalent_to(self, other: Point) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }

    /// Arithmetic mean of the points; the origin for an empty slice.
    pub fn mean(points: &[Point]) -> Point {
        if points.is_empty() {
            return Point::ORIGIN;
        }
        let count = points.len() as f64;
        let (x, y) = points.iter().fold((0.0, 0.0), |(x, y), p| (x + p.x, y + p.y));
        Point::new(x / count, y / count)
    }

    /// Componentwise interpolation; `t` outside `[0, 1]` extrapolates.
    pub fn lerp(start: Point, end: Point, t: f64) -> Point {
        Point::new(start.x + (end.x - start.x) * t, start.y + (end.y - start.y) * t)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:+.3}, {:+.3})", self.x, self.y)
    }
}

impl From<Coord<f64>> for Point {
    fn from(coord: Coord<f64>) -> Self {
        Point::new(coord.x, coord.y)
    }
}

impl From<Point> for Coord<f64> {
    fn from(point: Point) -> Self {
        Coord {
            x: point.x,
            y: point.y,
        }
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(point: geo_types::Point<f64>) -> Self {
        point.0.into()
    }
}

impl From<Point> for geo_types::Point<f64> {
    fn from(point: Point) -> Self {
        geo_types::Point(point.into())
    }
}
