use std::f64::consts::FRAC_PI_2;
use std::fmt;

use geo_types::Line;

use crate::intersect::intersect;
use crate::point::Point;
use crate::vector::Vector;

/// A directed line segment. Owns copies of both endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// A segment whose endpoints are equivalent.
    pub fn is_degenerate(&self) -> bool {
        self.start.is_equivalent_to(self.end)
    }

    /// Displacement from start to end, or from end to start if `reverse` is set.
    /// Degenerate segments have no direction.
    pub fn direction(&self, reverse: bool) -> Vector {
        if self.is_degenerate() {
            return Vector::ZERO;
        }
        let direction = self.start.vector_to(self.end);
        if reverse {
            -direction
        } else {
            direction
        }
    }

    /// Unit normal pointing to the right of the segment, which is outward when the segment
    /// is an edge of a counter-clockwise polygon. Pass the polygon's orientation as
    /// `clockwise` to keep it outward for clockwise polygons.
    pub fn normal(&self, clockwise: bool) -> Vector {
        self.direction(clockwise).normalize().rotate(-FRAC_PI_2)
    }

    pub fn length(&self) -> f64 {
        self.direction(false).magnitude()
    }

    pub fn reversed(&self) -> Segment {
        Segment::new(self.end, self.start)
    }

    /// The point where the two segments cross, if they do within both of their extents.
    ///
    /// Parallel segments never intersect, not even when they overlap along their length.
    pub fn intersect(&self, other: &Segment) -> Option<Point> {
        intersect(self.start.into(), self.end.into(), other.start.into(), other.end.into())
            .map(|hit| hit.point.into())
    }

    /// Interpolates both endpoints; `t` outside `[0, 1]` extrapolates.
    pub fn lerp(a: &Segment, b: &Segment, t: f64) -> Segment {
        Segment::new(Point::lerp(a.start, b.start, t), Point::lerp(a.end, b.end, t))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

impl From<Line<f64>> for Segment {
    fn from(line: Line<f64>) -> Self {
        Segment::new(line.start.into(), line.end.into())
    }
}

impl From<Segment> for Line<f64> {
    fn from(segment: Segment) -> Self {
        Line::new(segment.start, segment.end)
    }
}
