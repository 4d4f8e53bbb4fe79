use std::f64::consts::TAU;
use std::fmt;

use geo_types::{Coord, LineString};
use log::debug;

use crate::error::GeometryError;
use crate::point::Point;
use crate::segment::Segment;
use crate::vector::Vector;

/// A closed polygon in the plane.
///
/// Invariants:
/// - No two cyclically consecutive vertices are equivalent.
/// - With two or more vertices, `edges[i]` runs from `vertices[i]` to `vertices[(i + 1) % n]`.
/// - `clockwise` is the sign of the summed turning angles (negative means clockwise).
/// - The anchor is the area centroid unless the polygon has no area or was given one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    vertices: Vec<Point>,
    edges: Vec<Segment>,
    clockwise: bool,
    anchor: Point,
}

/// Collapses runs of equivalent points and drops a closing point equivalent to the first.
fn normalize_vertices(points: &[Point]) -> Vec<Point> {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Vec::new(),
    };

    let mut processed: Vec<Point> = points
        .windows(2)
        .filter(|pair| !pair[0].is_equivalent_to(pair[1]))
        .map(|pair| pair[0])
        .collect();
    if !last.is_equivalent_to(first) {
        processed.push(last);
    }
    if processed.is_empty() {
        processed.push(first);
    }
    processed
}

fn calculate_edges(vertices: &[Point]) -> Vec<Segment> {
    if vertices.len() < 2 {
        return Vec::new();
    }
    (0..vertices.len())
        .map(|idx| Segment::new(vertices[idx], vertices[(idx + 1) % vertices.len()]))
        .collect()
}

/// Sum of the turning angles between consecutive edge headings, closing back onto the first edge.
fn angular_sum(edges: &[Segment]) -> f64 {
    let mut prior_heading = match edges.last() {
        Some(edge) => edge.direction(false).angle(),
        None => return 0.0,
    };
    let mut sum = 0.0;
    for edge in edges {
        sum += edge.start.angle_to(edge.end, prior_heading);
        prior_heading = edge.direction(false).angle();
    }
    sum
}

/// Shoelace area of the closed vertex loop; positive for counter-clockwise loops.
pub fn signed_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    0.5 * (0..n)
        .map(|idx| {
            let (v0, v1) = (vertices[idx], vertices[(idx + 1) % n]);
            v0.x * v1.y - v0.y * v1.x
        })
        .sum::<f64>()
}

/// Area-weighted centroid of the closed vertex loop.
pub fn area_centroid(vertices: &[Point]) -> Result<Point, GeometryError> {
    let area = signed_area(vertices);
    if area == 0.0 || !area.is_finite() {
        return Err(GeometryError::DegenerateArea);
    }

    let n = vertices.len();
    let (mut cx, mut cy) = (0.0, 0.0);
    for idx in 0..n {
        let (v0, v1) = (vertices[idx], vertices[(idx + 1) % n]);
        let cross = v0.x * v1.y - v1.x * v0.y;
        cx += (v0.x + v1.x) * cross;
        cy += (v0.y + v1.y) * cross;
    }
    let centroid = Point::new(cx / (6.0 * area), cy / (6.0 * area));
    if centroid.x.is_finite() && centroid.y.is_finite() {
        Ok(centroid)
    } else {
        Err(GeometryError::DegenerateArea)
    }
}

/// Drops every point equivalent to its predecessor in the input, so a run of close points
/// collapses to its first one even when its ends are farther apart than [`crate::EPSILON`].
fn collapse_adjacent(points: &[Point]) -> Vec<Point> {
    points
        .iter()
        .enumerate()
        .filter(|&(idx, point)| idx == 0 || !point.is_equivalent_to(points[idx - 1]))
        .map(|(_, point)| *point)
        .collect()
}

fn default_anchor(vertices: &[Point]) -> Point {
    match vertices {
        [] => Point::ORIGIN,
        [single] => *single,
        _ => area_centroid(vertices).unwrap_or_else(|_| {
            debug!("zero-area polygon with {} vertices, anchoring at the vertex mean", vertices.len());
            Point::mean(vertices)
        }),
    }
}

impl Polygon {
    /// Builds a polygon from a raw point loop. The loop is implicitly closed; a repeated
    /// closing point is dropped along with any runs of equivalent points.
    pub fn new(points: &[Point]) -> Self {
        let vertices = normalize_vertices(points);
        let anchor = default_anchor(&vertices);
        Self::assemble(vertices, anchor)
    }

    fn assemble(vertices: Vec<Point>, anchor: Point) -> Self {
        let edges = calculate_edges(&vertices);
        let clockwise = angular_sum(&edges) < 0.0;
        Self {
            vertices,
            edges,
            clockwise,
            anchor,
        }
    }

    /// A regular polygon with its first vertex at `rotation` radians from `center`, the
    /// others following counter-clockwise.
    pub fn regular(sides: usize, center: Point, radius: f64, rotation: f64) -> Self {
        let points: Vec<Point> = (0..sides)
            .map(|k| {
                let angle = rotation + TAU * k as f64 / sides as f64;
                center.displace(Vector::unit(angle).scale(radius))
            })
            .collect();
        Polygon::new(&points)
    }

    /// Rebuilds the vertex cycle from an unordered bag of boundary segments, each of which
    /// shares its endpoints with exactly two others.
    pub fn from_unordered_edges(segments: &[Segment]) -> Result<Self, GeometryError> {
        let (first, rest) = match segments.split_first() {
            Some(split) => split,
            None => return Ok(Polygon::default()),
        };

        let origin = first.start;
        let mut remaining = rest.to_vec();
        let mut points = vec![origin];
        let mut current = first.end;
        while !current.is_equivalent_to(origin) {
            points.push(current);
            let position = remaining
                .iter()
                .position(|s| s.start.is_equivalent_to(current) || s.end.is_equivalent_to(current))
                .ok_or(GeometryError::DisconnectedEdgeSet {
                    remaining: remaining.len(),
                })?;
            let next = remaining.swap_remove(position);
            current = if next.start.is_equivalent_to(current) {
                next.end
            } else {
                next.start
            };
        }
        if !remaining.is_empty() {
            return Err(GeometryError::DisconnectedEdgeSet {
                remaining: remaining.len(),
            });
        }

        debug!("joined {} unordered segments into a cycle", segments.len());
        Ok(Polygon::new(&points))
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Segment] {
        &self.edges
    }

    pub fn clockwise(&self) -> bool {
        self.clockwise
    }

    /// Reference point for scaling, rotation and reflection.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn with_anchor(mut self, anchor: Point) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    /// Distance from the anchor to the farthest vertex.
    pub fn max_anchor_distance(&self) -> f64 {
        self.vertices
            .iter()
            .map(|vertex| self.anchor.distance_to(*vertex))
            .fold(0.0, f64::max)
    }

    /// All points where `query` crosses the boundary, ordered by distance from `query.start`.
    /// Adjacent equivalent hits (a crossing through a vertex) are reported once.
    pub fn intersect(&self, query: &Segment) -> Vec<Point> {
        let mut hits: Vec<Point> = self
            .edges
            .iter()
            .filter_map(|edge| edge.intersect(query))
            .collect();
        hits.sort_by(|a, b| {
            a.distance_to(query.start)
                .total_cmp(&b.distance_to(query.start))
        });
        collapse_adjacent(&hits)
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Polygon {
        self.transform(|point| point.translate(dx, dy))
    }

    /// Scales around `reference`, or around the anchor when `None`.
    pub fn scale(&self, factor: f64, reference: Option<Point>) -> Polygon {
        let control = reference.unwrap_or(self.anchor);
        self.transform(|point| point.scale(factor, control))
    }

    /// Rotates counter-clockwise around `reference`, or around the anchor when `None`.
    pub fn rotate(&self, angle: f64, reference: Option<Point>) -> Polygon {
        let control = reference.unwrap_or(self.anchor);
        self.transform(|point| point.rotate(angle, control))
    }

    /// Mirrors across the line along `axis` through `reference`, or through the anchor when `None`.
    pub fn reflect(&self, axis: Vector, reference: Option<Point>) -> Polygon {
        let control = reference.unwrap_or(self.anchor);
        self.transform(|point| point.reflect(axis, control))
    }

    /// Applies the map to every vertex and to the anchor, then derives edges and orientation
    /// from scratch since reflections flip the winding.
    fn transform<F: Fn(Point) -> Point>(&self, map: F) -> Polygon {
        let mapped: Vec<Point> = self.vertices.iter().map(|vertex| map(*vertex)).collect();
        Self::assemble(normalize_vertices(&mapped), map(self.anchor))
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        for (idx, vertex) in self.vertices.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", vertex)?;
        }
        write!(f, ")")
    }
}

impl From<&LineString<f64>> for Polygon {
    fn from(line: &LineString<f64>) -> Self {
        let points: Vec<Point> = line.0.iter().map(|coord| Point::from(*coord)).collect();
        Polygon::new(&points)
    }
}

/// The boundary as a closed ring (last coordinate repeats the first).
impl From<&Polygon> for LineString<f64> {
    fn from(polygon: &Polygon) -> Self {
        let mut coords: Vec<Coord<f64>> = polygon.vertices.iter().map(|vertex| (*vertex).into()).collect();
        if let Some(first) = coords.first().copied() {
            coords.push(first);
        }
        LineString(coords)
    }
}

impl From<&Polygon> for geo_types::Polygon<f64> {
    fn from(polygon: &Polygon) -> Self {
        geo_types::Polygon::new(polygon.into(), Vec::new())
    }
}
