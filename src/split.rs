use log::{debug, trace, warn};

use crate::error::GeometryError;
use crate::point::Point;
use crate::polygon::Polygon;

/// Limits for self-intersection splitting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitConfig {
    /// Number of splits after which splitting gives up with
    /// [`GeometryError::SplitDidNotConverge`].
    pub max_splits: usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self { max_splits: 3000 }
    }
}

#[derive(Clone, Copy, Debug)]
struct Crossing {
    /// Index of the scanned edge.
    edge: usize,
    /// Index of the crossed edge, not reduced modulo the edge count, so `other > edge`.
    other: usize,
    point: Point,
}

/// First crossing in scan order that does not sit on an endpoint of the scanned edge.
fn first_crossing(polygon: &Polygon) -> Option<Crossing> {
    let edges = polygon.edges();
    let n = edges.len();
    for (edge, base) in edges.iter().enumerate() {
        for other in (edge + 1)..(edge + n) {
            let point = match base.intersect(&edges[other % n]) {
                Some(point) => point,
                None => continue,
            };
            if point.is_equivalent_to(base.start) || point.is_equivalent_to(base.end) {
                continue;
            }
            return Some(Crossing { edge, other, point });
        }
    }
    None
}

/// Cuts the loop formed by vertices `edge + 1 ..= other` (cyclically) off at the crossing.
/// Returns the remainder with the crossing inserted after vertex `edge`, then the cut loop.
fn split_at(polygon: &Polygon, crossing: &Crossing) -> (Polygon, Polygon) {
    let vertices = polygon.vertices();
    let n = vertices.len();
    let arc_len = crossing.other - crossing.edge;
    let in_arc = |idx: usize| (idx + n - crossing.edge - 1) % n < arc_len;

    let mut cut: Vec<Point> = (crossing.edge + 1..=crossing.other)
        .map(|idx| vertices[idx % n])
        .collect();
    cut.push(crossing.point);

    let mut remainder = Vec::with_capacity(n - arc_len + 1);
    for (idx, vertex) in vertices.iter().enumerate() {
        if in_arc(idx) {
            continue;
        }
        remainder.push(*vertex);
        if idx == crossing.edge {
            remainder.push(crossing.point);
        }
    }

    (Polygon::new(&remainder), Polygon::new(&cut))
}

impl Polygon {
    /// Splits a self-intersecting polygon into simple polygons with [`SplitConfig::default`].
    pub fn overlap_split(&self) -> Result<Vec<Polygon>, GeometryError> {
        self.overlap_split_with(&SplitConfig::default())
    }

    /// Splits a self-intersecting polygon into simple polygons.
    ///
    /// Works through a list of candidates, starting with a copy of `self`. The first
    /// unresolved candidate is scanned edge by edge; at the first crossing the loop between
    /// the crossing edges is cut off and appended to the list, and the shortened candidate is
    /// scanned again from scratch. A candidate without crossings is resolved.
    ///
    /// The result is in discovery order: what remains of `self` first, then the cut loops.
    pub fn overlap_split_with(&self, config: &SplitConfig) -> Result<Vec<Polygon>, GeometryError> {
        let mut polygons = vec![self.clone()];
        let mut resolved = vec![false];
        let mut splits = 0;

        while let Some(current) = resolved.iter().position(|done| !done) {
            trace!("scanning candidate {} of {}", current, polygons.len());
            let crossing = match first_crossing(&polygons[current]) {
                Some(crossing) => crossing,
                None => {
                    resolved[current] = true;
                    continue;
                }
            };

            if splits >= config.max_splits {
                warn!("giving up on self-intersection split after {} splits", splits);
                return Err(GeometryError::SplitDidNotConverge { splits });
            }
            splits += 1;
            debug!(
                "edges {} and {} of candidate {} cross at {}",
                crossing.edge,
                crossing.other % polygons[current].edges().len(),
                current,
                crossing.point
            );

            let (remainder, cut) = split_at(&polygons[current], &crossing);
            polygons[current] = remainder;
            polygons.push(cut);
            resolved.push(false);
        }

        Ok(polygons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coords: &[(f64, f64)]) -> Polygon {
        let points: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
        Polygon::new(&points)
    }

    fn assert_same_vertices(actual: &Polygon, expected: &Polygon) {
        assert_eq!(
            actual.vertices().len(),
            expected.vertices().len(),
            "{} should be {}",
            actual,
            expected
        );
        for (a, e) in actual.vertices().iter().zip(expected.vertices()) {
            assert!(a.is_equivalent_to(*e), "{} should be {}", actual, expected);
        }
    }

    #[test]
    fn simple_polygon_is_returned_whole() {
        let square = poly(&[(1.0, 1.0), (1.0, -1.0), (-1.0, -1.0), (-1.0, 1.0)]);
        let result = square.overlap_split().unwrap();
        assert_eq!(result, vec![square]);
    }

    #[test]
    fn bowtie_splits_into_two_triangles() {
        let bowtie = poly(&[(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)]);
        let result = bowtie.overlap_split().unwrap();
        assert_eq!(result.len(), 2);
        assert_same_vertices(&result[0], &poly(&[(1.0, 1.0), (1.0, -1.0), (0.0, 0.0)]));
        assert_same_vertices(&result[1], &poly(&[(-1.0, 1.0), (-1.0, -1.0), (0.0, 0.0)]));
    }

    #[test]
    fn twisted_polygon_splits_in_discovery_order() {
        let twisted = poly(&[(0.0, 1.0), (0.0, -1.0), (-1.0, 0.0), (1.0, 0.0), (1.0, 2.0), (2.0, 1.0)]);
        let result = twisted.overlap_split().unwrap();
        assert_eq!(result.len(), 3);
        assert_same_vertices(&result[0], &poly(&[(0.0, 1.0), (0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]));
        assert_same_vertices(&result[1], &poly(&[(0.0, -1.0), (-1.0, 0.0), (0.0, 0.0)]));
        assert_same_vertices(&result[2], &poly(&[(1.0, 2.0), (2.0, 1.0), (1.0, 1.0)]));
    }

    #[test]
    fn split_leaves_source_untouched() {
        let bowtie = poly(&[(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)]);
        let before = bowtie.clone();
        bowtie.overlap_split().unwrap();
        assert_eq!(bowtie, before);
    }

    #[test]
    fn crossing_through_wrapped_arc() {
        // vertex 1 touches the middle of edge 3; edges 0 and 1 only see it as their own
        // endpoint, so the crossing is first found from edge 3 after wrapping around to edge 0
        let touching = poly(&[(-1.0, -2.0), (0.0, 0.0), (1.0, -2.0), (2.0, 0.0), (-2.0, 0.0)]);
        let crossing = first_crossing(&touching).unwrap();
        assert_eq!((crossing.edge, crossing.other), (3, 5));

        let result = touching.overlap_split().unwrap();
        assert_eq!(result.len(), 2);
        assert_same_vertices(&result[0], &poly(&[(0.0, 0.0), (1.0, -2.0), (2.0, 0.0)]));
        assert_same_vertices(&result[1], &poly(&[(-2.0, 0.0), (-1.0, -2.0), (0.0, 0.0)]));
    }

    #[test]
    fn degenerate_polygons_have_nothing_to_split() {
        assert_eq!(poly(&[]).overlap_split().unwrap().len(), 1);
        assert_eq!(poly(&[(1.0, 1.0)]).overlap_split().unwrap().len(), 1);
        assert_eq!(poly(&[(0.0, 0.0), (1.0, 1.0)]).overlap_split().unwrap().len(), 1);
    }

    #[test]
    fn split_budget_is_enforced() {
        let twisted = poly(&[(0.0, 1.0), (0.0, -1.0), (-1.0, 0.0), (1.0, 0.0), (1.0, 2.0), (2.0, 1.0)]);
        let config = SplitConfig { max_splits: 1 };
        assert_eq!(
            twisted.overlap_split_with(&config),
            Err(GeometryError::SplitDidNotConverge { splits: 1 })
        );
        assert_eq!(twisted.overlap_split_with(&SplitConfig { max_splits: 2 }).unwrap().len(), 3);
    }
}
