use log::debug;

use crate::error::GeometryError;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::split::SplitConfig;

impl Polygon {
    /// Offsets every edge orthogonally by `quantity` with [`SplitConfig::default`].
    pub fn offset(&self, quantity: f64) -> Result<Vec<Polygon>, GeometryError> {
        self.offset_with(quantity, &SplitConfig::default())
    }

    /// Offsets every edge orthogonally by `quantity`. Positive values move the edges away
    /// from the interior, negative values towards it.
    ///
    /// Each edge is shifted on its own, so every vertex turns into two. The resulting loop is
    /// split at its self-intersections and only the pieces winding the same way as `self` are
    /// kept; the others are corner notches or collapsed regions. Pieces that enclose no area
    /// (fewer than three vertices) are dropped as well, and a polygon without edges has
    /// nothing to offset and yields no pieces.
    pub fn offset_with(&self, quantity: f64, config: &SplitConfig) -> Result<Vec<Polygon>, GeometryError> {
        if quantity == 0.0 {
            return Ok(vec![self.clone()]);
        }
        if self.edges().is_empty() {
            return Ok(Vec::new());
        }

        let clockwise = self.clockwise();
        let shifted: Vec<Point> = self
            .edges()
            .iter()
            .flat_map(|edge| {
                let shift = edge.normal(clockwise).scale(quantity);
                [edge.start.displace(shift), edge.end.displace(shift)]
            })
            .collect();

        let pieces = Polygon::new(&shifted).overlap_split_with(config)?;
        let total = pieces.len();
        let kept: Vec<Polygon> = pieces
            .into_iter()
            .filter(|piece| piece.vertices().len() >= 3 && piece.clockwise() == clockwise)
            .collect();
        debug!("offset by {}: kept {} of {} loops", quantity, kept.len(), total);
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coords: &[(f64, f64)]) -> Polygon {
        let points: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
        Polygon::new(&points)
    }

    fn square() -> Polygon {
        poly(&[(1.0, 1.0), (1.0, -1.0), (-1.0, -1.0), (-1.0, 1.0)])
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
    fn zero_offset_is_a_copy() {
        let polygon = square().with_anchor(Point::new(4.0, 4.0));
        assert_eq!(polygon.offset(0.0).unwrap(), vec![polygon]);
    }

    #[test]
    fn outward_offset_bevels_corners() {
        let result = square().offset(1.0).unwrap();
        assert_eq!(result.len(), 1);
        assert_same_vertices(
            &result[0],
            &poly(&[(2.0, 1.0), (2.0, -1.0), (1.0, -2.0), (-1.0, -2.0), (-2.0, -1.0), (-2.0, 1.0), (-1.0, 2.0), (1.0, 2.0)]),
        );
        assert!(result[0].clockwise());
    }

    #[test]
    fn inward_offset_drops_corner_notches() {
        let result = square().offset(-0.5).unwrap();
        assert_eq!(result.len(), 1);
        assert_same_vertices(&result[0], &poly(&[(0.5, -0.5), (-0.5, -0.5), (-0.5, 0.5), (0.5, 0.5)]));
    }

    #[test]
    fn inward_offset_past_the_middle_vanishes() {
        assert!(square().offset(-1.0).unwrap().is_empty());
    }

    #[test]
    fn outward_is_outward_for_counter_clockwise_polygons() {
        let ccw = poly(&[(-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0), (1.0, 1.0)]);
        assert!(!ccw.clockwise());
        let result = ccw.offset(0.25).unwrap();
        assert_eq!(result.len(), 1);
        assert!(!result[0].clockwise());
        assert_same_vertices(
            &result[0],
            &poly(&[
                (-1.25, 1.0),
                (-1.25, -1.0),
                (-1.0, -1.25),
                (1.0, -1.25),
                (1.25, -1.0),
                (1.25, 1.0),
                (1.0, 1.25),
                (-1.0, 1.25),
            ]),
        );
    }

    #[test]
    fn polygon_without_edges_has_nothing_to_offset() {
        assert!(poly(&[]).offset(1.0).unwrap().is_empty());
        assert!(poly(&[(2.0, 3.0)]).offset(1.0).unwrap().is_empty());
    }
}
