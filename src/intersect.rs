use geo_types::Coord;
use num_traits::Float;

pub struct IntersectionResult<N: Float + std::fmt::Debug> {
    /// Parameter along the first segment.
    pub t: N,
    /// Parameter along the second segment.
    pub u: N,
    pub point: Coord<N>,
}

fn cross_product<N: Float + std::fmt::Debug>(a: Coord<N>, b: Coord<N>) -> N {
    a.x * b.y - a.y * b.x
}

// https://stackoverflow.com/questions/563198/how-do-you-detect-where-two-line-segments-intersect/565282#565282
/// Intersects the segments `p0 -> p1` and `q0 -> q1`.
///
/// Parallel segments (including collinear overlaps and zero-length segments) never intersect,
/// and both parameters have to lie in the closed interval `[0, 1]`.
pub fn intersect<N: Float + std::fmt::Debug>(p0: Coord<N>, p1: Coord<N>, q0: Coord<N>, q1: Coord<N>) -> Option<IntersectionResult<N>> {
    let r = Coord {
        x: p1.x - p0.x,
        y: p1.y - p0.y,
    };
    let s = Coord {
        x: q1.x - q0.x,
        y: q1.y - q0.y,
    };
    let rxs = cross_product(r, s);
    if rxs == N::zero() {
        return None;
    }
    let q_p = Coord {
        x: q0.x - p0.x,
        y: q0.y - p0.y,
    };
    let t = cross_product(q_p, s) / rxs;
    if t < N::zero() || t > N::one() {
        return None;
    }
    let u = cross_product(q_p, r) / rxs;
    if u < N::zero() || u > N::one() {
        return None;
    }

    Some(IntersectionResult {
        t,
        u,
        point: Coord {
            x: p0.x + t * r.x,
            y: p0.y + t * r.y,
        },
    })
}
