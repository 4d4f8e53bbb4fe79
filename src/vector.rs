use std::f64::consts::TAU;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use geo_types::Coord;

use crate::point::Point;

/// Maps an angle in radians onto `[0, 2π)`.
pub(crate) fn standardize_angle(angle: f64) -> f64 {
    let standard = angle.rem_euclid(TAU);
    // rem_euclid may round up to exactly TAU for tiny negative inputs
    if standard >= TAU {
        0.0
    } else {
        standard
    }
}

/// A free displacement in the plane.
///
/// Every operation returns a new vector; `+`, `-`, unary `-` and `* f64` are the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `angle` radians from the positive x-axis.
    pub fn unit(angle: f64) -> Self {
        let standard = standardize_angle(angle);
        Self::new(standard.cos(), standard.sin())
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Heading of the vector in `[0, 2π)`.
    pub fn angle(self) -> f64 {
        standardize_angle(self.y.atan2(self.x))
    }

    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar magnitude of the 2D cross product.
    pub fn cross(self, other: Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Counter-clockwise angle from `self` to `other`, in `[0, 2π)`.
    pub fn angle_between(self, other: Vector) -> f64 {
        standardize_angle(other.angle() - self.angle())
    }

    pub fn scale(self, factor: f64) -> Vector {
        Vector::new(self.x * factor, self.y * factor)
    }

    /// Unit vector with the same heading. The zero vector stays zero.
    pub fn normalize(self) -> Vector {
        let length = self.magnitude();
        if length == 0.0 {
            return self;
        }
        Vector::new(self.x / length, self.y / length)
    }

    pub fn rotate(self, angle: f64) -> Vector {
        let (sin, cos) = angle.sin_cos();
        Vector::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Mirrors the vector across `axis`. A zero axis is the caller's problem: it
    /// reflects across the x-axis.
    pub fn reflect(self, axis: Vector) -> Vector {
        let (sin, cos) = standardize_angle(2.0 * axis.angle()).sin_cos();
        Vector::new(self.x * cos + self.y * sin, self.x * sin - self.y * cos)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{:+.3}, {:+.3}>", self.x, self.y)
    }
}

impl From<Coord<f64>> for Vector {
    fn from(coord: Coord<f64>) -> Self {
        Vector::new(coord.x, coord.y)
    }
}

impl From<Vector> for Coord<f64> {
    fn from(vector: Vector) -> Self {
        Coord {
            x: vector.x,
            y: vector.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn angles_are_standardized() {
        assert_abs_diff_eq!(Vector::new(1.0, 0.0).angle(), 0.0);
        assert_abs_diff_eq!(Vector::new(0.0, -1.0).angle(), 3.0 * FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(Vector::new(-1.0, 0.0).angle(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(standardize_angle(-FRAC_PI_2), 3.0 * FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(standardize_angle(5.0 * PI), PI, epsilon = 1e-12);
        assert!(standardize_angle(-1e-18) < TAU);
    }

    #[test]
    fn angle_between_is_counter_clockwise() {
        let east = Vector::new(1.0, 0.0);
        let north = Vector::new(0.0, 1.0);
        assert_abs_diff_eq!(east.angle_between(north), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(north.angle_between(east), 3.0 * FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn operations_do_not_alias() {
        let a = Vector::new(1.0, 2.0);
        let b = a.scale(3.0) + Vector::new(1.0, 1.0);
        assert_eq!(a, Vector::new(1.0, 2.0));
        assert_eq!(b, Vector::new(4.0, 7.0));
        assert_eq!(a - b, Vector::new(-3.0, -5.0));
        assert_eq!(-a * 2.0, Vector::new(-2.0, -4.0));
    }

    #[test]
    fn normalize_keeps_zero_vector() {
        assert_eq!(Vector::ZERO.normalize(), Vector::ZERO);
        let n = Vector::new(3.0, 4.0).normalize();
        assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(n.x, 0.6, epsilon = 1e-12);
    }

    #[test]
    fn rotate_and_reflect() {
        let r = Vector::new(1.0, 0.0).rotate(FRAC_PI_2);
        assert_abs_diff_eq!(r.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.y, 1.0, epsilon = 1e-12);

        let m = Vector::new(1.0, 0.0).reflect(Vector::unit(FRAC_PI_4));
        assert_abs_diff_eq!(m.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m.y, 1.0, epsilon = 1e-12);

        let flipped = Vector::new(2.0, 3.0).reflect(Vector::new(1.0, 0.0));
        assert_abs_diff_eq!(flipped.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(flipped.y, -3.0, epsilon = 1e-12);
    }

    #[test]
    fn dot_and_cross() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(3.0, -1.0);
        assert_eq!(a.dot(b), 1.0);
        assert_eq!(a.cross(b), -7.0);
    }

    #[test]
    fn display() {
        assert_eq!(Vector::new(1.0, -2.0).to_string(), "<+1.000, -2.000>");
    }
}
