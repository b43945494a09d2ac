use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use super::equals;

/// A point or direction in 3D space.
///
/// Plain `f64` components; the magnitude is recomputed from the components
/// on every [`norm`](Vector3::norm) call, so it can never go stale through
/// any construction or mutation path.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    pub const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    pub const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    pub const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3 { x, y, z }
    }

    /// Direction vector from point `p0` to point `p1`.
    pub fn from_points(p0: Vector3, p1: Vector3) -> Vector3 {
        Vector3::new(p1.x - p0.x, p1.y - p0.y, p1.z - p0.z)
    }

    pub fn dot(self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn norm_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean magnitude.
    pub fn norm(self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Returns a unit-length copy.
    ///
    /// A zero-length input divides by zero and yields NaN/infinite
    /// components; this is deliberate IEEE propagation, not guarded here.
    /// Check with [`is_finite`](Vector3::is_finite) when the input may be
    /// degenerate.
    pub fn normalized(self) -> Vector3 {
        let norm = self.norm();
        Vector3::new(self.x / norm, self.y / norm, self.z / norm)
    }

    /// Normalizes in place. Same division (and same zero-length caveat) as
    /// [`normalized`](Vector3::normalized).
    pub fn normalize(&mut self) {
        let norm = self.norm();
        self.x /= norm;
        self.y /= norm;
        self.z /= norm;
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

// dot product
impl Mul for Vector3 {
    type Output = f64;
    fn mul(self, other: Vector3) -> f64 {
        self.dot(other)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, other: f64) -> Vector3 {
        Vector3::new(self.x * other, self.y * other, self.z * other)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, other: Vector3) -> Vector3 {
        other * self
    }
}

impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, other: f64) {
        self.x *= other;
        self.y *= other;
        self.z *= other;
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;
    fn div(self, other: f64) -> Vector3 {
        Vector3::new(self.x / other, self.y / other, self.z / other)
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, other: Vector3) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        self * -1.0
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, other: Vector3) -> Vector3 {
        self + (-other)
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, other: Vector3) {
        *self += -other;
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(other: [f64; 3]) -> Vector3 {
        Vector3::new(other[0], other[1], other[2])
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> [f64; 3] {
        [v.x, v.y, v.z]
    }
}

/// Cosine of the angle between `a` and `b`: `a·b / (|a|·|b|)`.
///
/// Returns positive infinity when the denominator is within epsilon of zero
/// (at least one operand has zero length), rather than letting the division
/// produce NaN.
pub fn angle_cosine(a: Vector3, b: Vector3) -> f64 {
    let denominator = a.norm() * b.norm();
    if equals(denominator, 0.0) {
        return f64::INFINITY;
    }
    a * b / denominator
}

/// Mirror reflection of `direction` about `normal`.
///
/// Both inputs are assumed normalized (not reverified). The normal must
/// oppose the incident direction; when `direction · normal >= 0` it is
/// negated once, so either surface orientation gives the same reflection.
pub fn reflect(direction: Vector3, normal: Vector3) -> Vector3 {
    let mut normal = normal;
    let mut cos_incident = direction * normal;
    if cos_incident >= 0.0 {
        normal = -normal;
        cos_incident = -cos_incident;
    }
    direction - 2.0 * cos_incident * normal
}

/// Snell's-law refraction of `direction` across a boundary from refractive
/// index `n1` (incidence side) into `n2` (transmission side).
///
/// Inputs are assumed normalized. When `direction · normal > 0` the ray is
/// exiting the medium: the normal is negated and the indices swapped, once.
/// An epsilon-zero index returns [`Vector3::ZERO`] instead of dividing by
/// zero. Past the critical angle (total internal reflection) the result has
/// NaN components; callers detect that with
/// [`is_finite`](Vector3::is_finite).
pub fn refract(direction: Vector3, normal: Vector3, n1: f64, n2: f64) -> Vector3 {
    if equals(n1, 0.0) || equals(n2, 0.0) {
        return Vector3::ZERO;
    }

    let mut normal = normal;
    let (mut n1, mut n2) = (n1, n2);
    let mut cos_alpha = normal * direction;
    if cos_alpha > 0.0 {
        normal = -normal;
        std::mem::swap(&mut n1, &mut n2);
        cos_alpha = -cos_alpha;
    }

    let relation = n1 / n2;
    let perpendicular = relation * (direction - cos_alpha * normal);
    // sqrt of a negative past the critical angle: NaN, propagated as-is.
    let parallel = -(1.0 - perpendicular.norm_squared()).sqrt() * normal;
    perpendicular + parallel
}
