use crate::math::{equals, Vector3};

/// Root count of the intersection quadratic `a·t² + b·t + c = 0`.
///
/// `InfiniteRoots` covers the fully degenerate `a ≈ b ≈ c ≈ 0` case; the
/// public intersection surface collapses it to a non-hit, but the classifier
/// keeps it distinct from `NoRoots`.
#[derive(Copy, Clone, Debug, PartialEq)]
enum QuadraticRoots {
    NoRoots,
    OneRoot(f64),
    TwoRoots(f64, f64),
    InfiniteRoots,
}

/// Classifies the roots of `a·t² + b·t + c = 0`.
///
/// All near-zero tests go through the shared epsilon comparison so a
/// near-tangent ray cannot be misclassified by floating-point drift.
fn solve_quadratic(a: f64, b: f64, c: f64) -> QuadraticRoots {
    if equals(a, 0.0) {
        if equals(b, 0.0) {
            return if equals(c, 0.0) {
                QuadraticRoots::InfiniteRoots
            } else {
                QuadraticRoots::NoRoots
            };
        }
        // degenerate linear case
        return QuadraticRoots::OneRoot(-c / b);
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return QuadraticRoots::NoRoots;
    }
    if equals(discriminant, 0.0) {
        // tangent hit
        return QuadraticRoots::OneRoot(-b / (2.0 * a));
    }

    let sqrt_d = discriminant.sqrt();
    QuadraticRoots::TwoRoots((-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a))
}

/// Sphere primitive: center, radius and an opaque material.
///
/// The material type `M` is supplied by the shading layer; this core stores
/// it by value and hands it back untouched. Radius is conceptually
/// non-negative but not validated — only `radius²` enters the intersection
/// math, so a negative radius is accepted with undefined geometric meaning.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere<M> {
    center: Vector3,
    radius: f64,
    material: M,
}

impl<M> Sphere<M> {
    pub fn new(center: Vector3, radius: f64, material: M) -> Sphere<M> {
        Sphere {
            center,
            radius,
            material,
        }
    }

    pub fn from_coords(x: f64, y: f64, z: f64, radius: f64, material: M) -> Sphere<M> {
        Sphere::new(Vector3::new(x, y, z), radius, material)
    }

    /// Intersects the ray `origin + t · direction` with the sphere surface.
    ///
    /// Returns `None` when the ray misses (or the quadratic degenerates to
    /// infinitely many roots). With two distinct roots the returned `t` is
    /// the one with the smaller absolute value — the hit closest to the ray
    /// origin along either direction, not necessarily in front of it.
    /// Callers that want the nearest forward hit must discard negative `t`.
    ///
    /// `direction` is assumed non-zero; a zero direction degenerates the
    /// quadratic and reports no hit.
    pub fn intersect(&self, origin: Vector3, direction: Vector3) -> Option<f64> {
        let oc = Vector3::from_points(self.center, origin);

        let a = direction * direction;
        let b = 2.0 * (direction * oc);
        let c = oc * oc - self.radius * self.radius;

        match solve_quadratic(a, b, c) {
            QuadraticRoots::OneRoot(t) => Some(t),
            QuadraticRoots::TwoRoots(t1, t2) => Some(if t1.abs() < t2.abs() { t1 } else { t2 }),
            QuadraticRoots::NoRoots | QuadraticRoots::InfiniteRoots => None,
        }
    }

    /// Outward unit normal at a point on the sphere surface.
    ///
    /// Undefined (non-finite components) when `point` coincides with the
    /// center, since a zero-length vector gets normalized.
    pub fn normal(&self, point: Vector3) -> Vector3 {
        Vector3::from_points(self.center, point).normalized()
    }

    pub fn center(&self) -> Vector3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> &M {
        &self.material
    }
}
