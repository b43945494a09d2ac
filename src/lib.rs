//! Geometric core of a minimal ray tracer.
//!
//! Provides the 3D vector algebra ([`math::Vector3`] with reflection and
//! Snell's-law refraction) and the sphere primitive
//! ([`geometry::Sphere`] with quadratic ray intersection and outward
//! normals) that a rendering loop calls per ray, per object. Scene
//! management, cameras, shading and image output live in the layers above.

pub mod geometry;
pub mod math;

pub use geometry::Sphere;
pub use math::Vector3;
