//! Numeric building blocks for a ray tracer: [`Vec3`], [`Ray`] and pixel
//! output for [`Color`].

pub mod color;
pub mod ray;
pub mod vec3;

pub use color::{write_color, Color, ColorPpm};
pub use ray::Ray;
pub use vec3::{cross, dot, unit_vector, Point3, Vec3};
