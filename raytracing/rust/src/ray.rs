use crate::vec3::{Point3, Vec3};

/// A half-line `origin + t * direction`.
///
/// The direction is stored as given, it is not normalized and may be zero.
/// Because of that `t` counts multiples of the direction, not distance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ray {
    origin: Point3,
    direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }

    pub const fn origin(&self) -> &Point3 {
        &self.origin
    }

    pub const fn direction(&self) -> &Vec3 {
        &self.direction
    }
}
