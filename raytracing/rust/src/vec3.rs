use std::{
    fmt::Display,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// Three `f64` components. No validation is done anywhere, NaN and infinities
/// flow through the arithmetic the same way they do for plain floats.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Vec3 {
    e: [f64; 3],
}

pub type Point3 = Vec3;

#[macro_export]
macro_rules! vec3 {
    () => {
        $crate::vec3::Vec3::new()
    };
    ($e0:expr, $e1:expr, $e2:expr) => {
        $crate::vec3::Vec3::new_with($e0, $e1, $e2)
    };
}

impl Vec3 {
    #[inline]
    pub const fn new() -> Self {
        Self { e: [0f64; 3] }
    }

    #[inline]
    pub const fn new_with(e0: f64, e1: f64, e2: f64) -> Self {
        Self { e: [e0, e1, e2] }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.e[0]
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.e[1]
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.e[2]
    }

    /// Reads component `i` without a bounds check.
    ///
    /// # Safety
    ///
    /// `i` must be 0, 1 or 2.
    #[inline]
    pub unsafe fn get_unchecked(&self, i: usize) -> f64 {
        *self.e.get_unchecked(i)
    }

    /// Mutable counterpart of [`Vec3::get_unchecked`].
    ///
    /// # Safety
    ///
    /// `i` must be 0, 1 or 2.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut f64 {
        self.e.get_unchecked_mut(i)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.e[0] * self.e[0] + self.e[1] * self.e[1] + self.e[2] * self.e[2]
    }

    #[inline]
    pub fn dot(&self, v: &Vec3) -> f64 {
        let u = self;
        u.e[0] * v.e[0] + u.e[1] * v.e[1] + u.e[2] * v.e[2]
    }

    #[inline]
    pub fn cross(&self, v: &Vec3) -> Vec3 {
        let u = self;
        Vec3::new_with(
            u.e[1] * v.e[2] - u.e[2] * v.e[1],
            u.e[2] * v.e[0] - u.e[0] * v.e[2],
            u.e[0] * v.e[1] - u.e[1] * v.e[0],
        )
    }

    /// Divides by the length. The zero vector comes back as all NaN.
    #[inline]
    pub fn unit_vector(&self) -> Vec3 {
        self / self.length()
    }
}

#[inline]
pub fn dot(u: &Vec3, v: &Vec3) -> f64 {
    u.dot(v)
}

#[inline]
pub fn cross(u: &Vec3, v: &Vec3) -> Vec3 {
    u.cross(v)
}

#[inline]
pub fn unit_vector(v: &Vec3) -> Vec3 {
    v.unit_vector()
}

impl Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [x, y, z] = self.e;
        write!(f, "{x} {y} {z}")
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(e: [f64; 3]) -> Self {
        Self { e }
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        v.e
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.e[index]
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.e[index]
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Self {
            e: [-self.e[0], -self.e[1], -self.e[2]],
        }
    }
}

impl Neg for &Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        self.e[0] += rhs.e[0];
        self.e[1] += rhs.e[1];
        self.e[2] += rhs.e[2];
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Self) -> Self::Output {
        let e0 = self.e[0] + rhs.e[0];
        let e1 = self.e[1] + rhs.e[1];
        let e2 = self.e[2] + rhs.e[2];
        Self::new_with(e0, e1, e2)
    }
}

impl Add for &Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Self) -> Self::Output {
        *self + *rhs
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.e[0] -= rhs.e[0];
        self.e[1] -= rhs.e[1];
        self.e[2] -= rhs.e[2];
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Self) -> Self::Output {
        let e0 = self.e[0] - rhs.e[0];
        let e1 = self.e[1] - rhs.e[1];
        let e2 = self.e[2] - rhs.e[2];
        Self::Output::new_with(e0, e1, e2)
    }
}

impl Sub for &Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Self) -> Self::Output {
        *self - *rhs
    }
}

impl MulAssign for Vec3 {
    fn mul_assign(&mut self, rhs: Self) {
        self.e[0] *= rhs.e[0];
        self.e[1] *= rhs.e[1];
        self.e[2] *= rhs.e[2];
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, rhs: f64) {
        self.e[0] *= rhs;
        self.e[1] *= rhs;
        self.e[2] *= rhs;
    }
}

impl Mul for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: Self) -> Self::Output {
        let e0 = self.e[0] * rhs.e[0];
        let e1 = self.e[1] * rhs.e[1];
        let e2 = self.e[2] * rhs.e[2];
        Self::Output::new_with(e0, e1, e2)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Self::Output {
        let e0 = self.e[0] * rhs;
        let e1 = self.e[1] * rhs;
        let e2 = self.e[2] * rhs;
        Self::Output::new_with(e0, e1, e2)
    }
}

impl Mul for &Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: Self) -> Self::Output {
        *self * *rhs
    }
}

impl Mul<f64> for &Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Self::Output {
        *self * rhs
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

impl Mul<&Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, rhs: &Vec3) -> Self::Output {
        *rhs * self
    }
}

impl DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, rhs: f64) {
        *self *= 1.0 / rhs;
    }
}

impl Div for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: Self) -> Self::Output {
        let e0 = self.e[0] / rhs.e[0];
        let e1 = self.e[1] / rhs.e[1];
        let e2 = self.e[2] / rhs.e[2];
        Self::Output::new_with(e0, e1, e2)
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f64) -> Self::Output {
        self * (1.0 / rhs)
    }
}

impl Div for &Vec3 {
    type Output = Vec3;

    fn div(self, rhs: Self) -> Self::Output {
        *self / *rhs
    }
}

impl Div<f64> for &Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f64) -> Self::Output {
        *self * (1.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn approx_eq(a: &Vec3, b: &Vec3) -> bool {
        (a - b).length() < EPS
    }

    fn samples() -> Vec<Vec3> {
        vec![
            vec3![1.0, 2.0, 3.0],
            vec3![-4.5, 0.25, 7.0],
            vec3![0.1, -0.2, 0.3],
            vec3![1e3, -1e-3, 42.0],
        ]
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Vec3::default(), vec3![0.0, 0.0, 0.0]);
        assert_eq!(Vec3::new(), vec3!());
    }

    #[test]
    fn accessors_match_index() {
        let v = vec3![1.0, 2.0, 3.0];
        assert_eq!(v.x(), v[0]);
        assert_eq!(v.y(), v[1]);
        assert_eq!(v.z(), v[2]);
        unsafe {
            assert_eq!(v.get_unchecked(2), 3.0);
        }
    }

    #[test]
    fn index_mut_writes_component() {
        let mut v = Vec3::new();
        v[1] = 5.0;
        unsafe {
            *v.get_unchecked_mut(2) = -1.0;
        }
        assert_eq!(v, vec3![0.0, 5.0, -1.0]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let v = Vec3::new();
        _ = v[3];
    }

    #[test]
    fn double_negation() {
        for v in samples() {
            assert_eq!(-(-v), v);
        }
    }

    #[test]
    fn negation_leaves_operand() {
        let v = vec3![1.0, -2.0, 3.0];
        let n = -&v;
        assert_eq!(n, vec3![-1.0, 2.0, -3.0]);
        assert_eq!(v, vec3![1.0, -2.0, 3.0]);
    }

    #[test]
    fn compound_assign() {
        let mut v = vec3![1.0, 2.0, 3.0];
        v += vec3![1.0, 1.0, 1.0];
        assert_eq!(v, vec3![2.0, 3.0, 4.0]);
        v -= vec3![2.0, 2.0, 2.0];
        assert_eq!(v, vec3![0.0, 1.0, 2.0]);
        v *= 2.0;
        assert_eq!(v, vec3![0.0, 2.0, 4.0]);
        v /= 4.0;
        assert_eq!(v, vec3![0.0, 0.5, 1.0]);
        v *= vec3![3.0, 2.0, 0.5];
        assert_eq!(v, vec3![0.0, 1.0, 0.5]);
    }

    #[test]
    fn scale_then_divide_restores() {
        for v in samples() {
            for t in [0.5, 3.0, -7.25, 1e-3] {
                let mut w = v;
                w *= t;
                w /= t;
                assert!(approx_eq(&w, &v), "{v} scaled by {t} became {w}");
            }
        }
    }

    #[test]
    fn divide_by_zero_is_infinite() {
        let mut v = vec3![1.0, -1.0, 0.0];
        v /= 0.0;
        assert_eq!(v.x(), f64::INFINITY);
        assert_eq!(v.y(), f64::NEG_INFINITY);
        assert!(v.z().is_nan());
    }

    #[test]
    fn length_squared_is_self_dot() {
        for v in samples() {
            assert_eq!(v.length_squared(), dot(&v, &v));
        }
        assert_eq!(vec3![3.0, 4.0, 0.0].length(), 5.0);
    }

    #[test]
    fn unit_vector_has_unit_length() {
        for v in samples() {
            assert!((unit_vector(&v).length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn unit_vector_of_zero_is_nan() {
        let u = Vec3::new().unit_vector();
        assert!(u.x().is_nan() && u.y().is_nan() && u.z().is_nan());
    }

    #[test]
    fn binary_operators() {
        let a = vec3![1.0, 2.0, 3.0];
        let b = vec3![4.0, 5.0, 6.0];
        assert_eq!(a + b, vec3![5.0, 7.0, 9.0]);
        assert_eq!(&b - &a, vec3![3.0, 3.0, 3.0]);
        assert_eq!(a * b, vec3![4.0, 10.0, 18.0]);
        assert_eq!(b / a, vec3![4.0, 2.5, 2.0]);
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(2.0 * &a, vec3![2.0, 4.0, 6.0]);
        assert_eq!(&b / 2.0, vec3![2.0, 2.5, 3.0]);
    }

    #[test]
    fn cross_basis() {
        let x = vec3![1.0, 0.0, 0.0];
        let y = vec3![0.0, 1.0, 0.0];
        assert_eq!(cross(&x, &y), vec3![0.0, 0.0, 1.0]);
    }

    #[test]
    fn cross_anti_commutes() {
        let s = samples();
        for a in &s {
            for b in &s {
                assert_eq!(cross(a, b), -cross(b, a));
            }
        }
    }

    #[test]
    fn dot_is_linear_in_first_argument() {
        let s = samples();
        for a in &s {
            for b in &s {
                for c in &s {
                    let lhs = dot(&(a + b), c);
                    let rhs = dot(a, c) + dot(b, c);
                    assert!((lhs - rhs).abs() <= 1e-9 * lhs.abs().max(1.0));
                }
            }
        }
    }

    #[test]
    fn display() {
        assert_eq!(vec3![1.0, 2.5, -3.0].to_string(), "1 2.5 -3");
    }

    #[test]
    fn array_conversion() {
        let v = Vec3::from([1.0, 2.0, 3.0]);
        let arr: [f64; 3] = v.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }
}
