//! `mathcore::vectors` submodule implements a three-dimensional vector which is used to represent
//! positions, directions, normals and translations in space.
//!

use crate::mathcore::{
    floats::{almost_equal, FloatOperations},
    MathError,
};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, BitXor, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// [`Vector3`] struct represents three-dimensional vector and three-dimensional point with `f32`
/// coordinates.
///
/// All operations return new instances; the struct is a plain value type, so host code
/// (for example a debug-UI slider) may freely mutate the public fields between frames.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
pub struct Vector3 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,

    /// Z component of vector.
    ///
    pub z: f32,
}
impl Vector3 {
    /// Initializes vector with zeroes.
    ///
    pub fn zero() -> Self {
        Self::from([0.0; 3])
    }
    /// Initializes vector with ones.
    ///
    pub fn one() -> Self {
        Self::from([1.0; 3])
    }

    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
    /// Sets from values to elements of vector.
    ///
    pub fn set(&mut self, elements: [f32; 3]) {
        self.x = elements[0];
        self.y = elements[1];
        self.z = elements[2];
    }

    /// Applies function to every vector element and returns changed vector.
    ///
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::from(self.elements().map(&f))
    }
    /// Combines vectors by applying function on their elements.
    ///
    pub fn combine(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Vector3 {
            x: f(self.x, other.x),
            y: f(self.y, other.y),
            z: f(self.z, other.z),
        }
    }

    /// Multiplies two vectors component-wise.
    ///
    pub fn scale(self, other: Self) -> Self {
        self.combine(other, |a, b| a * b)
    }

    /// Returns squared magnitude of a vector (vector length).
    ///
    pub fn sqr_magnitude(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
    /// Returns magnitude of vector.
    ///
    /// # Example
    /// ```rust
    /// # use gizmo3d::mathcore::vectors::Vector3;
    /// assert_eq!(Vector3::from([2.0, 3.0, 6.0]).magnitude(), 7.0);
    /// ```
    ///
    pub fn magnitude(&self) -> f32 {
        self.sqr_magnitude().sqrt()
    }

    /// Returns new vector that is normalized.
    ///
    /// Zero-length input has no direction to preserve, so it is rejected instead of
    /// producing non-finite components.
    ///
    /// # Example
    /// ```rust
    /// # use gizmo3d::mathcore::{MathError, vectors::Vector3};
    /// let v: Vector3 = Vector3::from([3.0, 0.0, 4.0]).normalized().unwrap();
    /// assert_eq!(v, Vector3::from([0.6, 0.0, 0.8]));
    /// assert_eq!(Vector3::zero().normalized(), Err(MathError::ZeroLengthVector));
    /// ```
    ///
    pub fn normalized(self) -> Result<Self, MathError> {
        let magnitude: f32 = self.magnitude();
        if magnitude == 0.0 {
            return Err(MathError::ZeroLengthVector);
        }
        Ok(self / magnitude)
    }

    /// Performs dot product operation on two vectors.
    ///
    pub fn dot_product(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    /// Returns vector that represents cross product of two three-dimensional vectors.
    ///
    /// # Example
    /// ```rust
    /// # use gizmo3d::mathcore::vectors::Vector3;
    /// let x: Vector3 = Vector3::from([1.0, 0.0, 0.0]);
    /// let y: Vector3 = Vector3::from([0.0, 1.0, 0.0]);
    /// assert_eq!(x.cross_product(y), Vector3::from([0.0, 0.0, 1.0]));
    /// ```
    ///
    pub fn cross_product(self, other: Self) -> Self {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns projection of this vector onto `other`.
    ///
    /// Projecting onto the zero vector divides by zero, so it is rejected.
    ///
    /// # Example
    /// ```rust
    /// # use gizmo3d::mathcore::{MathError, vectors::Vector3};
    /// let v: Vector3 = Vector3::from([2.0, 3.0, 0.0]);
    /// let onto: Vector3 = Vector3::from([4.0, 0.0, 0.0]);
    /// assert_eq!(v.project_onto(onto).unwrap(), Vector3::from([2.0, 0.0, 0.0]));
    /// assert_eq!(
    ///     v.project_onto(Vector3::zero()),
    ///     Err(MathError::ZeroProjectionBasis)
    /// );
    /// ```
    ///
    pub fn project_onto(self, other: Self) -> Result<Self, MathError> {
        let sqr: f32 = other.sqr_magnitude();
        if sqr == 0.0 {
            return Err(MathError::ZeroProjectionBasis);
        }
        Ok(other * (self.dot_product(other) / sqr))
    }

    /// Returns a vector orthogonal to this one.
    ///
    /// The result lies in the xy-plane (`(-y, x, 0)`) whenever `x` or `y` is non-zero;
    /// for a vector pointing purely along z the yz-plane fallback `(0, -z, y)` is taken,
    /// which guarantees a non-zero orthogonal result for any non-zero input.
    ///
    /// # Example
    /// ```rust
    /// # use gizmo3d::mathcore::vectors::Vector3;
    /// let v: Vector3 = Vector3::from([0.0, 0.0, 5.0]);
    /// assert_eq!(v.perpendicular(), Vector3::from([0.0, -5.0, 0.0]));
    /// assert_eq!(v.perpendicular().dot_product(v), 0.0);
    /// ```
    ///
    pub fn perpendicular(self) -> Self {
        if self.x != 0.0 || self.y != 0.0 {
            Vector3 {
                x: -self.y,
                y: self.x,
                z: 0.0,
            }
        } else {
            Vector3 {
                x: 0.0,
                y: -self.z,
                z: self.y,
            }
        }
    }

    /// Linearly interpolates between vectors a and b by t.
    ///
    /// t will be clamped between [0.0; 1.0].
    ///
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t: f32 = t.clamp(0.0, 1.0);
        self * (1.0 - t) + other * t
    }
}
impl FloatOperations for Vector3 {
    fn correct_to(self, digits: i32) -> Self {
        self.map(|elem| elem.correct_to(digits))
    }
}
impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|a| -a)
    }
}
impl Add<Self> for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a + b)
    }
}
impl Sub<Self> for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a - b)
    }
}
impl AddAssign<Self> for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl SubAssign<Self> for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        self.map(|a| a * rhs)
    }
}
impl Div<f32> for Vector3 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        self.map(|a| a / rhs)
    }
}
impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}
impl DivAssign<f32> for Vector3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
impl Mul<Self> for Vector3 {
    type Output = f32;

    /// Performs dot product operation on two vectors.
    ///
    fn mul(self, other: Self) -> Self::Output {
        self.dot_product(other)
    }
}
impl BitXor for Vector3 {
    type Output = Self;

    /// Returns vector that represents cross product of two three-dimensional vectors.
    ///
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.cross_product(rhs)
    }
}
impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.elements()
            .iter()
            .zip(other.elements().iter())
            .all(|(&a, &b)| almost_equal(a, b))
    }
}
impl Eq for Vector3 {}
impl From<[f32; 3]> for Vector3 {
    fn from(arr: [f32; 3]) -> Self {
        Vector3 {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }
}

/// Type alias for [`Vector3`].
///
pub type Point = Vector3;
