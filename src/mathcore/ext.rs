//! `mathcore::ext` hidden submodule supplies helper newtypes and enums that are
//! used throughout `gizmo3d` crate.
//!

use crate::mathcore::floats::{almost_equal, FloatOperations};
use serde::{Deserialize, Serialize};
use std::{
    f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, TAU},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use thiserror::Error;

/// [`MathError`] enum lists every degenerate numeric input that the core refuses to compute
/// through.
///
/// None of these cases are recoverable internally (a function has no context to substitute a
/// fallback value), so each one surfaces as an explicit `Err` instead of silently propagating
/// NaN or infinity.
///
/// # Example
/// ```rust
/// # use gizmo3d::mathcore::{MathError, vectors::Vector3};
/// assert_eq!(Vector3::zero().normalized(), Err(MathError::ZeroLengthVector));
/// ```
///
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MathError {
    /// Zero-length vector cannot be normalized.
    ///
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,
    /// Projection basis is the zero vector.
    ///
    #[error("cannot project onto a zero vector")]
    ZeroProjectionBasis,
    /// Plane normal is the zero vector.
    ///
    #[error("plane normal is a zero vector")]
    ZeroNormal,
    /// Matrix determinant is zero, so the inverse does not exist.
    ///
    #[error("matrix is singular, inverse does not exist")]
    SingularMatrix,
    /// Homogeneous `w` component came out as zero, so the perspective divide is impossible.
    ///
    #[error("homogeneous w component is zero")]
    DegenerateHomogeneousW,
    /// Projection parameters describe an empty or collapsed view volume.
    ///
    #[error("projection parameters are degenerate")]
    DegenerateProjection,
}

/// [`Angle`] is a newtype that restricts angle values to [0.0; TAU).
/// If given value is not finite, 0.0 will be set as angle value.
///
/// Underlying value is stored in radians, so it is the most precise mode.
///
/// # Example
/// ```rust
/// # use gizmo3d::mathcore::Angle;
/// # use std::f32::consts::FRAC_PI_2;
/// let angle: Angle = Angle::from_radians(-FRAC_PI_2);
/// assert_eq!(angle, Angle::from_degrees(270.0));
/// assert_eq!(angle.degrees(), 270.0);
/// assert_eq!(angle.radians(), 3.0 * FRAC_PI_2);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialOrd)]
pub struct Angle(f32);
impl Angle {
    /// Angle that corresponds to zero.
    ///
    pub const ZERO: Angle = Angle(0.0);
    /// Angle that corresponds to 30 degree angle.
    ///
    pub const DEG30: Angle = Angle(FRAC_PI_6);
    /// Angle that corresponds to 45 degree angle.
    ///
    pub const DEG45: Angle = Angle(FRAC_PI_4);
    /// Angle that corresponds to 60 degree angle.
    ///
    pub const DEG60: Angle = Angle(FRAC_PI_3);
    /// Angle that corresponds to 90 degree angle.
    ///
    pub const DEG90: Angle = Angle(FRAC_PI_2);
    /// Angle that corresponds to 180 degree angle.
    ///
    pub const DEG180: Angle = Angle(2.0 * FRAC_PI_2);
    /// Angle that corresponds to 270 degree angle.
    ///
    pub const DEG270: Angle = Angle(3.0 * FRAC_PI_2);

    /// Normalizes given angle (in radians) to [0.0; 2 * PI).
    ///
    fn normalize(angle: f32) -> f32 {
        if angle.is_finite() {
            angle - ((angle / TAU).floor() * TAU)
        } else {
            0.0
        }
    }

    /// Returns angle value in radians.
    ///
    pub fn radians(&self) -> f32 {
        self.0
    }
    /// Returns angle value in degrees.
    ///
    pub fn degrees(&self) -> f32 {
        self.0.to_degrees()
    }

    /// Initializes zeroed angle.
    ///
    pub const fn zero() -> Self {
        Self::ZERO
    }
    /// Initializes angle from radians.
    ///
    /// # Example
    /// ```rust
    /// # use gizmo3d::mathcore::Angle;
    /// # use std::f32::consts::FRAC_PI_2;
    /// let angle: Angle = Angle::from_radians(FRAC_PI_2);
    /// assert_eq!(angle.degrees(), 90.0);
    /// ```
    ///
    pub fn from_radians(radians: f32) -> Self {
        Angle(Self::normalize(radians))
    }
    /// Initializes angle from degrees.
    ///
    /// # Example
    /// ```rust
    /// # use gizmo3d::mathcore::Angle;
    /// # use std::f32::consts::FRAC_PI_2;
    /// let angle: Angle = Angle::from_degrees(90.0);
    /// assert_eq!(angle.radians(), FRAC_PI_2);
    /// ```
    ///
    pub fn from_degrees(degrees: f32) -> Self {
        Angle::from_radians(degrees.to_radians())
    }

    /// Returns sine of angle.
    ///
    pub fn sin(&self) -> f32 {
        self.0.sin()
    }
    /// Returns cosine of angle.
    ///
    pub fn cos(&self) -> f32 {
        self.0.cos()
    }
    /// Returns tangent of angle.
    ///
    pub fn tan(&self) -> f32 {
        self.0.tan()
    }
    /// Returns sine and cosine of angle packed in tuple.
    ///
    /// # Example
    /// ```rust
    /// # use gizmo3d::mathcore::Angle;
    /// let angle: Angle = Angle::from_degrees(90.0);
    /// assert_eq!(angle.sin_cos(), (angle.sin(), angle.cos()));
    /// ```
    ///
    pub fn sin_cos(&self) -> (f32, f32) {
        self.0.sin_cos()
    }
}
impl FloatOperations for Angle {
    fn correct_to(self, digits: i32) -> Self {
        Angle(self.0.correct_to(digits))
    }
}
impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Angle::from_radians(-self.0)
    }
}
impl Add<Self> for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Angle::from_radians(self.0 + rhs.0)
    }
}
impl Sub<Self> for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Angle::from_radians(self.0 - rhs.0)
    }
}
impl Mul<f32> for Angle {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::from_radians(self.0 * rhs)
    }
}
impl Div<f32> for Angle {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self::from_radians(self.0 / rhs)
    }
}
impl AddAssign<Self> for Angle {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl SubAssign<Self> for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl MulAssign<f32> for Angle {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}
impl DivAssign<f32> for Angle {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        almost_equal(self.0, other.0)
    }
}
impl Eq for Angle {}

#[cfg(test)]
mod tests {
    use super::{Angle, MathError};
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn angle() {
        assert_eq!(Angle::from_radians(TAU + FRAC_PI_2), Angle::DEG90);
        assert_eq!(Angle::from_radians(-PI), Angle::DEG180);
        assert_eq!(Angle::from_degrees(360.0), Angle::ZERO);
        assert_eq!(Angle::from_radians(f32::INFINITY), Angle::ZERO);

        assert_eq!(Angle::DEG90 + Angle::DEG90, Angle::DEG180);
        assert_eq!(Angle::DEG90 - Angle::DEG180, Angle::DEG270);
        assert_eq!(-Angle::DEG90, Angle::DEG270);
        assert_eq!(Angle::DEG45 * 2.0, Angle::DEG90);
        assert_eq!(Angle::DEG180 / 2.0, Angle::DEG90);
    }

    #[test]
    fn math_error_display() {
        assert_eq!(
            MathError::SingularMatrix.to_string(),
            "matrix is singular, inverse does not exist"
        );
        assert_eq!(
            MathError::ZeroLengthVector.to_string(),
            "cannot normalize a zero-length vector"
        );
    }
}
