//! `mathcore::shapes` submodule implements structs that are representing
//! three-dimensional geometrical primitives.
//!

use crate::mathcore::{
    vectors::{Point, Vector3},
    MathError,
};
use serde::{Deserialize, Serialize};

/// [`Sphere`] struct represents a sphere given by its center and radius.
///
/// # Example
/// ```rust
/// # use gizmo3d::mathcore::{shapes::Sphere, vectors::Vector3};
/// let sphere: Sphere = Sphere {
///     center: Vector3 { x: 0.0, y: 2.0, z: 0.0 },
///     radius: 1.5,
/// };
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Default)]
pub struct Sphere {
    /// Center of a sphere.
    ///
    pub center: Point,
    /// Radius of a sphere.
    ///
    pub radius: f32,
}

/// [`Plane`] struct represents an infinite plane in Hessian-like form:
/// all points `p` for which `dot(normal, p) == distance`.
///
/// `Plane.normal` does not have to be of unit length;
/// functions that need a unit normal normalize it themselves.
/// `Plane.distance` is measured in multiples of `normal`'s length,
/// so `normal * distance` always lies on the plane.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Default)]
pub struct Plane {
    /// Normal of a plane.
    ///
    pub normal: Vector3,
    /// Offset of a plane from the origin along its normal.
    ///
    pub distance: f32,
}
impl Plane {
    /// Returns signed distance from given point to this plane.
    ///
    /// Sign is positive on the side the normal points to and negative on the other one.
    ///
    /// # Errors
    /// [`MathError::ZeroNormal`] is returned if `self.normal` is a zero vector
    /// (such plane does not define a surface).
    ///
    /// # Example
    /// ```rust
    /// # use gizmo3d::mathcore::{shapes::Plane, vectors::Vector3};
    /// let ground: Plane = Plane {
    ///     normal: Vector3 { x: 0.0, y: 1.0, z: 0.0 },
    ///     distance: 0.0,
    /// };
    /// let height: f32 = ground
    ///     .signed_distance_to(Vector3 { x: 3.0, y: 2.0, z: -1.0 })
    ///     .unwrap();
    /// assert_eq!(height, 2.0);
    /// ```
    ///
    pub fn signed_distance_to(&self, point: Point) -> Result<f32, MathError> {
        let magnitude: f32 = self.normal.magnitude();
        if magnitude == 0.0 {
            return Err(MathError::ZeroNormal);
        }
        Ok((self.normal.dot_product(point) - self.distance) / magnitude)
    }
}

/// [`Segment`] struct represents three-dimensional line segment.
///
/// `Segment.origin` is considered as base, so that the second endpoint
/// is defined as `self.origin + self.diff`.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Segment {
    /// First point of segment.
    ///
    pub origin: Point,
    /// Offset from the first point of segment to the second one.
    ///
    pub diff: Vector3,
}
impl Segment {
    /// Returns second point of segment.
    ///
    pub fn end(&self) -> Point {
        self.origin + self.diff
    }
    /// Returns length of a segment.
    ///
    pub fn length(&self) -> f32 {
        self.diff.magnitude()
    }

    /// Returns the point of the line that contains this segment which is closest to given point.
    ///
    /// The result is obtained by projecting `point - self.origin` onto `self.diff` and is
    /// deliberately not clamped to the `[self.origin; self.end()]` range,
    /// so it may lie outside of the segment itself.
    ///
    /// # Errors
    /// [`MathError::ZeroProjectionBasis`] is returned if `self.diff` is a zero vector
    /// (degenerate segment defines no line to project onto).
    ///
    /// # Example
    /// ```rust
    /// # use gizmo3d::mathcore::{shapes::Segment, vectors::Vector3};
    /// let segment: Segment = Segment {
    ///     origin: Vector3::zero(),
    ///     diff: Vector3 { x: 10.0, y: 0.0, z: 0.0 },
    /// };
    /// let closest: Vector3 = segment
    ///     .closest_point(Vector3 { x: 3.0, y: 4.0, z: 0.0 })
    ///     .unwrap();
    /// assert_eq!(closest, Vector3 { x: 3.0, y: 0.0, z: 0.0 });
    /// ```
    ///
    pub fn closest_point(&self, point: Point) -> Result<Point, MathError> {
        Ok(self.origin + (point - self.origin).project_onto(self.diff)?)
    }
}
