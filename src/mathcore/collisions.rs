//! `mathcore::collisions` submodule defines collision detection
//! between geometrical primitives.
//!

use crate::mathcore::{
    shapes::{Plane, Sphere},
    MathError,
};

/// `Collides` trait defines shapes that can be tested for collision against shapes of `Rhs` type.
///
/// Detection is fallible because degenerate primitives (e.g. a plane with a zero normal)
/// do not define a surface to collide with.
///
pub trait Collides<Rhs> {
    /// Returns whether two shapes collide or not.
    ///
    fn collides_with(&self, other: &Rhs) -> Result<bool, MathError>;
}

impl Collides<Plane> for Sphere {
    /// Returns whether sphere touches or crosses given plane.
    ///
    /// Sphere that only grazes the plane (distance from center to plane
    /// is exactly equal to the radius) is considered colliding.
    ///
    /// # Errors
    /// [`MathError::ZeroNormal`] is returned if `other.normal` is a zero vector.
    ///
    /// # Example
    /// ```rust
    /// # use gizmo3d::mathcore::{collisions::Collides, shapes::{Plane, Sphere}, vectors::Vector3};
    /// let sphere: Sphere = Sphere { center: Vector3::zero(), radius: 0.5 };
    /// let ground: Plane = Plane {
    ///     normal: Vector3 { x: 0.0, y: 1.0, z: 0.0 },
    ///     distance: -0.4,
    /// };
    /// assert_eq!(sphere.collides_with(&ground), Ok(true));
    /// ```
    ///
    fn collides_with(&self, other: &Plane) -> Result<bool, MathError> {
        Ok(other.signed_distance_to(self.center)?.abs() <= self.radius)
    }
}
impl Collides<Sphere> for Plane {
    fn collides_with(&self, other: &Sphere) -> Result<bool, MathError> {
        other.collides_with(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Collides;
    use crate::mathcore::{
        shapes::{Plane, Sphere},
        vectors::Vector3,
        MathError,
    };

    #[test]
    fn sphere_vs_plane() {
        let sphere: Sphere = Sphere {
            center: Vector3::zero(),
            radius: 0.5,
        };

        let far: Plane = Plane {
            normal: Vector3::from([0.0, 1.0, 0.0]),
            distance: 1.0,
        };
        assert_eq!(sphere.collides_with(&far), Ok(false));

        let near: Plane = Plane {
            normal: Vector3::from([0.0, 1.0, 0.0]),
            distance: 0.4,
        };
        assert_eq!(sphere.collides_with(&near), Ok(true));
        assert_eq!(near.collides_with(&sphere), Ok(true));

        // center distance exactly equal to radius still counts as a collision
        let grazing: Plane = Plane {
            normal: Vector3::from([0.0, 1.0, 0.0]),
            distance: 0.5,
        };
        assert_eq!(sphere.collides_with(&grazing), Ok(true));

        // collision is symmetric with respect to the side of the plane
        let below: Plane = Plane {
            normal: Vector3::from([0.0, 1.0, 0.0]),
            distance: -0.4,
        };
        assert_eq!(sphere.collides_with(&below), Ok(true));
    }

    #[test]
    fn degenerate_plane() {
        let sphere: Sphere = Sphere {
            center: Vector3::zero(),
            radius: 10.0,
        };
        let plane: Plane = Plane {
            normal: Vector3::zero(),
            distance: 0.0,
        };
        assert_eq!(sphere.collides_with(&plane), Err(MathError::ZeroNormal));
        assert_eq!(plane.collides_with(&sphere), Err(MathError::ZeroNormal));
    }
}
