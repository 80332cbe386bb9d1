//! `mathcore::transforms` submodule implements construction of every transformation matrix that
//! `gizmo3d` works with: basic translations, rotations and scalings, the combined affine
//! transform, perspective and orthographic projections and the NDC-to-pixel viewport mapping.
//!
//! All layouts are given for the row-vector convention (`v' = v * M`). The sign pattern of the
//! rotation matrices is fixed by that convention; together with the viewport's flipped Y axis it
//! determines the handedness of the whole pipeline and must be reproduced exactly.
//!

use crate::mathcore::{matrices::Matrix4, vectors::Vector3, Angle, MathError};
use serde::{Deserialize, Serialize};

/// [`Transform`] struct-like enum represents the basic matrix transformations.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transform {
    /// Translation moves an object along given vector.
    ///
    Translation {
        /// Vector along which object will be translated.
        ///
        vector: Vector3,
    },

    /// Rotation around the X axis.
    ///
    RotationX {
        /// Angle for which coordinate system will be rotated.
        ///
        angle: Angle,
    },
    /// Rotation around the Y axis.
    ///
    RotationY {
        /// Angle for which coordinate system will be rotated.
        ///
        angle: Angle,
    },
    /// Rotation around the Z axis.
    ///
    RotationZ {
        /// Angle for which coordinate system will be rotated.
        ///
        angle: Angle,
    },

    /// Scaling transform expands or contracts along each axis by given scalar values.
    ///
    Scaling {
        /// Per-axis scaling factors.
        ///
        scale: Vector3,
    },
}
impl Transform {
    /// Constructs corresponding transformation matrix by using values.
    ///
    /// # Examples
    /// ### Translation
    /// ```rust
    /// # use gizmo3d::mathcore::{transforms::Transform, matrices::Matrix4, vectors::Vector3};
    /// let matrix: Matrix4 = Transform::Translation {
    ///     vector: Vector3 { x: 2.0, y: 3.0, z: 4.0 },
    /// }
    /// .matrix();
    /// let point: Vector3 = matrix.apply_to(Vector3::zero()).unwrap();
    /// assert_eq!(point, Vector3 { x: 2.0, y: 3.0, z: 4.0 });
    /// ```
    ///
    /// ### Rotation
    /// ```rust
    /// # use gizmo3d::mathcore::{transforms::Transform, matrices::Matrix4, vectors::Vector3, Angle};
    /// let matrix: Matrix4 = Transform::RotationZ { angle: Angle::DEG90 }.matrix();
    /// let point: Vector3 = matrix.apply_to(Vector3 { x: 1.0, y: 0.0, z: 0.0 }).unwrap();
    /// assert_eq!(point, Vector3 { x: 0.0, y: 1.0, z: 0.0 });
    /// ```
    ///
    /// ### Scaling
    /// ```rust
    /// # use gizmo3d::mathcore::{transforms::Transform, matrices::Matrix4, vectors::Vector3};
    /// let matrix: Matrix4 = Transform::Scaling {
    ///     scale: Vector3 { x: 3.0, y: 2.0, z: 1.0 },
    /// }
    /// .matrix();
    /// let point: Vector3 = matrix.apply_to(Vector3::one()).unwrap();
    /// assert_eq!(point, Vector3 { x: 3.0, y: 2.0, z: 1.0 });
    /// ```
    ///
    pub fn matrix(self) -> Matrix4 {
        let mut matrix: Matrix4 = Matrix4::identity();
        match self {
            Self::Translation { vector } => {
                matrix[3][0] = vector.x;
                matrix[3][1] = vector.y;
                matrix[3][2] = vector.z;
            }
            Self::RotationX { angle } => {
                let (sin, cos): (f32, f32) = angle.sin_cos();
                matrix[1][1] = cos;
                matrix[1][2] = sin;
                matrix[2][1] = -sin;
                matrix[2][2] = cos;
            }
            Self::RotationY { angle } => {
                let (sin, cos): (f32, f32) = angle.sin_cos();
                matrix[0][0] = cos;
                matrix[0][2] = -sin;
                matrix[2][0] = sin;
                matrix[2][2] = cos;
            }
            Self::RotationZ { angle } => {
                let (sin, cos): (f32, f32) = angle.sin_cos();
                matrix[0][0] = cos;
                matrix[0][1] = sin;
                matrix[1][0] = -sin;
                matrix[1][1] = cos;
            }
            Self::Scaling { scale } => {
                matrix[0][0] = scale.x;
                matrix[1][1] = scale.y;
                matrix[2][2] = scale.z;
            }
        };
        matrix
    }

    /// Combines given transforms by using dot product.
    ///
    /// With row vectors the application order reads left to right, so transforms
    /// `A -> B -> C` are passed in that order and the product is `A * B * C`.
    ///
    /// # Example
    /// ```rust
    /// # use gizmo3d::mathcore::{transforms::Transform, matrices::Matrix4, vectors::Vector3, Angle};
    /// let matrix: Matrix4 = Transform::combine(
    ///     [
    ///         Transform::Scaling { scale: Vector3::one() * 2.0 },
    ///         Transform::Translation { vector: Vector3 { x: 1.0, y: 0.0, z: 0.0 } },
    ///     ]
    ///     .into_iter(),
    /// );
    /// let point: Vector3 = matrix.apply_to(Vector3::one()).unwrap();
    /// assert_eq!(point, Vector3 { x: 3.0, y: 2.0, z: 2.0 }); // scaled first, then moved
    /// ```
    ///
    pub fn combine(transforms: impl Iterator<Item = Transform>) -> Matrix4 {
        transforms.fold(Matrix4::identity(), |acc, transform| {
            acc * transform.matrix()
        })
    }
}

/// Constructs the combined scale-rotate-translate matrix.
///
/// The rotation block is the product `Rx * Ry * Rz` (in that multiplication order), row `i`
/// of which is scaled by the `i`-th scale component; the translation sits in the bottom row.
///
/// # Example
/// ```rust
/// # use gizmo3d::mathcore::{transforms::affine, matrices::Matrix4, vectors::Vector3, Angle};
/// let matrix: Matrix4 = affine(
///     Vector3::one(),
///     [Angle::ZERO; 3],
///     Vector3 { x: 5.0, y: 3.0, z: 2.0 },
/// );
/// let point: Vector3 = matrix.apply_to(Vector3::zero()).unwrap();
/// assert_eq!(point, Vector3 { x: 5.0, y: 3.0, z: 2.0 });
/// ```
///
pub fn affine(scale: Vector3, rotation: [Angle; 3], translate: Vector3) -> Matrix4 {
    let [x, y, z] = rotation;
    let rotation: Matrix4 = Transform::RotationX { angle: x }.matrix()
        * (Transform::RotationY { angle: y }.matrix() * Transform::RotationZ { angle: z }.matrix());

    let mut matrix: Matrix4 = Matrix4::identity();
    let factors: [f32; 3] = scale.elements();
    for (r, factor) in factors.into_iter().enumerate() {
        for c in 0..3 {
            matrix[r][c] = factor * rotation[r][c];
        }
    }
    matrix[3][0] = translate.x;
    matrix[3][1] = translate.y;
    matrix[3][2] = translate.z;
    matrix
}

/// [`Projection`] struct-like enum represents projections from camera space into clip space.
///
/// Matrix construction is fallible: parameters that collapse the view volume have no usable
/// matrix and are rejected with [`MathError::DegenerateProjection`].
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum Projection {
    /// Perspective projection from a vertical field of view.
    ///
    PerspectiveFov {
        /// Vertical field of view.
        ///
        fov_y: Angle,
        /// Width to height ratio of the target surface.
        ///
        aspect_ratio: f32,
        /// Distance to the near clipping plane.
        ///
        near_clip: f32,
        /// Distance to the far clipping plane.
        ///
        far_clip: f32,
    },

    /// Orthographic projection from an axis-aligned box.
    ///
    Orthographic {
        /// Left edge of the view box.
        ///
        left: f32,
        /// Top edge of the view box.
        ///
        top: f32,
        /// Right edge of the view box.
        ///
        right: f32,
        /// Bottom edge of the view box.
        ///
        bottom: f32,
        /// Distance to the near clipping plane.
        ///
        near_clip: f32,
        /// Distance to the far clipping plane.
        ///
        far_clip: f32,
    },
}
impl Projection {
    /// Constructs corresponding projection matrix by using values.
    ///
    /// # Example
    /// ```rust
    /// # use gizmo3d::mathcore::{transforms::Projection, matrices::Matrix4, Angle, MathError};
    /// let projection: Projection = Projection::PerspectiveFov {
    ///     fov_y: Angle::from_radians(0.45),
    ///     aspect_ratio: 1280.0 / 720.0,
    ///     near_clip: 0.1,
    ///     far_clip: 100.0,
    /// };
    /// assert!(projection.matrix().is_ok());
    ///
    /// let collapsed: Projection = Projection::PerspectiveFov {
    ///     fov_y: Angle::ZERO,
    ///     aspect_ratio: 1.0,
    ///     near_clip: 0.1,
    ///     far_clip: 100.0,
    /// };
    /// assert_eq!(collapsed.matrix(), Err(MathError::DegenerateProjection));
    /// ```
    ///
    pub fn matrix(self) -> Result<Matrix4, MathError> {
        match self {
            Self::PerspectiveFov {
                fov_y,
                aspect_ratio,
                near_clip,
                far_clip,
            } => {
                // fov multiples of pi land on tan zeroes and poles
                let half_tan: f32 = (fov_y / 2.0).tan();
                if half_tan == 0.0 || !half_tan.is_finite() || far_clip == near_clip {
                    return Err(MathError::DegenerateProjection);
                }
                let cot: f32 = 1.0 / half_tan;
                let depth: f32 = far_clip / (far_clip - near_clip);

                let mut matrix: Matrix4 = Matrix4::zero();
                matrix[0][0] = cot / aspect_ratio;
                matrix[1][1] = cot;
                matrix[2][2] = depth;
                matrix[2][3] = 1.0;
                matrix[3][2] = -near_clip * depth;
                Ok(matrix)
            }
            Self::Orthographic {
                left,
                top,
                right,
                bottom,
                near_clip,
                far_clip,
            } => {
                if right == left || top == bottom || far_clip == near_clip {
                    return Err(MathError::DegenerateProjection);
                }

                let mut matrix: Matrix4 = Matrix4::zero();
                matrix[0][0] = 2.0 / (right - left);
                matrix[1][1] = 2.0 / (top - bottom);
                matrix[2][2] = 1.0 / (far_clip - near_clip);
                matrix[3][0] = (left + right) / (left - right);
                matrix[3][1] = (top + bottom) / (bottom - top);
                matrix[3][2] = near_clip / (near_clip - far_clip);
                matrix[3][3] = 1.0;
                Ok(matrix)
            }
        }
    }
}

/// [`Viewport`] struct describes the NDC-to-pixel mapping of a target surface.
///
/// The Y axis is flipped (`-height/2` scale) so that the pixel origin sits in the top-left
/// corner, as screens expect.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Left edge of the viewport in pixels.
    ///
    pub left: f32,
    /// Top edge of the viewport in pixels.
    ///
    pub top: f32,
    /// Width of the viewport in pixels.
    ///
    pub width: f32,
    /// Height of the viewport in pixels.
    ///
    pub height: f32,
    /// Near end of the depth range.
    ///
    pub min_depth: f32,
    /// Far end of the depth range.
    ///
    pub max_depth: f32,
}
impl Viewport {
    /// Constructs the viewport matrix.
    ///
    /// NDC `(0, 0, z)` maps to the pixel center `(left + width/2, top + height/2)` for any z.
    ///
    /// # Example
    /// ```rust
    /// # use gizmo3d::mathcore::{transforms::Viewport, matrices::Matrix4, vectors::Vector3};
    /// let viewport: Viewport = Viewport {
    ///     left: 0.0,
    ///     top: 0.0,
    ///     width: 1280.0,
    ///     height: 720.0,
    ///     min_depth: 0.0,
    ///     max_depth: 1.0,
    /// };
    /// let center: Vector3 = viewport
    ///     .matrix()
    ///     .apply_to(Vector3 { x: 0.0, y: 0.0, z: 0.5 })
    ///     .unwrap();
    /// assert_eq!(center, Vector3 { x: 640.0, y: 360.0, z: 0.5 });
    /// ```
    ///
    pub fn matrix(self) -> Matrix4 {
        let mut matrix: Matrix4 = Matrix4::zero();
        matrix[0][0] = self.width / 2.0;
        matrix[1][1] = -(self.height / 2.0);
        matrix[2][2] = self.max_depth - self.min_depth;
        matrix[3][0] = self.left + self.width / 2.0;
        matrix[3][1] = self.top + self.height / 2.0;
        matrix[3][2] = self.min_depth;
        matrix[3][3] = 1.0;
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::{affine, Projection, Transform, Viewport};
    use crate::mathcore::{
        floats::almost_equal, matrices::Matrix4, vectors::Vector3, Angle, MathError,
    };

    #[test]
    fn rotation_layouts() {
        // zero angle is the identity for every axis
        for transform in [
            Transform::RotationX { angle: Angle::ZERO },
            Transform::RotationY { angle: Angle::ZERO },
            Transform::RotationZ { angle: Angle::ZERO },
        ] {
            assert_eq!(transform.matrix(), Matrix4::identity());
        }

        let (sin, cos): (f32, f32) = Angle::DEG30.sin_cos();

        let x: Matrix4 = Transform::RotationX { angle: Angle::DEG30 }.matrix();
        assert_eq!(
            x.as_array(),
            [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, cos, sin, 0.0],
                [0.0, -sin, cos, 0.0],
                [0.0, 0.0, 0.0, 1.0]
            ]
        );

        let y: Matrix4 = Transform::RotationY { angle: Angle::DEG30 }.matrix();
        assert_eq!(
            y.as_array(),
            [
                [cos, 0.0, -sin, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [sin, 0.0, cos, 0.0],
                [0.0, 0.0, 0.0, 1.0]
            ]
        );

        let z: Matrix4 = Transform::RotationZ { angle: Angle::DEG30 }.matrix();
        assert_eq!(
            z.as_array(),
            [
                [cos, sin, 0.0, 0.0],
                [-sin, cos, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0]
            ]
        );
    }

    #[test]
    fn rotation_is_orthonormal() {
        let rotation: Matrix4 = Transform::RotationY {
            angle: Angle::from_degrees(37.0),
        }
        .matrix();
        assert_eq!(rotation * rotation.transpose(), Matrix4::identity());
        assert_eq!(
            rotation.inverse().expect("Rotations are never singular."),
            rotation.transpose()
        );
    }

    #[test]
    fn affine_matrix() {
        let matrix: Matrix4 = affine(
            Vector3::one(),
            [Angle::ZERO; 3],
            Vector3::from([5.0, 3.0, 2.0]),
        );
        assert_eq!(
            matrix.apply_to(Vector3::zero()).unwrap(),
            Vector3::from([5.0, 3.0, 2.0])
        );

        // scale rows, rotate, then translate in the bottom row
        let matrix: Matrix4 = affine(
            Vector3::from([2.0, 3.0, 4.0]),
            [Angle::ZERO, Angle::ZERO, Angle::DEG90],
            Vector3::from([1.0, 0.0, 0.0]),
        );
        assert_eq!(
            matrix.apply_to(Vector3::from([1.0, 0.0, 0.0])).unwrap(),
            Vector3::from([1.0, 2.0, 0.0])
        );
        assert_eq!(
            matrix.apply_to(Vector3::from([0.0, 1.0, 0.0])).unwrap(),
            Vector3::from([-2.0, 0.0, 0.0])
        );
        assert_eq!(
            matrix.apply_to(Vector3::from([0.0, 0.0, 1.0])).unwrap(),
            Vector3::from([1.0, 0.0, 4.0])
        );

        // affine matrices built from non-zero scale are invertible
        let matrix: Matrix4 = affine(
            Vector3::from([1.5, 1.0, 0.5]),
            [Angle::DEG30, Angle::DEG45, Angle::DEG60],
            Vector3::from([-2.0, 4.0, 8.0]),
        );
        let inverse: Matrix4 = matrix.inverse().expect("Scale components are non-zero.");
        assert_eq!(matrix * inverse, Matrix4::identity());
    }

    #[test]
    fn perspective() {
        let matrix: Matrix4 = Projection::PerspectiveFov {
            fov_y: Angle::DEG90,
            aspect_ratio: 2.0,
            near_clip: 1.0,
            far_clip: 2.0,
        }
        .matrix()
        .expect("Parameters are not degenerate.");

        // tan(45deg) = 1, so the focal scales are 1/aspect and 1
        assert!(almost_equal(matrix[0][0], 0.5));
        assert!(almost_equal(matrix[1][1], 1.0));
        assert_eq!(matrix[2][3], 1.0);

        // near plane lands on z = 0, far plane on z = 1
        assert_eq!(
            matrix.apply_to(Vector3::from([0.0, 0.0, 1.0])).unwrap().z,
            0.0
        );
        assert_eq!(
            matrix.apply_to(Vector3::from([0.0, 0.0, 2.0])).unwrap().z,
            1.0
        );

        for degenerate in [
            Projection::PerspectiveFov {
                fov_y: Angle::ZERO,
                aspect_ratio: 1.0,
                near_clip: 0.1,
                far_clip: 100.0,
            },
            Projection::PerspectiveFov {
                fov_y: Angle::DEG90,
                aspect_ratio: 1.0,
                near_clip: 5.0,
                far_clip: 5.0,
            },
        ] {
            assert_eq!(degenerate.matrix(), Err(MathError::DegenerateProjection));
        }
    }

    #[test]
    fn orthographic() {
        let matrix: Matrix4 = Projection::Orthographic {
            left: -2.0,
            top: 1.0,
            right: 2.0,
            bottom: -1.0,
            near_clip: 0.0,
            far_clip: 10.0,
        }
        .matrix()
        .expect("Parameters are not degenerate.");

        // corners of the box map onto the edges of the NDC cube
        assert_eq!(
            matrix.apply_to(Vector3::from([2.0, 1.0, 0.0])).unwrap(),
            Vector3::from([1.0, 1.0, 0.0])
        );
        assert_eq!(
            matrix.apply_to(Vector3::from([-2.0, -1.0, 10.0])).unwrap(),
            Vector3::from([-1.0, -1.0, 1.0])
        );

        for degenerate in [
            Projection::Orthographic {
                left: 1.0,
                top: 1.0,
                right: 1.0,
                bottom: -1.0,
                near_clip: 0.0,
                far_clip: 1.0,
            },
            Projection::Orthographic {
                left: -1.0,
                top: 1.0,
                right: 1.0,
                bottom: 1.0,
                near_clip: 0.0,
                far_clip: 1.0,
            },
            Projection::Orthographic {
                left: -1.0,
                top: 1.0,
                right: 1.0,
                bottom: -1.0,
                near_clip: 3.0,
                far_clip: 3.0,
            },
        ] {
            assert_eq!(degenerate.matrix(), Err(MathError::DegenerateProjection));
        }
    }

    #[test]
    fn viewport_maps_ndc_center_to_pixel_center() {
        let viewport: Viewport = Viewport {
            left: 100.0,
            top: 50.0,
            width: 640.0,
            height: 480.0,
            min_depth: 0.0,
            max_depth: 1.0,
        };
        let matrix: Matrix4 = viewport.matrix();

        for z in [0.0, 0.25, 1.0] {
            let center: Vector3 = matrix.apply_to(Vector3::from([0.0, 0.0, z])).unwrap();
            assert_eq!(center.x, 420.0);
            assert_eq!(center.y, 290.0);
        }

        // Y is flipped: NDC up goes towards smaller pixel rows
        let up: Vector3 = matrix.apply_to(Vector3::from([0.0, 1.0, 0.0])).unwrap();
        assert_eq!(up.y, 50.0);
        let down: Vector3 = matrix.apply_to(Vector3::from([0.0, -1.0, 0.0])).unwrap();
        assert_eq!(down.y, 530.0);
    }
}
