//! `mathcore::matrices` submodule implements the 4x4 matrix which carries every affine and
//! projective transformation in `gizmo3d`.
//!
//! Matrices are row-major and follow the row-vector convention: a point is the homogeneous
//! row `(x, y, z, 1)` multiplied by the matrix from the left (`v' = v * M`). Every sign in
//! the rotation and projection layouts of [`crate::mathcore::transforms`] depends on this
//! convention, so it must not be changed.
//!

use crate::mathcore::{
    floats::{almost_equal, FloatOperations},
    vectors::Vector3,
    MathError,
};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

/// [`Matrix4`] struct implements linear algebra functions for 4x4 transform matrices.
///
/// # Example
/// ```rust
/// # use gizmo3d::mathcore::matrices::Matrix4;
/// let m: Matrix4 = Matrix4::identity();
/// assert_eq!(m * m, m);
/// assert_eq!(m[3][3], 1.0);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct Matrix4 {
    /// Underlying row-major array.
    ///
    arr: [[f32; 4]; 4],
}
impl Matrix4 {
    /// Returns matrix as an array of rows.
    ///
    pub fn as_array(&self) -> [[f32; 4]; 4] {
        self.arr
    }

    /// Initializes matrix with zeroes.
    ///
    pub fn zero() -> Self {
        Matrix4 { arr: [[0.0; 4]; 4] }
    }
    /// Makes identity matrix (1.0 on main diagonal and 0.0 elsewhere).
    ///
    /// # Example
    /// ```rust
    /// # use gizmo3d::mathcore::matrices::Matrix4;
    /// let m: Matrix4 = Matrix4::identity();
    /// assert_eq!(m.as_array()[0], [1.0, 0.0, 0.0, 0.0]);
    /// ```
    ///
    pub fn identity() -> Self {
        let mut matrix: Matrix4 = Matrix4::zero();
        for i in 0..4 {
            matrix[i][i] = 1.0;
        }
        matrix
    }

    /// Applies function to every matrix element and returns changed matrix.
    ///
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        let mut matrix: Matrix4 = Matrix4::zero();
        for r in 0..4 {
            for c in 0..4 {
                matrix[r][c] = f(self[r][c]);
            }
        }
        matrix
    }
    /// Combines matrices by applying function on their elements.
    ///
    pub fn combine(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let mut matrix: Matrix4 = Matrix4::zero();
        for r in 0..4 {
            for c in 0..4 {
                matrix[r][c] = f(self[r][c], other[r][c]);
            }
        }
        matrix
    }

    /// Returns transpose of initial matrix.
    ///
    pub fn transpose(&self) -> Self {
        let mut matrix: Matrix4 = Matrix4::zero();
        for r in 0..4 {
            for c in 0..4 {
                matrix[c][r] = self[r][c];
            }
        }
        matrix
    }

    /// Performs dot product operation on two matrices.
    ///
    /// Plain triple loop over 64 multiply-adds, no shortcuts.
    ///
    pub fn dot_product(self, other: Self) -> Self {
        let mut matrix: Matrix4 = Matrix4::zero();
        for r in 0..4 {
            for c in 0..4 {
                let mut res: f32 = 0.0;
                for k in 0..4 {
                    res += self[r][k] * other[k][c];
                }
                matrix[r][c] = res;
            }
        }
        matrix
    }

    /// Returns the 3x3 determinant of the submatrix that remains after removing
    /// `row` and `column`.
    ///
    fn minor(&self, row: usize, column: usize) -> f32 {
        let mut sub: [[f32; 3]; 3] = [[0.0; 3]; 3];
        let mut sr: usize = 0;
        for r in 0..4 {
            if r == row {
                continue;
            }
            let mut sc: usize = 0;
            for c in 0..4 {
                if c == column {
                    continue;
                }
                sub[sr][sc] = self[r][c];
                sc += 1;
            }
            sr += 1;
        }
        sub[0][0] * (sub[1][1] * sub[2][2] - sub[1][2] * sub[2][1])
            - sub[0][1] * (sub[1][0] * sub[2][2] - sub[1][2] * sub[2][0])
            + sub[0][2] * (sub[1][0] * sub[2][1] - sub[1][1] * sub[2][0])
    }
    /// Returns the signed cofactor for `row` and `column`.
    ///
    fn cofactor(&self, row: usize, column: usize) -> f32 {
        let minor: f32 = self.minor(row, column);
        if (row + column) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Returns determinant of initial matrix.
    ///
    /// Calculated by closed-form cofactor expansion along the first row.
    ///
    /// # Example
    /// ```rust
    /// # use gizmo3d::mathcore::matrices::Matrix4;
    /// assert_eq!(Matrix4::identity().determinant(), 1.0);
    /// assert_eq!(Matrix4::zero().determinant(), 0.0);
    /// ```
    ///
    pub fn determinant(&self) -> f32 {
        (0..4).map(|c| self[0][c] * self.cofactor(0, c)).sum()
    }

    /// Returns inverse of an initial matrix.
    ///
    /// Computed through the closed-form adjugate divided by the determinant; there is no
    /// pivoting, so near-singular matrices lose more precision than they would under
    /// Gaussian elimination. Camera and affine matrices, the intended inputs, are far from
    /// singular in practice.
    ///
    /// # Examples
    /// ```rust
    /// # use gizmo3d::mathcore::matrices::Matrix4;
    /// let m: Matrix4 = Matrix4::from([
    ///     [2.0, 0.0, 0.0, 0.0],
    ///     [0.0, 4.0, 0.0, 0.0],
    ///     [0.0, 0.0, 1.0, 0.0],
    ///     [1.0, 2.0, 3.0, 1.0],
    /// ]);
    /// let inverse: Matrix4 = m.inverse().expect("Determinant is not equal to zero.");
    /// assert_eq!(m * inverse, Matrix4::identity());
    /// ```
    ///
    /// ```rust
    /// # use gizmo3d::mathcore::{MathError, matrices::Matrix4};
    /// assert_eq!(Matrix4::zero().inverse(), Err(MathError::SingularMatrix));
    /// ```
    ///
    pub fn inverse(&self) -> Result<Self, MathError> {
        let determinant: f32 = self.determinant();
        if determinant == 0.0 {
            return Err(MathError::SingularMatrix);
        }
        let mut matrix: Matrix4 = Matrix4::zero();
        for r in 0..4 {
            for c in 0..4 {
                // adjugate is the transposed cofactor matrix
                matrix[c][r] = self.cofactor(r, c) / determinant;
            }
        }
        Ok(matrix)
    }

    /// Transforms given point under homogeneous semantics.
    ///
    /// The point is extended to the homogeneous row `(x, y, z, 1)`, right-multiplied by this
    /// matrix and divided by the resulting `w` component. `w` of zero means the point has no
    /// projective image, which is rejected.
    ///
    /// World space to pixel space is always two of these applications in sequence: once with
    /// a view-projection matrix and once with a viewport matrix. The two matrices are kept
    /// separate so the intermediate clip-space point can be inspected.
    ///
    /// # Example
    /// ```rust
    /// # use gizmo3d::mathcore::{matrices::Matrix4, vectors::Vector3};
    /// let translation: Matrix4 = Matrix4::from([
    ///     [1.0, 0.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0, 0.0],
    ///     [0.0, 0.0, 1.0, 0.0],
    ///     [5.0, 3.0, 2.0, 1.0],
    /// ]);
    /// let p: Vector3 = translation.apply_to(Vector3::zero()).unwrap();
    /// assert_eq!(p, Vector3::from([5.0, 3.0, 2.0]));
    /// ```
    ///
    pub fn apply_to(&self, point: Vector3) -> Result<Vector3, MathError> {
        let w: f32 =
            point.x * self[0][3] + point.y * self[1][3] + point.z * self[2][3] + self[3][3];
        if w == 0.0 {
            return Err(MathError::DegenerateHomogeneousW);
        }
        let result: Vector3 = Vector3 {
            x: point.x * self[0][0] + point.y * self[1][0] + point.z * self[2][0] + self[3][0],
            y: point.x * self[0][1] + point.y * self[1][1] + point.z * self[2][1] + self[3][1],
            z: point.x * self[0][2] + point.y * self[1][2] + point.z * self[2][2] + self[3][2],
        };
        Ok(result / w)
    }
}
impl FloatOperations for Matrix4 {
    fn correct_to(self, digits: i32) -> Self {
        self.map(|elem| elem.correct_to(digits))
    }
}
impl Index<usize> for Matrix4 {
    type Output = [f32; 4];

    fn index(&self, index: usize) -> &Self::Output {
        &self.arr[index]
    }
}
impl IndexMut<usize> for Matrix4 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.arr[index]
    }
}
impl Neg for Matrix4 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}
impl Add<Self> for Matrix4 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a + b)
    }
}
impl Sub<Self> for Matrix4 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a - b)
    }
}
impl Mul<Self> for Matrix4 {
    type Output = Self;

    /// Performs dot product operation on two matrices.
    ///
    fn mul(self, rhs: Self) -> Self::Output {
        self.dot_product(rhs)
    }
}
impl Mul<f32> for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        self.map(|x| x * rhs)
    }
}
impl PartialEq for Matrix4 {
    fn eq(&self, other: &Self) -> bool {
        for r in 0..4 {
            for c in 0..4 {
                if !almost_equal(self.arr[r][c], other.arr[r][c]) {
                    return false;
                }
            }
        }
        true
    }
}
impl Eq for Matrix4 {}
impl From<[[f32; 4]; 4]> for Matrix4 {
    /// Shorthand for writing `Matrix4 { arr: ... }`.
    ///
    fn from(arr: [[f32; 4]; 4]) -> Self {
        Matrix4 { arr }
    }
}

#[cfg(test)]
mod tests {
    use super::Matrix4;
    use crate::mathcore::{vectors::Vector3, MathError};

    /// Deterministic non-singular sample matrices for the algebraic property tests.
    ///
    fn samples() -> [Matrix4; 3] {
        [
            Matrix4::from([
                [2.0, 1.0, 0.0, 0.0],
                [-1.0, 3.0, 2.0, 0.0],
                [0.5, 0.0, 1.0, 0.0],
                [4.0, -2.0, 7.0, 1.0],
            ]),
            Matrix4::from([
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 0.5, -0.25, 0.0],
                [0.0, 2.0, 1.0, 0.0],
                [-3.0, 1.0, 0.0, 1.0],
            ]),
            Matrix4::from([
                [0.0, 1.0, 0.0, 0.0],
                [-1.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 2.0, 0.0],
                [1.0, 1.0, 1.0, 1.0],
            ]),
        ]
    }

    #[test]
    fn matrix() {
        let m1: Matrix4 = samples()[0];
        assert_eq!(m1[0][1], 1.0);
        assert_eq!(m1[3][2], 7.0);

        let mut m2: Matrix4 = m1;
        m2[0][1] = -5.0;
        assert_eq!(m2[0][1], -5.0);

        assert_eq!(m1 + Matrix4::zero(), m1);
        assert_eq!(m1 - m1, Matrix4::zero());
        assert_eq!(-m1, Matrix4::zero() - m1);
        assert_eq!(m1 * Matrix4::identity(), m1);
        assert_eq!(Matrix4::identity() * m1, m1);
        assert_eq!((m1 * 2.0) - m1, m1);

        assert_eq!(m1.transpose().transpose(), m1);
    }

    #[test]
    fn multiplication_is_associative() {
        let [a, b, c] = samples();
        assert_eq!((a * b) * c, a * (b * c));
    }

    #[test]
    fn determinant() {
        assert_eq!(Matrix4::identity().determinant(), 1.0);
        assert_eq!(Matrix4::zero().determinant(), 0.0);

        let diagonal: Matrix4 = Matrix4::from([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 3.0, 0.0, 0.0],
            [0.0, 0.0, 4.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(diagonal.determinant(), 24.0);

        // duplicated rows collapse the determinant
        let singular: Matrix4 = Matrix4::from([
            [1.0, 2.0, 3.0, 4.0],
            [1.0, 2.0, 3.0, 4.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(singular.determinant(), 0.0);
    }

    #[test]
    fn inverse() {
        for m in samples() {
            let inverse: Matrix4 = m.inverse().expect("Sample matrices are not singular.");
            assert_eq!(m * inverse, Matrix4::identity());
            assert_eq!(inverse * m, Matrix4::identity());
            assert_eq!(
                inverse.inverse().expect("Inverse is not singular either."),
                m
            );
        }

        assert_eq!(Matrix4::zero().inverse(), Err(MathError::SingularMatrix));
    }

    #[test]
    fn apply_to() {
        let translation: Matrix4 = Matrix4::from([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [5.0, 3.0, 2.0, 1.0],
        ]);
        assert_eq!(
            translation.apply_to(Vector3::from([1.0, 1.0, 1.0])).unwrap(),
            Vector3::from([6.0, 4.0, 3.0])
        );

        // perspective-style matrix halves everything through w = 2
        let w_divide: Matrix4 = Matrix4::from([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 2.0],
        ]);
        assert_eq!(
            w_divide.apply_to(Vector3::from([4.0, 2.0, 6.0])).unwrap(),
            Vector3::from([2.0, 1.0, 3.0])
        );

        let degenerate: Matrix4 = Matrix4::zero();
        assert_eq!(
            degenerate.apply_to(Vector3::one()),
            Err(MathError::DegenerateHomogeneousW)
        );
    }
}
